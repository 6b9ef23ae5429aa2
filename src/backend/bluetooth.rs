// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bluetooth backend
//!
//! The adapter may simply not exist on this host; an absent handle degrades
//! every call to the unavailable path. Writes only request a transition:
//! the adapter flips state asynchronously, so a read immediately after a
//! write may still report the old state.

use std::sync::Arc;

use crate::backend::ToggleBackend;
use crate::error::{Result, SwitchboardError};
use crate::platform::BluetoothAdapter;
use crate::toggle::ToggleId;

pub struct BluetoothBackend {
    adapter: Option<Arc<dyn BluetoothAdapter>>,
}

impl BluetoothBackend {
    pub fn new(adapter: Option<Arc<dyn BluetoothAdapter>>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> Result<&Arc<dyn BluetoothAdapter>> {
        self.adapter
            .as_ref()
            .ok_or(SwitchboardError::BackendUnavailable(ToggleId::Bluetooth))
    }
}

impl ToggleBackend for BluetoothBackend {
    fn id(&self) -> ToggleId {
        ToggleId::Bluetooth
    }

    fn read(&self) -> Result<bool> {
        self.adapter()?
            .is_enabled()
            .map_err(|source| SwitchboardError::Backend {
                id: ToggleId::Bluetooth,
                source,
            })
    }

    fn write(&self, desired: bool) -> Result<()> {
        let adapter = self.adapter()?;
        let request = if desired {
            adapter.request_enable()
        } else {
            adapter.request_disable()
        };
        request.map_err(|source| SwitchboardError::Backend {
            id: ToggleId::Bluetooth,
            source,
        })
    }
}
