// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Toggle dispatcher
//!
//! Single entry point routing a toggle identifier to its backend, with a
//! uniform resilience wrapper: neither operation ever panics or returns an
//! error, because a caller walking a list of toggles must not have one bad
//! toggle abort the batch. Failures are reported on the `tracing`
//! diagnostic channel and normalized into the return value (`Unknown` for
//! reads, silent no-op for writes).
//!
//! The backend table is built once at construction and never mutated; no
//! registration or removal happens at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::{
    BluetoothBackend, CellularDataBackend, RingerSilenceBackend, ToggleBackend, WifiBackend,
};
use crate::error::{Result, SwitchboardError};
use crate::platform::{AudioRinger, BluetoothAdapter, ConnectivityManager, WifiRadio};
use crate::toggle::{ToggleDescriptor, ToggleId, ToggleState};

/// Device-access handles supplied by the host at construction
///
/// A `None` handle degrades that toggle to the `Unknown`/no-op path for the
/// process lifetime.
#[derive(Default)]
pub struct DeviceHandles {
    pub wifi: Option<Arc<dyn WifiRadio>>,
    pub connectivity: Option<Arc<dyn ConnectivityManager>>,
    pub bluetooth: Option<Arc<dyn BluetoothAdapter>>,
    pub audio: Option<Arc<dyn AudioRinger>>,
}

/// Routes toggle reads and writes to the matching backend
pub struct ToggleDispatcher {
    backends: HashMap<ToggleId, Box<dyn ToggleBackend>>,
}

impl ToggleDispatcher {
    /// Build the dispatcher with one backend per supported toggle
    pub fn new(handles: DeviceHandles) -> Self {
        let mut backends: HashMap<ToggleId, Box<dyn ToggleBackend>> = HashMap::new();
        backends.insert(ToggleId::Wifi, Box::new(WifiBackend::new(handles.wifi)));
        backends.insert(
            ToggleId::CellularData,
            Box::new(CellularDataBackend::new(handles.connectivity)),
        );
        backends.insert(
            ToggleId::Bluetooth,
            Box::new(BluetoothBackend::new(handles.bluetooth)),
        );
        backends.insert(
            ToggleId::RingerSilence,
            Box::new(RingerSilenceBackend::new(handles.audio)),
        );
        Self { backends }
    }

    /// Build a dispatcher from an explicit backend table
    ///
    /// `new` registers every supported toggle; this constructor is the seam
    /// for substituting or omitting backends in tests.
    pub fn with_backends(backends: HashMap<ToggleId, Box<dyn ToggleBackend>>) -> Self {
        Self { backends }
    }

    fn backend(&self, id: ToggleId) -> Result<&dyn ToggleBackend> {
        self.backends
            .get(&id)
            .map(|backend| backend.as_ref())
            .ok_or(SwitchboardError::UnrecognizedToggle(id))
    }

    /// Read the current state of a toggle
    ///
    /// Never panics. An unregistered toggle reads as `Off` (not `Unknown`);
    /// any backend failure, including an absent device, reads as `Unknown`.
    pub fn get_state(&self, descriptor: &ToggleDescriptor) -> ToggleState {
        match self.backend(descriptor.id).and_then(|b| b.read()) {
            Ok(enabled) => ToggleState::from(enabled),
            Err(SwitchboardError::UnrecognizedToggle(id)) => {
                tracing::error!(toggle = id.as_str(), "unsupported toggle for reading");
                ToggleState::Off
            }
            Err(err) => {
                tracing::warn!(
                    toggle = descriptor.id.as_str(),
                    error = %err,
                    "toggle read failed, reporting unknown"
                );
                ToggleState::Unknown
            }
        }
    }

    /// Request a new state for a toggle
    ///
    /// Fire-and-forget: never panics, returns nothing. A failed write
    /// leaves device state unchanged and is only reported on the diagnostic
    /// channel; callers needing confirmation re-read via `get_state`.
    pub fn set_state(&self, descriptor: &ToggleDescriptor, desired: bool) {
        match self.backend(descriptor.id).and_then(|b| b.write(desired)) {
            Ok(()) => {}
            Err(SwitchboardError::UnrecognizedToggle(id)) => {
                tracing::error!(toggle = id.as_str(), "unsupported toggle for update");
            }
            Err(err) => {
                tracing::warn!(
                    toggle = descriptor.id.as_str(),
                    desired,
                    error = %err,
                    "toggle update failed, device state unchanged"
                );
            }
        }
    }
}
