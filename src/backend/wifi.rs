// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! WiFi backend
//!
//! Thin pass-through over the officially supported radio handle. No
//! fallback path; faults propagate to the dispatcher's wrapper.

use std::sync::Arc;

use crate::backend::ToggleBackend;
use crate::error::{Result, SwitchboardError};
use crate::platform::WifiRadio;
use crate::toggle::ToggleId;

pub struct WifiBackend {
    radio: Option<Arc<dyn WifiRadio>>,
}

impl WifiBackend {
    pub fn new(radio: Option<Arc<dyn WifiRadio>>) -> Self {
        Self { radio }
    }

    fn radio(&self) -> Result<&Arc<dyn WifiRadio>> {
        self.radio
            .as_ref()
            .ok_or(SwitchboardError::BackendUnavailable(ToggleId::Wifi))
    }
}

impl ToggleBackend for WifiBackend {
    fn id(&self) -> ToggleId {
        ToggleId::Wifi
    }

    fn read(&self) -> Result<bool> {
        self.radio()?
            .is_enabled()
            .map_err(|source| SwitchboardError::Backend {
                id: ToggleId::Wifi,
                source,
            })
    }

    fn write(&self, desired: bool) -> Result<()> {
        self.radio()?
            .set_enabled(desired)
            .map_err(|source| SwitchboardError::Backend {
                id: ToggleId::Wifi,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockWifiRadio;
    use crate::platform::PlatformError;

    #[test]
    fn test_read_reports_radio_state() {
        let radio = MockWifiRadio::new(true);
        let backend = WifiBackend::new(Some(radio as Arc<dyn WifiRadio>));
        assert!(backend.read().unwrap());
    }

    #[test]
    fn test_write_then_read() {
        let radio = MockWifiRadio::new(false);
        let backend = WifiBackend::new(Some(radio.clone() as Arc<dyn WifiRadio>));
        backend.write(true).unwrap();
        assert!(backend.read().unwrap());
        assert!(radio.enabled());
    }

    #[test]
    fn test_missing_handle_is_unavailable() {
        let backend = WifiBackend::new(None);
        assert!(matches!(
            backend.read(),
            Err(SwitchboardError::BackendUnavailable(ToggleId::Wifi))
        ));
        assert!(matches!(
            backend.write(true),
            Err(SwitchboardError::BackendUnavailable(ToggleId::Wifi))
        ));
    }

    #[test]
    fn test_radio_fault_propagates() {
        let radio = MockWifiRadio::new(true);
        radio.fail_with(PlatformError::Internal("driver fault".to_string()));
        let backend = WifiBackend::new(Some(radio as Arc<dyn WifiRadio>));
        assert!(matches!(
            backend.read(),
            Err(SwitchboardError::Backend {
                id: ToggleId::Wifi,
                ..
            })
        ));
    }
}
