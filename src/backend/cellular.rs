// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cellular data backend
//!
//! Mobile data has no public control surface on the target platform
//! family, so this backend resolves a privileged entry point by name at
//! runtime through the connectivity handle. Resolution happens lazily on
//! first use and the outcome is cached either way: a platform where the
//! entry point is gone must not pay for a fresh lookup on every call.
//!
//! This is the most fragile integration point in the crate. A platform
//! upgrade can remove the entry point at any time, so even a resolved
//! control is allowed to fail per call; nothing here assumes availability
//! beyond the current operation.

use std::cell::OnceCell;
use std::sync::Arc;

use crate::backend::ToggleBackend;
use crate::error::{Result, SwitchboardError};
use crate::platform::{ConnectivityManager, MobileDataControl};
use crate::toggle::ToggleId;

pub struct CellularDataBackend {
    connectivity: Option<Arc<dyn ConnectivityManager>>,
    // None after a failed resolution, so the miss is cached too
    control: OnceCell<Option<Arc<dyn MobileDataControl>>>,
}

impl CellularDataBackend {
    pub fn new(connectivity: Option<Arc<dyn ConnectivityManager>>) -> Self {
        Self {
            connectivity,
            control: OnceCell::new(),
        }
    }

    /// Resolve the privileged control, at most once per process lifetime
    fn control(&self) -> Result<&Arc<dyn MobileDataControl>> {
        let connectivity = self
            .connectivity
            .as_ref()
            .ok_or(SwitchboardError::BackendUnavailable(ToggleId::CellularData))?;

        let resolved = self.control.get_or_init(|| {
            match connectivity.mobile_data_control() {
                Ok(control) => Some(control),
                Err(err) => {
                    tracing::warn!(
                        toggle = ToggleId::CellularData.as_str(),
                        error = %err,
                        "privileged mobile-data entry point did not resolve"
                    );
                    None
                }
            }
        });

        resolved
            .as_ref()
            .ok_or(SwitchboardError::BackendUnavailable(ToggleId::CellularData))
    }
}

impl ToggleBackend for CellularDataBackend {
    fn id(&self) -> ToggleId {
        ToggleId::CellularData
    }

    fn read(&self) -> Result<bool> {
        self.control()?
            .is_enabled()
            .map_err(|source| SwitchboardError::Backend {
                id: ToggleId::CellularData,
                source,
            })
    }

    fn write(&self, desired: bool) -> Result<()> {
        self.control()?
            .set_enabled(desired)
            .map_err(|source| SwitchboardError::Backend {
                id: ToggleId::CellularData,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockConnectivityManager, MockMobileDataControl};
    use crate::platform::PlatformError;

    #[test]
    fn test_read_through_resolved_control() {
        let control = MockMobileDataControl::new(true);
        let manager = MockConnectivityManager::with_control(control);
        let backend = CellularDataBackend::new(Some(manager as Arc<dyn ConnectivityManager>));
        assert!(backend.read().unwrap());
    }

    #[test]
    fn test_write_through_resolved_control() {
        let control = MockMobileDataControl::new(true);
        let manager = MockConnectivityManager::with_control(control.clone());
        let backend = CellularDataBackend::new(Some(manager as Arc<dyn ConnectivityManager>));
        backend.write(false).unwrap();
        assert!(!control.enabled());
    }

    #[test]
    fn test_entry_point_absent_reads_unavailable() {
        let manager = MockConnectivityManager::unresolvable(PlatformError::EntryPointMissing);
        let backend =
            CellularDataBackend::new(Some(manager.clone() as Arc<dyn ConnectivityManager>));
        assert!(matches!(
            backend.read(),
            Err(SwitchboardError::BackendUnavailable(ToggleId::CellularData))
        ));
    }

    #[test]
    fn test_failed_resolution_is_cached() {
        let manager = MockConnectivityManager::unresolvable(PlatformError::PermissionDenied);
        let backend =
            CellularDataBackend::new(Some(manager.clone() as Arc<dyn ConnectivityManager>));

        assert!(backend.read().is_err());
        assert!(backend.write(true).is_err());
        assert!(backend.read().is_err());

        // one lookup, then the cached miss
        assert_eq!(manager.resolve_calls(), 1);
    }

    #[test]
    fn test_successful_resolution_is_cached() {
        let control = MockMobileDataControl::new(false);
        let manager = MockConnectivityManager::with_control(control);
        let backend =
            CellularDataBackend::new(Some(manager.clone() as Arc<dyn ConnectivityManager>));

        assert!(!backend.read().unwrap());
        backend.write(true).unwrap();
        assert!(backend.read().unwrap());

        assert_eq!(manager.resolve_calls(), 1);
    }

    #[test]
    fn test_missing_connectivity_handle() {
        let backend = CellularDataBackend::new(None);
        assert!(matches!(
            backend.read(),
            Err(SwitchboardError::BackendUnavailable(ToggleId::CellularData))
        ));
    }

    #[test]
    fn test_resolved_control_may_still_fail_per_call() {
        let control = MockMobileDataControl::new(true);
        let manager = MockConnectivityManager::with_control(control.clone());
        let backend = CellularDataBackend::new(Some(manager as Arc<dyn ConnectivityManager>));

        assert!(backend.read().is_ok());
        control.fail_with(PlatformError::Internal("platform revoked".to_string()));
        assert!(matches!(
            backend.read(),
            Err(SwitchboardError::Backend {
                id: ToggleId::CellularData,
                ..
            })
        ));
    }
}
