// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Switchboard
//!
//! Every variant here is terminal at the dispatcher: `get_state` and
//! `set_state` normalize all of them into a tri-state or a no-op, and
//! nothing escapes to the host as a fault.

use thiserror::Error;

use crate::platform::PlatformError;
use crate::toggle::ToggleId;

/// Main error type for Switchboard operations
#[derive(Error, Debug)]
pub enum SwitchboardError {
    /// No backend registered for the requested toggle
    #[error("unsupported toggle: {0}")]
    UnrecognizedToggle(ToggleId),

    /// The device handle backing this toggle was never supplied, or the
    /// privileged entry point it needs does not resolve on this device
    #[error("toggle {0} is unavailable on this device")]
    BackendUnavailable(ToggleId),

    /// The underlying device call failed
    #[error("toggle {id} operation failed: {source}")]
    Backend {
        id: ToggleId,
        #[source]
        source: PlatformError,
    },

    /// A toggle name that is not part of the supported set
    #[error("unknown toggle name: {0}")]
    UnknownToggleName(String),
}

/// Result type alias for Switchboard operations
pub type Result<T> = std::result::Result<T, SwitchboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_toggle_message() {
        let err = SwitchboardError::UnrecognizedToggle(ToggleId::Wifi);
        assert!(err.to_string().contains("unsupported toggle"));
        assert!(err.to_string().contains("wifi"));
    }

    #[test]
    fn test_backend_unavailable_message() {
        let err = SwitchboardError::BackendUnavailable(ToggleId::Bluetooth);
        assert!(err.to_string().contains("bluetooth"));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn test_backend_error_carries_source() {
        let err = SwitchboardError::Backend {
            id: ToggleId::CellularData,
            source: PlatformError::PermissionDenied,
        };
        assert!(err.to_string().contains("data"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("permission"));
    }

    #[test]
    fn test_unknown_toggle_name_message() {
        let err = SwitchboardError::UnknownToggleName("airplane".to_string());
        assert!(err.to_string().contains("airplane"));
    }
}
