// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Toggle identifiers, descriptors, and read results
//!
//! The set of toggles is closed: adding one is a code change, not a runtime
//! registration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SwitchboardError;

/// Identifier for one of the supported device toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleId {
    #[serde(rename = "wifi")]
    Wifi,
    #[serde(rename = "data")]
    CellularData,
    #[serde(rename = "bluetooth")]
    Bluetooth,
    #[serde(rename = "silent")]
    RingerSilence,
}

impl ToggleId {
    /// All supported toggle identifiers
    pub const ALL: [ToggleId; 4] = [
        ToggleId::Wifi,
        ToggleId::CellularData,
        ToggleId::Bluetooth,
        ToggleId::RingerSilence,
    ];

    /// Stable name used in serialized form and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleId::Wifi => "wifi",
            ToggleId::CellularData => "data",
            ToggleId::Bluetooth => "bluetooth",
            ToggleId::RingerSilence => "silent",
        }
    }
}

impl fmt::Display for ToggleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToggleId {
    type Err = SwitchboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wifi" => Ok(ToggleId::Wifi),
            "data" => Ok(ToggleId::CellularData),
            "bluetooth" => Ok(ToggleId::Bluetooth),
            "silent" => Ok(ToggleId::RingerSilence),
            other => Err(SwitchboardError::UnknownToggleName(other.to_string())),
        }
    }
}

/// Caller-supplied description of the toggle a request addresses
///
/// The label is display metadata only; dispatch is keyed on `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleDescriptor {
    pub id: ToggleId,
    pub label: String,
}

impl ToggleDescriptor {
    pub fn new(id: ToggleId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Result of reading a toggle
///
/// `Unknown` covers every failure mode: the capability is absent on this
/// device, the backend handle was never supplied, or the underlying query
/// failed. Callers persist and display this value, so the three causes are
/// deliberately indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleState {
    On,
    Off,
    Unknown,
}

impl ToggleState {
    /// Whether the toggle is known to be on
    pub fn is_on(&self) -> bool {
        matches!(self, ToggleState::On)
    }
}

impl From<bool> for ToggleState {
    fn from(enabled: bool) -> Self {
        if enabled {
            ToggleState::On
        } else {
            ToggleState::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_id_as_str() {
        assert_eq!(ToggleId::Wifi.as_str(), "wifi");
        assert_eq!(ToggleId::CellularData.as_str(), "data");
        assert_eq!(ToggleId::Bluetooth.as_str(), "bluetooth");
        assert_eq!(ToggleId::RingerSilence.as_str(), "silent");
    }

    #[test]
    fn test_toggle_id_from_str() {
        assert_eq!("wifi".parse::<ToggleId>().unwrap(), ToggleId::Wifi);
        assert_eq!("data".parse::<ToggleId>().unwrap(), ToggleId::CellularData);
        assert_eq!(
            "bluetooth".parse::<ToggleId>().unwrap(),
            ToggleId::Bluetooth
        );
        assert_eq!(
            "silent".parse::<ToggleId>().unwrap(),
            ToggleId::RingerSilence
        );
    }

    #[test]
    fn test_toggle_id_from_str_unknown() {
        let err = "airplane".parse::<ToggleId>().unwrap_err();
        assert!(err.to_string().contains("airplane"));
    }

    #[test]
    fn test_toggle_id_display_round_trip() {
        for id in ToggleId::ALL {
            assert_eq!(id.to_string().parse::<ToggleId>().unwrap(), id);
        }
    }

    #[test]
    fn test_toggle_id_serde_names() {
        assert_eq!(
            serde_json::to_string(&ToggleId::CellularData).unwrap(),
            "\"data\""
        );
        assert_eq!(
            serde_json::from_str::<ToggleId>("\"silent\"").unwrap(),
            ToggleId::RingerSilence
        );
    }

    #[test]
    fn test_descriptor_new() {
        let descriptor = ToggleDescriptor::new(ToggleId::Wifi, "Wi-Fi");
        assert_eq!(descriptor.id, ToggleId::Wifi);
        assert_eq!(descriptor.label, "Wi-Fi");
    }

    #[test]
    fn test_state_from_bool() {
        assert_eq!(ToggleState::from(true), ToggleState::On);
        assert_eq!(ToggleState::from(false), ToggleState::Off);
    }

    #[test]
    fn test_state_is_on() {
        assert!(ToggleState::On.is_on());
        assert!(!ToggleState::Off.is_on());
        assert!(!ToggleState::Unknown.is_on());
    }

    #[test]
    fn test_state_serde() {
        assert_eq!(
            serde_json::to_string(&ToggleState::Unknown).unwrap(),
            "\"unknown\""
        );
        assert_eq!(
            serde_json::from_str::<ToggleState>("\"on\"").unwrap(),
            ToggleState::On
        );
    }
}
