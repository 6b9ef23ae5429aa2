// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Opaque device-access handles supplied by the host
//!
//! Switchboard never touches hardware directly. The host implements these
//! traits over whatever the operating environment provides (a connectivity
//! manager, a radio manager, an adapter reference, an audio manager) and
//! hands them in at construction. Handles are held for the dispatcher's
//! entire lifetime and are not assumed to be internally thread-safe; a host
//! embedding the dispatcher in a concurrent caller synchronizes externally.

pub mod mock;

use std::sync::Arc;
use thiserror::Error;

/// Fault raised by a device handle
///
/// The three variants match the ways a privileged entry point can fail, but
/// every handle may return any of them; callers treat them identically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The entry point does not exist on this platform version
    #[error("entry point missing on this platform version")]
    EntryPointMissing,

    /// The caller lacks permission to invoke the entry point
    #[error("permission denied by the platform")]
    PermissionDenied,

    /// The platform raised an internal error during invocation
    #[error("platform internal error: {0}")]
    Internal(String),
}

/// Ringer mode as reported by the audio handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingerMode {
    Normal,
    Vibrate,
    Silent,
}

/// Feedback the platform should give when a volume change is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeFeedback {
    PlaySound,
    Vibrate,
    None,
}

/// Officially supported WiFi radio control
pub trait WifiRadio {
    fn is_enabled(&self) -> Result<bool, PlatformError>;
    fn set_enabled(&self, enabled: bool) -> Result<(), PlatformError>;
}

/// The privileged mobile-data control surface, once resolved
pub trait MobileDataControl {
    fn is_enabled(&self) -> Result<bool, PlatformError>;
    fn set_enabled(&self, enabled: bool) -> Result<(), PlatformError>;
}

/// Connectivity-management handle
///
/// Mobile data has no public control surface on the target platform family;
/// the control entry point must be located at runtime by name. Resolution
/// can fail because the entry point is gone on this platform version, the
/// process lacks permission, or the platform errors internally. Platform
/// upgrades can remove the entry point at any time, so a resolved handle is
/// still allowed to fail on every later call.
pub trait ConnectivityManager {
    fn mobile_data_control(&self) -> Result<Arc<dyn MobileDataControl>, PlatformError>;
}

/// Bluetooth adapter control
///
/// `request_enable`/`request_disable` only kick off the transition; the
/// adapter state may not reflect the requested value when they return.
pub trait BluetoothAdapter {
    fn is_enabled(&self) -> Result<bool, PlatformError>;
    fn request_enable(&self) -> Result<(), PlatformError>;
    fn request_disable(&self) -> Result<(), PlatformError>;
}

/// Audio/ringer control
///
/// Ringer mode and ring-stream volume are decoupled on some platform
/// versions, which is why both are exposed here.
pub trait AudioRinger {
    fn ringer_mode(&self) -> Result<RingerMode, PlatformError>;
    fn set_ringer_mode(&self, mode: RingerMode) -> Result<(), PlatformError>;
    fn ring_volume(&self) -> Result<u32, PlatformError>;
    fn set_ring_volume(&self, level: u32, feedback: VolumeFeedback) -> Result<(), PlatformError>;
}
