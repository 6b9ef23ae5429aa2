// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Toggle backends
//!
//! One backend per toggle, each encapsulating exactly one device
//! subsystem's access pattern. Backends never talk to each other and hold
//! no shared mutable state beyond their own device handle. Fallibility is
//! explicit: `read`/`write` return `Result` and the dispatcher is the
//! single place where failures are normalized.

pub mod bluetooth;
pub mod cellular;
pub mod ringer;
pub mod wifi;

pub use bluetooth::BluetoothBackend;
pub use cellular::CellularDataBackend;
pub use ringer::RingerSilenceBackend;
pub use wifi::WifiBackend;

use crate::error::Result;
use crate::toggle::ToggleId;

/// Trait for implementing toggle backends
pub trait ToggleBackend {
    /// The toggle this backend serves
    fn id(&self) -> ToggleId;

    /// Read the current enabled state from the device
    fn read(&self) -> Result<bool>;

    /// Request the desired enabled state on the device
    ///
    /// Some backends only kick off a transition; callers needing
    /// confirmation must re-read.
    fn write(&self, desired: bool) -> Result<()>;
}
