// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock device handles for testing
//!
//! Configurable implementations of every platform trait, usable in unit
//! tests without real hardware. Each mock records the calls it receives and
//! can be scripted to fail with a chosen [`PlatformError`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{
    AudioRinger, BluetoothAdapter, ConnectivityManager, MobileDataControl, PlatformError,
    RingerMode, VolumeFeedback, WifiRadio,
};

/// A mock WiFi radio backed by a plain boolean
pub struct MockWifiRadio {
    enabled: Mutex<bool>,
    failure: Mutex<Option<PlatformError>>,
}

impl MockWifiRadio {
    pub fn new(enabled: bool) -> Arc<Self> {
        Arc::new(Self {
            enabled: Mutex::new(enabled),
            failure: Mutex::new(None),
        })
    }

    /// Make every subsequent call fail with the given error
    pub fn fail_with(&self, err: PlatformError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn enabled(&self) -> bool {
        *self.enabled.lock().unwrap()
    }

    fn check(&self) -> Result<(), PlatformError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl WifiRadio for MockWifiRadio {
    fn is_enabled(&self) -> Result<bool, PlatformError> {
        self.check()?;
        Ok(*self.enabled.lock().unwrap())
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), PlatformError> {
        self.check()?;
        *self.enabled.lock().unwrap() = enabled;
        Ok(())
    }
}

/// A mock privileged mobile-data control
pub struct MockMobileDataControl {
    enabled: Mutex<bool>,
    failure: Mutex<Option<PlatformError>>,
}

impl MockMobileDataControl {
    pub fn new(enabled: bool) -> Arc<Self> {
        Arc::new(Self {
            enabled: Mutex::new(enabled),
            failure: Mutex::new(None),
        })
    }

    pub fn fail_with(&self, err: PlatformError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn enabled(&self) -> bool {
        *self.enabled.lock().unwrap()
    }

    fn check(&self) -> Result<(), PlatformError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl MobileDataControl for MockMobileDataControl {
    fn is_enabled(&self) -> Result<bool, PlatformError> {
        self.check()?;
        Ok(*self.enabled.lock().unwrap())
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), PlatformError> {
        self.check()?;
        *self.enabled.lock().unwrap() = enabled;
        Ok(())
    }
}

/// A mock connectivity manager
///
/// Scripted either to resolve a [`MockMobileDataControl`] or to fail the
/// lookup, and counts how many times resolution was attempted so tests can
/// assert the negative outcome is cached.
pub struct MockConnectivityManager {
    control: Option<Arc<MockMobileDataControl>>,
    resolve_error: PlatformError,
    resolve_calls: AtomicUsize,
}

impl MockConnectivityManager {
    /// A manager whose privileged entry point resolves
    pub fn with_control(control: Arc<MockMobileDataControl>) -> Arc<Self> {
        Arc::new(Self {
            control: Some(control),
            resolve_error: PlatformError::EntryPointMissing,
            resolve_calls: AtomicUsize::new(0),
        })
    }

    /// A manager whose privileged entry point fails to resolve
    pub fn unresolvable(err: PlatformError) -> Arc<Self> {
        Arc::new(Self {
            control: None,
            resolve_error: err,
            resolve_calls: AtomicUsize::new(0),
        })
    }

    /// Number of resolution attempts observed
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

impl ConnectivityManager for MockConnectivityManager {
    fn mobile_data_control(&self) -> Result<Arc<dyn MobileDataControl>, PlatformError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        match &self.control {
            Some(control) => Ok(control.clone() as Arc<dyn MobileDataControl>),
            None => Err(self.resolve_error.clone()),
        }
    }
}

/// A mock Bluetooth adapter
///
/// Enable/disable requests are recorded but not applied, matching the
/// asynchronous transition contract; call [`complete_transition`] to apply
/// the most recent request.
///
/// [`complete_transition`]: MockBluetoothAdapter::complete_transition
pub struct MockBluetoothAdapter {
    enabled: Mutex<bool>,
    requests: Mutex<Vec<bool>>,
    failure: Mutex<Option<PlatformError>>,
}

impl MockBluetoothAdapter {
    pub fn new(enabled: bool) -> Arc<Self> {
        Arc::new(Self {
            enabled: Mutex::new(enabled),
            requests: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        })
    }

    pub fn fail_with(&self, err: PlatformError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// Requested transitions, in order
    pub fn requests(&self) -> Vec<bool> {
        self.requests.lock().unwrap().clone()
    }

    /// Apply the most recent enable/disable request, if any
    pub fn complete_transition(&self) {
        if let Some(&requested) = self.requests.lock().unwrap().last() {
            *self.enabled.lock().unwrap() = requested;
        }
    }

    fn check(&self) -> Result<(), PlatformError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl BluetoothAdapter for MockBluetoothAdapter {
    fn is_enabled(&self) -> Result<bool, PlatformError> {
        self.check()?;
        Ok(*self.enabled.lock().unwrap())
    }

    fn request_enable(&self) -> Result<(), PlatformError> {
        self.check()?;
        self.requests.lock().unwrap().push(true);
        Ok(())
    }

    fn request_disable(&self) -> Result<(), PlatformError> {
        self.check()?;
        self.requests.lock().unwrap().push(false);
        Ok(())
    }
}

/// A mock audio/ringer handle
pub struct MockAudioRinger {
    mode: Mutex<RingerMode>,
    volume: Mutex<u32>,
    volume_calls: Mutex<Vec<(u32, VolumeFeedback)>>,
    failure: Mutex<Option<PlatformError>>,
}

impl MockAudioRinger {
    pub fn new(mode: RingerMode, volume: u32) -> Arc<Self> {
        Arc::new(Self {
            mode: Mutex::new(mode),
            volume: Mutex::new(volume),
            volume_calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        })
    }

    pub fn fail_with(&self, err: PlatformError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn mode(&self) -> RingerMode {
        *self.mode.lock().unwrap()
    }

    pub fn volume(&self) -> u32 {
        *self.volume.lock().unwrap()
    }

    /// Externally adjust the ring volume, as the device itself might
    pub fn set_device_volume(&self, level: u32) {
        *self.volume.lock().unwrap() = level;
    }

    /// Recorded `set_ring_volume` calls, in order
    pub fn volume_calls(&self) -> Vec<(u32, VolumeFeedback)> {
        self.volume_calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), PlatformError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AudioRinger for MockAudioRinger {
    fn ringer_mode(&self) -> Result<RingerMode, PlatformError> {
        self.check()?;
        Ok(*self.mode.lock().unwrap())
    }

    fn set_ringer_mode(&self, mode: RingerMode) -> Result<(), PlatformError> {
        self.check()?;
        *self.mode.lock().unwrap() = mode;
        Ok(())
    }

    fn ring_volume(&self) -> Result<u32, PlatformError> {
        self.check()?;
        Ok(*self.volume.lock().unwrap())
    }

    fn set_ring_volume(&self, level: u32, feedback: VolumeFeedback) -> Result<(), PlatformError> {
        self.check()?;
        *self.volume.lock().unwrap() = level;
        self.volume_calls.lock().unwrap().push((level, feedback));
        Ok(())
    }
}
