// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Switchboard - uniform control surface for binary device toggles.
//!
//! A host hands in opaque device handles (WiFi radio, connectivity manager,
//! Bluetooth adapter, audio/ringer manager) and gets back a
//! [`ToggleDispatcher`] that reads and writes four named toggles through a
//! single interface, regardless of how irregular the underlying control
//! mechanisms are.
//!
//! Architecture highlights:
//! - `toggle`: identifiers, descriptors, and the tri-state read result
//! - `platform`: the handle traits the host implements, plus mocks
//! - `backend`: one backend per toggle, each wrapping one device subsystem
//! - `dispatch`: the name-keyed router and its never-raises failure policy
//!
//! The dispatcher's contract is "never raises, always returns a usable
//! value": a failed read is `Unknown`, a failed write is a logged no-op.
//! Failures surface only on the `tracing` diagnostic channel.

pub mod backend;
pub mod dispatch;
pub mod error;
pub mod platform;
pub mod toggle;

pub use dispatch::{DeviceHandles, ToggleDispatcher};
pub use error::{Result, SwitchboardError};
pub use toggle::{ToggleDescriptor, ToggleId, ToggleState};
