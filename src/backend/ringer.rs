// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Ringer silence backend
//!
//! "Silent" collapses two device modes into one boolean: both fully-silent
//! and vibrate-only read back as on. Silencing sets vibrate mode and forces
//! the ring stream to zero, because some platform versions decouple ringer
//! mode from stream volume and the phone would otherwise still ring
//! audibly. Unsilencing restores normal mode and re-applies whatever volume
//! the device reports at that moment; there is no memory of the pre-silence
//! volume, so toggling does not round-trip it.

use std::sync::Arc;

use crate::backend::ToggleBackend;
use crate::error::{Result, SwitchboardError};
use crate::platform::{AudioRinger, RingerMode, VolumeFeedback};
use crate::toggle::ToggleId;

pub struct RingerSilenceBackend {
    audio: Option<Arc<dyn AudioRinger>>,
}

impl RingerSilenceBackend {
    pub fn new(audio: Option<Arc<dyn AudioRinger>>) -> Self {
        Self { audio }
    }

    fn audio(&self) -> Result<&Arc<dyn AudioRinger>> {
        self.audio
            .as_ref()
            .ok_or(SwitchboardError::BackendUnavailable(ToggleId::RingerSilence))
    }

    fn fault(source: crate::platform::PlatformError) -> SwitchboardError {
        SwitchboardError::Backend {
            id: ToggleId::RingerSilence,
            source,
        }
    }
}

impl ToggleBackend for RingerSilenceBackend {
    fn id(&self) -> ToggleId {
        ToggleId::RingerSilence
    }

    fn read(&self) -> Result<bool> {
        let mode = self.audio()?.ringer_mode().map_err(Self::fault)?;
        Ok(matches!(mode, RingerMode::Silent | RingerMode::Vibrate))
    }

    fn write(&self, desired: bool) -> Result<()> {
        let audio = self.audio()?;
        if desired {
            audio
                .set_ringer_mode(RingerMode::Vibrate)
                .map_err(Self::fault)?;
            audio
                .set_ring_volume(0, VolumeFeedback::Vibrate)
                .map_err(Self::fault)?;
        } else {
            audio
                .set_ringer_mode(RingerMode::Normal)
                .map_err(Self::fault)?;
            // re-apply the volume currently on the device, not a remembered one
            let current = audio.ring_volume().map_err(Self::fault)?;
            audio
                .set_ring_volume(current, VolumeFeedback::PlaySound)
                .map_err(Self::fault)?;
        }
        Ok(())
    }
}
