//! Settings persistence
//!
//! The settings record occupies a fixed 15-byte region at the start of
//! the EEPROM:
//!
//! ```text
//! ┌───────┬─────────┬──────────────────────────────┐
//! │ MAGIC │ VERSION │ RECORD                       │
//! │ 1B    │ 1B      │ 13B, one byte per field      │
//! └───────┴─────────┴──────────────────────────────┘
//! ```
//!
//! The record is trusted only when both header bytes match the expected
//! constants; anything else (blank part, older firmware) restores the
//! hardcoded defaults. Stores go through [`Eeprom::update_byte`] so an
//! unchanged record costs no write cycles.

use super::types::{Language, Rgb, TransitionMode};
use super::{Settings, MAX_BRIGHTNESS};
use crate::traits::{Eeprom, EepromError};

/// Marker byte identifying a settings record
pub const SETTINGS_MAGIC: u8 = 0xCA;

/// Layout version of the settings record
///
/// Bumped whenever a field is added or an offset changes. A mismatch
/// invalidates the whole record.
pub const SETTINGS_VERSION: u8 = 4;

/// Total record length in bytes, header included
pub const SETTINGS_LEN: usize = 15;

/// Byte offsets of the header and each field
mod offset {
    pub const MAGIC: u32 = 0;
    pub const VERSION: u32 = 1;
    pub const LANGUAGE: u32 = 2;
    pub const CORNERS_CW: u32 = 3;
    pub const USE_LDR: u32 = 4;
    pub const BRIGHTNESS: u32 = 5;
    pub const ALARM_ENABLED: u32 = 6;
    pub const DCF_INVERTED: u32 = 7;
    pub const TIME_SHIFT: u32 = 8;
    pub const TRANSITION: u32 = 9;
    pub const RED: u32 = 10;
    pub const GREEN: u32 = 11;
    pub const BLUE: u32 = 12;
    pub const EVENT: u32 = 13;
    pub const RAINBOW: u32 = 14;
}

impl Settings {
    /// Restore settings from EEPROM
    ///
    /// Returns the stored settings when a record with a matching header is
    /// present, the hardcoded defaults otherwise. A missing record is the
    /// normal first-boot path, not an error; only storage failures are.
    ///
    /// Code bytes without a counterpart (written by a foreign build, or
    /// decayed) fall back to the field default rather than invalidating
    /// the whole record.
    pub fn restore<E: Eeprom>(eeprom: &mut E) -> Result<Self, EepromError> {
        let magic = eeprom.read_byte(offset::MAGIC)?;
        let version = eeprom.read_byte(offset::VERSION)?;

        if magic != SETTINGS_MAGIC || version != SETTINGS_VERSION {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "no stored settings (magic {=u8:#x}, version {=u8}), using defaults",
                magic,
                version
            );
            return Ok(Self::default());
        }

        let settings = Self {
            language: Language::from_u8(eeprom.read_byte(offset::LANGUAGE)?).unwrap_or_default(),
            corners_clockwise: eeprom.read_byte(offset::CORNERS_CW)? != 0,
            use_ldr: eeprom.read_byte(offset::USE_LDR)? != 0,
            brightness: eeprom.read_byte(offset::BRIGHTNESS)?.min(MAX_BRIGHTNESS),
            alarm_enabled: eeprom.read_byte(offset::ALARM_ENABLED)? != 0,
            dcf_inverted: eeprom.read_byte(offset::DCF_INVERTED)? != 0,
            time_shift_h: eeprom.read_byte(offset::TIME_SHIFT)? as i8,
            transition: TransitionMode::from_u8(eeprom.read_byte(offset::TRANSITION)?)
                .unwrap_or_default(),
            color: Rgb::new(
                eeprom.read_byte(offset::RED)?,
                eeprom.read_byte(offset::GREEN)?,
                eeprom.read_byte(offset::BLUE)?,
            ),
            event: eeprom.read_byte(offset::EVENT)?,
            rainbow: eeprom.read_byte(offset::RAINBOW)? != 0,
        };

        #[cfg(feature = "defmt")]
        defmt::info!("settings restored from EEPROM");

        Ok(settings)
    }

    /// Store settings to EEPROM
    ///
    /// Writes the header and every field to its fixed offset. Each byte is
    /// compared against the stored value first and only written when it
    /// differs, so repeated stores of unchanged settings do not consume
    /// write cycles.
    pub fn store<E: Eeprom>(&self, eeprom: &mut E) -> Result<(), EepromError> {
        eeprom.update_byte(offset::MAGIC, SETTINGS_MAGIC)?;
        eeprom.update_byte(offset::VERSION, SETTINGS_VERSION)?;
        eeprom.update_byte(offset::LANGUAGE, self.language.as_u8())?;
        eeprom.update_byte(offset::CORNERS_CW, self.corners_clockwise as u8)?;
        eeprom.update_byte(offset::USE_LDR, self.use_ldr as u8)?;
        eeprom.update_byte(offset::BRIGHTNESS, self.brightness)?;
        eeprom.update_byte(offset::ALARM_ENABLED, self.alarm_enabled as u8)?;
        eeprom.update_byte(offset::DCF_INVERTED, self.dcf_inverted as u8)?;
        eeprom.update_byte(offset::TIME_SHIFT, self.time_shift_h as u8)?;
        eeprom.update_byte(offset::TRANSITION, self.transition.as_u8())?;
        eeprom.update_byte(offset::RED, self.color.red)?;
        eeprom.update_byte(offset::GREEN, self.color.green)?;
        eeprom.update_byte(offset::BLUE, self.color.blue)?;
        eeprom.update_byte(offset::EVENT, self.event)?;
        eeprom.update_byte(offset::RAINBOW, self.rainbow as u8)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("settings stored to EEPROM");

        Ok(())
    }
}
