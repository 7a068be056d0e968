//! User settings
//!
//! The settings a user can change at the device: language, display
//! options, brightness, alarm, DCF receiver polarity and LED color.
//! One instance lives for the whole uptime; it starts from hardcoded
//! defaults, is optionally overwritten by [`Settings::restore`] at boot,
//! is mutated through the accessors and persisted with
//! [`Settings::store`].

pub mod persist;
pub mod types;

pub use persist::{SETTINGS_LEN, SETTINGS_MAGIC, SETTINGS_VERSION};
pub use types::{Language, Rgb, TransitionMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum manual brightness in percent
pub const MAX_BRIGHTNESS: u8 = 100;

/// User-configurable settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    language: Language,
    event: u8,
    corners_clockwise: bool,
    use_ldr: bool,
    brightness: u8,
    alarm_enabled: bool,
    dcf_inverted: bool,
    time_shift_h: i8,
    transition: TransitionMode,
    color: Rgb,
    rainbow: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Ch,
            event: 0,
            corners_clockwise: true,
            use_ldr: true,
            brightness: 75,
            alarm_enabled: false,
            dcf_inverted: false,
            time_shift_h: 0,
            transition: TransitionMode::Normal,
            color: Rgb::WHITE,
            rainbow: false,
        }
    }
}

impl Settings {
    /// Word layout of the letter matrix
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Yearly event table index, 0 = none
    ///
    /// The event table itself lives with the renderer; only the selection
    /// is stored here.
    pub fn event(&self) -> u8 {
        self.event
    }

    pub fn set_event(&mut self, event: u8) {
        self.event = event;
    }

    /// Walk direction of the corner minute LEDs
    pub fn corners_clockwise(&self) -> bool {
        self.corners_clockwise
    }

    pub fn set_corners_clockwise(&mut self, clockwise: bool) {
        self.corners_clockwise = clockwise;
    }

    /// Whether the LDR drives brightness automatically
    pub fn use_ldr(&self) -> bool {
        self.use_ldr
    }

    pub fn set_use_ldr(&mut self, use_ldr: bool) {
        self.use_ldr = use_ldr;
    }

    /// Manual brightness in percent (0..=100)
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the manual brightness, clamped to [`MAX_BRIGHTNESS`]
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness.min(MAX_BRIGHTNESS);
    }

    /// Whether the alarm is armed
    pub fn alarm_enabled(&self) -> bool {
        self.alarm_enabled
    }

    pub fn set_alarm_enabled(&mut self, enabled: bool) {
        self.alarm_enabled = enabled;
    }

    /// Output polarity of the DCF77 receiver module
    ///
    /// Some receiver boards emit the 100ms/200ms second marks inverted.
    pub fn dcf_inverted(&self) -> bool {
        self.dcf_inverted
    }

    pub fn set_dcf_inverted(&mut self, inverted: bool) {
        self.dcf_inverted = inverted;
    }

    /// Hour offset applied on top of the received time
    pub fn time_shift_h(&self) -> i8 {
        self.time_shift_h
    }

    pub fn set_time_shift_h(&mut self, hours: i8) {
        self.time_shift_h = hours;
    }

    /// Animation used when the displayed time changes
    pub fn transition(&self) -> TransitionMode {
        self.transition
    }

    pub fn set_transition(&mut self, transition: TransitionMode) {
        self.transition = transition;
    }

    /// Fixed LED color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Select a fixed LED color
    ///
    /// Leaves rainbow mode; a fixed color and the cycling rainbow are
    /// mutually exclusive.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.rainbow = false;
    }

    /// Whether the cycling rainbow color mode is active
    pub fn rainbow(&self) -> bool {
        self.rainbow
    }

    pub fn set_rainbow(&mut self, rainbow: bool) {
        self.rainbow = rainbow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.language(), Language::Ch);
        assert_eq!(settings.event(), 0);
        assert!(settings.corners_clockwise());
        assert!(settings.use_ldr());
        assert_eq!(settings.brightness(), 75);
        assert!(!settings.alarm_enabled());
        assert!(!settings.dcf_inverted());
        assert_eq!(settings.time_shift_h(), 0);
        assert_eq!(settings.transition(), TransitionMode::Normal);
        assert_eq!(settings.color(), Rgb::WHITE);
        assert!(!settings.rainbow());
    }

    #[test]
    fn test_set_color_leaves_rainbow() {
        let mut settings = Settings::default();
        settings.set_rainbow(true);
        assert!(settings.rainbow());

        settings.set_color(Rgb::new(255, 0, 0));
        assert!(!settings.rainbow());
        assert_eq!(settings.color(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_brightness_clamped() {
        let mut settings = Settings::default();
        settings.set_brightness(255);
        assert_eq!(settings.brightness(), MAX_BRIGHTNESS);

        settings.set_brightness(40);
        assert_eq!(settings.brightness(), 40);
    }

    #[test]
    fn test_negative_time_shift() {
        let mut settings = Settings::default();
        settings.set_time_shift_h(-2);
        assert_eq!(settings.time_shift_h(), -2);
    }
}
