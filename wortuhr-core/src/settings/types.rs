//! Settings value types
//!
//! Typed views of the code bytes persisted in EEPROM. Each enum maps to
//! exactly one storage byte via `as_u8`/`from_u8`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Word layout of the letter matrix
///
/// The German variants differ in how minutes past the hour are spoken
/// (e.g. "viertel nach" vs. "viertel über").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Language {
    /// Standard German
    DeDe = 0,
    /// Swabian
    DeSw = 1,
    /// Bavarian
    DeBa = 2,
    /// Saxon
    DeSa = 3,
    /// Swiss German (Bernese)
    #[default]
    Ch = 4,
    English = 5,
    French = 6,
    Italian = 7,
    Dutch = 8,
    Spanish = 9,
}

impl Language {
    /// Get the language as its storage byte
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a language from a storage byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Language::DeDe),
            1 => Some(Language::DeSw),
            2 => Some(Language::DeBa),
            3 => Some(Language::DeSa),
            4 => Some(Language::Ch),
            5 => Some(Language::English),
            6 => Some(Language::French),
            7 => Some(Language::Italian),
            8 => Some(Language::Dutch),
            9 => Some(Language::Spanish),
            _ => None,
        }
    }
}

/// Animation used when the displayed time changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TransitionMode {
    /// Hard switch to the new words
    #[default]
    Normal = 0,
    /// Cross-fade between old and new words
    Fade = 1,
    /// Letters rain down matrix-style
    Matrix = 2,
    /// New words slide in row by row
    Slide = 3,
}

impl TransitionMode {
    /// Get the mode as its storage byte
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a mode from a storage byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TransitionMode::Normal),
            1 => Some(TransitionMode::Fade),
            2 => Some(TransitionMode::Matrix),
            3 => Some(TransitionMode::Slide),
            _ => None,
        }
    }
}

/// LED color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Full-white, the factory color
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its components
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}
