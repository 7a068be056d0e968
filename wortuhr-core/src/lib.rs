//! Board-agnostic core logic for the word clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (EEPROM storage)
//! - User settings data model with hardcoded defaults
//! - Settings persistence (fixed EEPROM byte layout with header check)

#![no_std]
#![deny(unsafe_code)]

pub mod settings;
pub mod traits;
