//! Storage driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in wortuhr-core:
//!
//! - RAM-backed EEPROM (host tests, simulators)
//! - Adapter for `embedded-storage` devices (on-chip EEPROM, external parts)

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
