//! Adapter for `embedded-storage` devices
//!
//! Wraps any blocking [`embedded_storage::Storage`] implementor (on-chip
//! EEPROM peripherals, external I2C/SPI parts via their device crates)
//! as a byte-addressable `Eeprom`.

use embedded_storage::Storage;

use wortuhr_core::traits::{Eeprom, EepromError};

/// `Eeprom` implementation backed by an `embedded-storage` device
pub struct StorageEeprom<S> {
    device: S,
}

impl<S> StorageEeprom<S> {
    /// Wrap a storage device
    pub fn new(device: S) -> Self {
        Self { device }
    }

    /// Consume the adapter and return the underlying device
    pub fn release(self) -> S {
        self.device
    }
}

impl<S: Storage> Eeprom for StorageEeprom<S> {
    fn read_byte(&mut self, addr: u32) -> Result<u8, EepromError> {
        if addr as usize >= self.device.capacity() {
            return Err(EepromError::OutOfBounds);
        }
        let mut buffer = [0u8; 1];
        self.device
            .read(addr, &mut buffer)
            .map_err(|_| EepromError::Bus)?;
        Ok(buffer[0])
    }

    fn write_byte(&mut self, addr: u32, value: u8) -> Result<(), EepromError> {
        if addr as usize >= self.device.capacity() {
            return Err(EepromError::OutOfBounds);
        }
        self.device
            .write(addr, &[value])
            .map_err(|_| EepromError::Bus)
    }

    fn capacity(&self) -> u32 {
        self.device.capacity() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_storage::ReadStorage;
    use wortuhr_core::settings::Settings;

    // Minimal embedded-storage device for testing
    struct MockStorage {
        bytes: [u8; 64],
        fail: bool,
    }

    struct MockError;

    impl ReadStorage for MockStorage {
        type Error = MockError;

        fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            let start = offset as usize;
            bytes.copy_from_slice(&self.bytes[start..start + bytes.len()]);
            Ok(())
        }

        fn capacity(&self) -> usize {
            self.bytes.len()
        }
    }

    impl Storage for MockStorage {
        fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            let start = offset as usize;
            self.bytes[start..start + bytes.len()].copy_from_slice(bytes);
            Ok(())
        }
    }

    #[test]
    fn test_byte_access() {
        let device = MockStorage {
            bytes: [0xFF; 64],
            fail: false,
        };
        let mut eeprom = StorageEeprom::new(device);

        eeprom.write_byte(10, 0x5A).unwrap();
        assert_eq!(eeprom.read_byte(10).unwrap(), 0x5A);
        assert_eq!(eeprom.capacity(), 64);
    }

    #[test]
    fn test_out_of_bounds_before_bus() {
        let device = MockStorage {
            bytes: [0xFF; 64],
            fail: true,
        };
        let mut eeprom = StorageEeprom::new(device);

        // Bounds are checked locally; the device is never touched
        assert_eq!(eeprom.read_byte(64), Err(EepromError::OutOfBounds));
        assert_eq!(eeprom.write_byte(64, 0), Err(EepromError::OutOfBounds));
    }

    #[test]
    fn test_bus_error_mapped() {
        let device = MockStorage {
            bytes: [0xFF; 64],
            fail: true,
        };
        let mut eeprom = StorageEeprom::new(device);

        assert_eq!(eeprom.read_byte(0), Err(EepromError::Bus));
        assert_eq!(eeprom.write_byte(0, 1), Err(EepromError::Bus));
    }

    #[test]
    fn test_settings_roundtrip_through_adapter() {
        let device = MockStorage {
            bytes: [0xFF; 64],
            fail: false,
        };
        let mut eeprom = StorageEeprom::new(device);

        let mut settings = Settings::default();
        settings.set_brightness(30);
        settings.set_rainbow(true);
        settings.store(&mut eeprom).unwrap();

        let restored = Settings::restore(&mut eeprom).unwrap();
        assert_eq!(restored, settings);
    }
}
