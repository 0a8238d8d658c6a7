//! System configuration blocks
//!
//! Config blocks are fixed-size binary records addressed by a 32-bit key.
//! Only the fields below are interpreted; everything else in a block is
//! carried through untouched.

use serde::{Deserialize, Serialize};

/// Sound output mode, one byte
pub const SOUND_OUTPUT_MODE_KEY: u32 = 0x0007_0001;
/// Backlight controls, see [`AutoBrightnessRecord`]
pub const AUTO_BRIGHTNESS_KEY: u32 = 0x0005_0009;

/// Speaker output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundOutputMode {
    Mono,
    Stereo,
    Surround,
}

impl SoundOutputMode {
    /// Map the stored byte to a mode, `None` outside 0..=2
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(SoundOutputMode::Mono),
            1 => Some(SoundOutputMode::Stereo),
            2 => Some(SoundOutputMode::Surround),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            SoundOutputMode::Mono => 0,
            SoundOutputMode::Stereo => 1,
            SoundOutputMode::Surround => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoundOutputMode::Mono => "Mono",
            SoundOutputMode::Stereo => "Stereo",
            SoundOutputMode::Surround => "Surround",
        }
    }
}

/// Backlight config block stored under [`AUTO_BRIGHTNESS_KEY`]
///
/// Layout (8 bytes): `unk1: u32 LE`, `enabled: u8`, `reserved: [u8; 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoBrightnessRecord {
    pub unk1: u32,
    pub enabled: u8,
    pub reserved: [u8; 3],
}

impl AutoBrightnessRecord {
    pub const SIZE: usize = 8;

    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled as u8,
            ..Self::default()
        }
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            unk1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            enabled: bytes[4],
            reserved: [bytes[5], bytes[6], bytes[7]],
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let unk1 = self.unk1.to_le_bytes();
        [
            unk1[0],
            unk1[1],
            unk1[2],
            unk1[3],
            self.enabled,
            self.reserved[0],
            self.reserved[1],
            self.reserved[2],
        ]
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_output_from_index() {
        assert_eq!(SoundOutputMode::from_index(0), Some(SoundOutputMode::Mono));
        assert_eq!(SoundOutputMode::from_index(1), Some(SoundOutputMode::Stereo));
        assert_eq!(
            SoundOutputMode::from_index(2),
            Some(SoundOutputMode::Surround)
        );
        assert_eq!(SoundOutputMode::from_index(3), None);
        assert_eq!(SoundOutputMode::from_index(0xFF), None);
    }

    #[test]
    fn test_sound_output_labels() {
        assert_eq!(SoundOutputMode::Mono.label(), "Mono");
        assert_eq!(SoundOutputMode::Stereo.label(), "Stereo");
        assert_eq!(SoundOutputMode::Surround.label(), "Surround");
        assert_eq!(SoundOutputMode::Surround.index(), 2);
    }

    #[test]
    fn test_auto_brightness_layout() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0x01, 0xAA, 0xBB, 0xCC];
        let record = AutoBrightnessRecord::from_bytes(&bytes);

        assert_eq!(record.unk1, 0x1234_5678);
        assert!(record.is_enabled());
        assert_eq!(record.reserved, [0xAA, 0xBB, 0xCC]);
        assert_eq!(record.to_bytes(), bytes);
    }

    #[test]
    fn test_auto_brightness_enabled_byte() {
        assert!(!AutoBrightnessRecord::new(false).is_enabled());
        assert!(AutoBrightnessRecord::new(true).is_enabled());

        let mut bytes = [0u8; AutoBrightnessRecord::SIZE];
        bytes[4] = 0x02;
        assert!(AutoBrightnessRecord::from_bytes(&bytes).is_enabled());
    }
}
