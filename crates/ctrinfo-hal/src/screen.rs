//! Screen panels
//!
//! Panel technology is not reported directly. The LCD service hands out a
//! vendor byte where the high nibble identifies the top panel vendor and the
//! low nibble the bottom one: JDI panels (`0x1`) are IPS, Sharp panels
//! (`0xC`) are TN.

use serde::{Deserialize, Serialize};

/// LCD register block of the top screen
pub const REG_LCD_TOP_SCREEN: u32 = 0x0020_2200;
/// LCD register block of the bottom screen
pub const REG_LCD_BOTTOM_SCREEN: u32 = 0x0020_2A00;
/// Backlight brightness register, relative to a screen's register block
pub const REG_LCD_BRIGHTNESS_OFFSET: u32 = 0x40;

const VENDOR_JDI: u8 = 0x1;
const VENDOR_SHARP: u8 = 0xC;

/// Physical screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Top,
    Bottom,
}

impl Screen {
    /// Address of this screen's backlight brightness register
    pub fn brightness_register(self) -> u32 {
        let base = match self {
            Screen::Top => REG_LCD_TOP_SCREEN,
            Screen::Bottom => REG_LCD_BOTTOM_SCREEN,
        };
        base + REG_LCD_BRIGHTNESS_OFFSET
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Top => "top",
            Screen::Bottom => "bottom",
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Top, Screen::Bottom]
    }
}

/// LCD panel technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenPanelType {
    #[serde(rename = "IPS")]
    Ips,
    #[serde(rename = "TN")]
    Tn,
    Unknown,
}

impl ScreenPanelType {
    /// Classify a vendor nibble. Only the low four bits are considered.
    pub fn classify(nibble: u8) -> Self {
        match nibble & 0xF {
            VENDOR_JDI => ScreenPanelType::Ips,
            VENDOR_SHARP => ScreenPanelType::Tn,
            _ => ScreenPanelType::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScreenPanelType::Ips => "IPS",
            ScreenPanelType::Tn => "TN",
            ScreenPanelType::Unknown => "Unknown",
        }
    }
}

/// Vendor byte as reported by the LCD service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorByte(pub u8);

impl VendorByte {
    pub fn top(self) -> ScreenPanelType {
        ScreenPanelType::classify(self.0 >> 4)
    }

    pub fn bottom(self) -> ScreenPanelType {
        ScreenPanelType::classify(self.0)
    }
}

/// Panel technology of both screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTypes {
    pub top: ScreenPanelType,
    pub bottom: ScreenPanelType,
}

impl ScreenTypes {
    /// Original-revision consoles only shipped with TN panels
    pub const ORIGINAL_REVISION: ScreenTypes = ScreenTypes {
        top: ScreenPanelType::Tn,
        bottom: ScreenPanelType::Tn,
    };

    pub fn get(&self, screen: Screen) -> ScreenPanelType {
        match screen {
            Screen::Top => self.top,
            Screen::Bottom => self.bottom,
        }
    }
}

impl From<VendorByte> for ScreenTypes {
    fn from(vendors: VendorByte) -> Self {
        Self {
            top: vendors.top(),
            bottom: vendors.bottom(),
        }
    }
}
