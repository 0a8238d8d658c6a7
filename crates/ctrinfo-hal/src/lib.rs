//! Hardware facts for 3DS-family consoles
//!
//! This crate normalizes revision-dependent hardware details into a small set
//! of stable values for system-information screens: screen panel technology,
//! backlight brightness, headphone jack, game card and SD card presence,
//! sound output mode and auto-brightness.
//!
//! Platform services are reached through the traits in [`service`]. A mock
//! backend lives in [`mock`].
//!
//! # Example
//!
//! ```no_run
//! use ctrinfo_hal::mock::{MockHal, MockProfile};
//! use ctrinfo_hal::{HardwareFacts, Screen};
//!
//! fn main() -> Result<(), ctrinfo_hal::HardwareError> {
//!     let hal = MockHal::new(MockProfile::New3dsXl);
//!     let facts = HardwareFacts::new(&hal);
//!
//!     let screens = facts.screen_types()?;
//!     println!("Top: {}, bottom: {}", screens.top.label(), screens.bottom.label());
//!     println!("Top brightness: {}", facts.brightness(Screen::Top)?);
//!     println!("Sound: {}", facts.sound_output_label());
//!     Ok(())
//! }
//! ```

pub mod config_block;
pub mod facts;
pub mod mock;
pub mod screen;
pub mod service;
pub mod storage;

pub use config_block::{
    AUTO_BRIGHTNESS_KEY, AutoBrightnessRecord, SOUND_OUTPUT_MODE_KEY, SoundOutputMode,
};
pub use facts::{
    Fact, HardwareFacts, HardwareReport, UNKNOWN_LABEL, auto_brightness_label, sound_output_label,
};
pub use screen::{Screen, ScreenPanelType, ScreenTypes, VendorByte};
pub use service::{
    AudioService, ConfigService, FilesystemService, GpuService, HardwareError, LcdService,
    ModelRevision, Platform, ResultCode, RevisionOracle, Service, Session,
};
pub use storage::CardType;

/// HAL Result type
pub type Result<T> = std::result::Result<T, HardwareError>;
