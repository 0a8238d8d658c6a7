//! Mock implementations for testing without real hardware
//!
//! This module provides a mock backend for every service used by
//! [`crate::HardwareFacts`], allowing development and testing on desktop
//! systems. The mock counts session opens, closes and requests per service,
//! records register addresses and can be told to fail any call.
//!
//! # Usage
//!
//! ```no_run
//! use ctrinfo_hal::HardwareFacts;
//! use ctrinfo_hal::mock::{MockHal, MockProfile};
//! use std::path::Path;
//!
//! // Create a mock New 3DS XL
//! let hal = MockHal::new(MockProfile::New3dsXl);
//! let facts = HardwareFacts::new(&hal);
//! println!("SD inserted: {}", facts.is_sd_inserted());
//!
//! // Or describe a console in TOML
//! let custom = MockHal::from_profile_file(Path::new("profiles/custom.toml"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::config_block::{AUTO_BRIGHTNESS_KEY, AutoBrightnessRecord, SOUND_OUTPUT_MODE_KEY};
use crate::screen::Screen;
use crate::service::{
    AudioService, ConfigService, FilesystemService, GpuService, LcdService, ModelRevision,
    Platform, ResultCode, RevisionOracle, Service,
};
use crate::storage::CardType;

pub const LCD_SERVICE: &str = "gsp::Lcd";
pub const GPU_SERVICE: &str = "gsp::Gpu";
pub const AUDIO_SERVICE: &str = "dsp::DSP";
pub const FS_SERVICE: &str = "fs:USER";
pub const CONFIG_SERVICE: &str = "cfg:u";

/// Environment variable naming the mock profile
pub const MOCK_DEVICE_ENV: &str = "CTRINFO_MOCK_DEVICE";

/// Returned for unknown register addresses and config keys
pub const MOCK_NOT_FOUND: ResultCode = ResultCode(0xD8A1_03F9);
/// Returned when a config block is read with the wrong size
pub const MOCK_INVALID_SIZE: ResultCode = ResultCode(0xD8E0_06FC);
/// Returned when the shared mock state is poisoned
pub const MOCK_POISONED: ResultCode = ResultCode(0xF960_6FFF);

#[derive(Debug, Error)]
pub enum MockError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mock profile: {0}")]
    InvalidProfile(#[from] toml::de::Error),
}

/// Pre-defined mock consoles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockProfile {
    /// Nintendo 3DS
    Old3ds,
    /// Nintendo 3DS XL
    Old3dsXl,
    /// Nintendo 2DS
    Old2ds,
    /// New Nintendo 3DS, IPS top and bottom
    New3ds,
    /// New Nintendo 3DS XL, IPS top and TN bottom
    New3dsXl,
    /// New Nintendo 2DS XL, TN top and bottom
    New2dsXl,
}

impl MockProfile {
    /// Get the hardware description for this mock
    pub fn to_hardware(self) -> MockHardware {
        match self {
            MockProfile::Old3ds => MockHardware {
                name: "Mock Nintendo 3DS".into(),
                revision: ModelRevision::Original,
                vendors: 0x00,
                ..MockHardware::default()
            },
            MockProfile::Old3dsXl => MockHardware {
                name: "Mock Nintendo 3DS XL".into(),
                revision: ModelRevision::Original,
                vendors: 0x00,
                sound_output_mode: 2,
                ..MockHardware::default()
            },
            MockProfile::Old2ds => MockHardware {
                name: "Mock Nintendo 2DS".into(),
                revision: ModelRevision::Original,
                vendors: 0x00,
                sound_output_mode: 0,
                ..MockHardware::default()
            },
            MockProfile::New3ds => MockHardware {
                name: "Mock New Nintendo 3DS".into(),
                vendors: 0x11,
                ..MockHardware::default()
            },
            MockProfile::New3dsXl => MockHardware {
                name: "Mock New Nintendo 3DS XL".into(),
                vendors: 0x1C,
                ..MockHardware::default()
            },
            MockProfile::New2dsXl => MockHardware {
                name: "Mock New Nintendo 2DS XL".into(),
                vendors: 0xCC,
                top_brightness: 0x6A,
                bottom_brightness: 0x6A,
                auto_brightness: true,
                ..MockHardware::default()
            },
        }
    }

    /// Get profile from string name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "old3ds" | "3ds" => Some(MockProfile::Old3ds),
            "old3dsxl" | "3dsxl" => Some(MockProfile::Old3dsXl),
            "old2ds" | "2ds" => Some(MockProfile::Old2ds),
            "new3ds" => Some(MockProfile::New3ds),
            "new3dsxl" => Some(MockProfile::New3dsXl),
            "new2dsxl" => Some(MockProfile::New2dsXl),
            _ => None,
        }
    }

    /// Profile for `name`, New 3DS XL when absent or unknown
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or(MockProfile::New3dsXl)
    }

    pub fn name(self) -> &'static str {
        match self {
            MockProfile::Old3ds => "old3ds",
            MockProfile::Old3dsXl => "old3dsxl",
            MockProfile::Old2ds => "old2ds",
            MockProfile::New3ds => "new3ds",
            MockProfile::New3dsXl => "new3dsxl",
            MockProfile::New2dsXl => "new2dsxl",
        }
    }

    /// List all available mock profiles
    pub fn all() -> &'static [MockProfile] {
        &[
            MockProfile::Old3ds,
            MockProfile::Old3dsXl,
            MockProfile::Old2ds,
            MockProfile::New3ds,
            MockProfile::New3dsXl,
            MockProfile::New2dsXl,
        ]
    }
}

/// Hardware facts a mock console reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockHardware {
    pub name: String,
    pub revision: ModelRevision,
    /// LCD vendor byte
    pub vendors: u8,
    /// Raw top backlight register
    pub top_brightness: u32,
    /// Raw bottom backlight register
    pub bottom_brightness: u32,
    pub headphones_inserted: bool,
    pub card_inserted: bool,
    pub card_type: CardType,
    pub sd_inserted: bool,
    /// Initial byte of the sound output config block
    pub sound_output_mode: u8,
    /// Initial flag of the backlight config block
    pub auto_brightness: bool,
}

impl Default for MockHardware {
    fn default() -> Self {
        Self {
            name: "Mock Console".into(),
            revision: ModelRevision::New,
            vendors: 0x1C,
            top_brightness: 0x8E,
            bottom_brightness: 0x8E,
            headphones_inserted: false,
            card_inserted: true,
            card_type: CardType::Ctr,
            sd_inserted: true,
            sound_output_mode: 1,
            auto_brightness: false,
        }
    }
}

/// Mockable failure points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockFault {
    LcdOpen,
    LcdVendors,
    GpuOpen,
    GpuReadRegs,
    AudioOpen,
    AudioHeadphone,
    FsOpen,
    FsCardSlot,
    FsCardType,
    FsSdmc,
    CfgOpen,
    CfgBlock,
}

/// Shared mock state for synchronized access
#[derive(Debug, Default)]
pub struct MockState {
    pub hardware: MockHardware,
    /// Config blocks by key
    pub config_blocks: HashMap<u32, Vec<u8>>,
    /// Injected failures
    pub faults: HashMap<MockFault, ResultCode>,
    pub opens: HashMap<&'static str, usize>,
    pub closes: HashMap<&'static str, usize>,
    pub requests: HashMap<&'static str, usize>,
    /// Register addresses read, in order
    pub register_reads: Vec<u32>,
}

impl MockState {
    pub fn new(hardware: MockHardware) -> Self {
        let mut config_blocks = HashMap::new();
        config_blocks.insert(SOUND_OUTPUT_MODE_KEY, vec![hardware.sound_output_mode]);

        // The rest of the backlight block belongs to other settings
        let backlight = AutoBrightnessRecord {
            unk1: 0x0000_0103,
            enabled: hardware.auto_brightness as u8,
            reserved: [0; 3],
        };
        config_blocks.insert(AUTO_BRIGHTNESS_KEY, backlight.to_bytes().to_vec());

        Self {
            hardware,
            config_blocks,
            ..Self::default()
        }
    }

    fn check(&self, fault: MockFault) -> Result<(), ResultCode> {
        match self.faults.get(&fault) {
            Some(code) => Err(*code),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
struct Shared(Arc<RwLock<MockState>>);

impl Shared {
    fn open(&self, service: &'static str, fault: MockFault) -> Result<(), ResultCode> {
        let mut state = self.0.write().map_err(|_| MOCK_POISONED)?;
        *state.opens.entry(service).or_default() += 1;
        state.check(fault).inspect_err(|code| {
            tracing::debug!("[MOCK] {} open failing with {}", service, code);
        })
    }

    fn close(&self, service: &'static str) {
        if let Ok(mut state) = self.0.write() {
            *state.closes.entry(service).or_default() += 1;
        }
    }

    fn request<T>(
        &self,
        service: &'static str,
        fault: MockFault,
        f: impl FnOnce(&mut MockState) -> Result<T, ResultCode>,
    ) -> Result<T, ResultCode> {
        let mut state = self.0.write().map_err(|_| MOCK_POISONED)?;
        *state.requests.entry(service).or_default() += 1;
        state.check(fault)?;
        f(&mut *state)
    }
}

/// Mock revision oracle
#[derive(Debug, Clone)]
pub struct MockRevision(Shared);

impl RevisionOracle for MockRevision {
    fn revision(&self) -> ModelRevision {
        self.0
            .0
            .read()
            .map(|s| s.hardware.revision)
            .unwrap_or_default()
    }
}

/// Mock LCD service
#[derive(Debug, Clone)]
pub struct MockLcd(Shared);

impl Service for MockLcd {
    const NAME: &'static str = LCD_SERVICE;

    fn open(&self) -> Result<(), ResultCode> {
        self.0.open(Self::NAME, MockFault::LcdOpen)
    }

    fn close(&self) {
        self.0.close(Self::NAME)
    }
}

impl LcdService for MockLcd {
    fn vendors(&self) -> Result<u8, ResultCode> {
        self.0
            .request(Self::NAME, MockFault::LcdVendors, |s| Ok(s.hardware.vendors))
    }
}

/// Mock GPU service with the two backlight registers mapped
#[derive(Debug, Clone)]
pub struct MockGpu(Shared);

impl Service for MockGpu {
    const NAME: &'static str = GPU_SERVICE;

    fn open(&self) -> Result<(), ResultCode> {
        self.0.open(Self::NAME, MockFault::GpuOpen)
    }

    fn close(&self) {
        self.0.close(Self::NAME)
    }
}

impl GpuService for MockGpu {
    fn read_hw_regs(&self, address: u32, buf: &mut [u8]) -> Result<(), ResultCode> {
        self.0.request(Self::NAME, MockFault::GpuReadRegs, |s| {
            s.register_reads.push(address);

            let value = if address == Screen::Top.brightness_register() {
                s.hardware.top_brightness
            } else if address == Screen::Bottom.brightness_register() {
                s.hardware.bottom_brightness
            } else {
                tracing::debug!("[MOCK] Unmapped register {:#x}", address);
                return Err(MOCK_NOT_FOUND);
            };

            let bytes = value.to_le_bytes();
            let len = buf.len().min(bytes.len());
            buf[..len].copy_from_slice(&bytes[..len]);
            Ok(())
        })
    }
}

/// Mock DSP service
#[derive(Debug, Clone)]
pub struct MockAudio(Shared);

impl Service for MockAudio {
    const NAME: &'static str = AUDIO_SERVICE;

    fn open(&self) -> Result<(), ResultCode> {
        self.0.open(Self::NAME, MockFault::AudioOpen)
    }

    fn close(&self) {
        self.0.close(Self::NAME)
    }
}

impl AudioService for MockAudio {
    fn headphone_status(&self) -> Result<bool, ResultCode> {
        self.0.request(Self::NAME, MockFault::AudioHeadphone, |s| {
            Ok(s.hardware.headphones_inserted)
        })
    }
}

/// Mock filesystem service
#[derive(Debug, Clone)]
pub struct MockFilesystem(Shared);

impl Service for MockFilesystem {
    const NAME: &'static str = FS_SERVICE;

    fn open(&self) -> Result<(), ResultCode> {
        self.0.open(Self::NAME, MockFault::FsOpen)
    }

    fn close(&self) {
        self.0.close(Self::NAME)
    }
}

impl FilesystemService for MockFilesystem {
    fn card_slot_inserted(&self) -> Result<bool, ResultCode> {
        self.0
            .request(Self::NAME, MockFault::FsCardSlot, |s| Ok(s.hardware.card_inserted))
    }

    fn card_type(&self) -> Result<CardType, ResultCode> {
        self.0
            .request(Self::NAME, MockFault::FsCardType, |s| Ok(s.hardware.card_type))
    }

    fn sd_detected(&self) -> Result<bool, ResultCode> {
        self.0
            .request(Self::NAME, MockFault::FsSdmc, |s| Ok(s.hardware.sd_inserted))
    }
}

/// Mock config service backed by [`MockState::config_blocks`]
#[derive(Debug, Clone)]
pub struct MockConfig(Shared);

impl Service for MockConfig {
    const NAME: &'static str = CONFIG_SERVICE;

    fn open(&self) -> Result<(), ResultCode> {
        self.0.open(Self::NAME, MockFault::CfgOpen)
    }

    fn close(&self) {
        self.0.close(Self::NAME)
    }
}

impl ConfigService for MockConfig {
    fn config_block(&self, key: u32, buf: &mut [u8]) -> Result<(), ResultCode> {
        self.0.request(Self::NAME, MockFault::CfgBlock, |s| {
            let block = s.config_blocks.get(&key).ok_or(MOCK_NOT_FOUND)?;
            if block.len() != buf.len() {
                tracing::debug!(
                    "[MOCK] Config block {:#010x} is {} bytes, {} requested",
                    key,
                    block.len(),
                    buf.len()
                );
                return Err(MOCK_INVALID_SIZE);
            }
            buf.copy_from_slice(block);
            Ok(())
        })
    }
}

/// Complete mock console for testing
pub struct MockHal {
    state: Arc<RwLock<MockState>>,
    revision: MockRevision,
    lcd: MockLcd,
    gpu: MockGpu,
    audio: MockAudio,
    filesystem: MockFilesystem,
    config: MockConfig,
}

impl MockHal {
    /// Create a mock console with the given profile
    pub fn new(profile: MockProfile) -> Self {
        Self::from_hardware(profile.to_hardware())
    }

    pub fn from_hardware(hardware: MockHardware) -> Self {
        tracing::debug!("[MOCK] Creating {}", hardware.name);
        let state = Arc::new(RwLock::new(MockState::new(hardware)));
        let shared = Shared(Arc::clone(&state));

        Self {
            revision: MockRevision(shared.clone()),
            lcd: MockLcd(shared.clone()),
            gpu: MockGpu(shared.clone()),
            audio: MockAudio(shared.clone()),
            filesystem: MockFilesystem(shared.clone()),
            config: MockConfig(shared),
            state,
        }
    }

    /// Create from a TOML hardware description
    pub fn from_profile_file(path: &Path) -> Result<Self, MockError> {
        let contents = std::fs::read_to_string(path)?;
        let hardware: MockHardware = toml::from_str(&contents)?;
        Ok(Self::from_hardware(hardware))
    }

    /// Create from environment variable or default to New 3DS XL
    pub fn from_env() -> Self {
        let device = std::env::var(MOCK_DEVICE_ENV).ok();
        Self::new(MockProfile::from_name_or_default(device.as_deref()))
    }

    pub fn hardware(&self) -> MockHardware {
        self.state
            .read()
            .map(|s| s.hardware.clone())
            .unwrap_or_default()
    }

    /// Change the reported hardware. Config blocks are left untouched.
    pub fn update(&self, f: impl FnOnce(&mut MockHardware)) {
        if let Ok(mut state) = self.state.write() {
            f(&mut state.hardware);
        }
    }

    pub fn set_vendors(&self, vendors: u8) {
        self.update(|hw| hw.vendors = vendors);
    }

    pub fn set_brightness(&self, screen: Screen, value: u32) {
        self.update(|hw| match screen {
            Screen::Top => hw.top_brightness = value,
            Screen::Bottom => hw.bottom_brightness = value,
        });
    }

    /// Make a call fail with `code` until cleared. Success codes are ignored.
    pub fn inject_fault(&self, fault: MockFault, code: ResultCode) {
        if !code.is_failure() {
            tracing::debug!("[MOCK] Ignoring {:?} fault with success code {}", fault, code);
            return;
        }
        if let Ok(mut state) = self.state.write() {
            state.faults.insert(fault, code);
        }
        tracing::debug!("[MOCK] {:?} will fail with {}", fault, code);
    }

    pub fn clear_faults(&self) {
        if let Ok(mut state) = self.state.write() {
            state.faults.clear();
        }
    }

    pub fn write_config_block(&self, key: u32, data: &[u8]) {
        if let Ok(mut state) = self.state.write() {
            state.config_blocks.insert(key, data.to_vec());
        }
    }

    pub fn config_block(&self, key: u32) -> Option<Vec<u8>> {
        self.state
            .read()
            .ok()
            .and_then(|s| s.config_blocks.get(&key).cloned())
    }

    /// Sessions opened on `service`, including failed attempts
    pub fn opens(&self, service: &str) -> usize {
        self.count(service, |s| &s.opens)
    }

    pub fn closes(&self, service: &str) -> usize {
        self.count(service, |s| &s.closes)
    }

    pub fn requests(&self, service: &str) -> usize {
        self.count(service, |s| &s.requests)
    }

    /// Session opens across all services
    pub fn total_opens(&self) -> usize {
        self.state
            .read()
            .map(|s| s.opens.values().sum())
            .unwrap_or(0)
    }

    pub fn register_reads(&self) -> Vec<u32> {
        self.state
            .read()
            .map(|s| s.register_reads.clone())
            .unwrap_or_default()
    }

    fn count(
        &self,
        service: &str,
        counters: impl Fn(&MockState) -> &HashMap<&'static str, usize>,
    ) -> usize {
        self.state
            .read()
            .map(|s| counters(&*s).get(service).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl Platform for MockHal {
    type Revision = MockRevision;
    type Lcd = MockLcd;
    type Gpu = MockGpu;
    type Audio = MockAudio;
    type Filesystem = MockFilesystem;
    type Config = MockConfig;

    fn revision(&self) -> &MockRevision {
        &self.revision
    }

    fn lcd(&self) -> &MockLcd {
        &self.lcd
    }

    fn gpu(&self) -> &MockGpu {
        &self.gpu
    }

    fn audio(&self) -> &MockAudio {
        &self.audio
    }

    fn filesystem(&self) -> &MockFilesystem {
        &self.filesystem
    }

    fn config(&self) -> &MockConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mock_profiles() {
        for profile in MockProfile::all() {
            let hardware = profile.to_hardware();
            assert!(hardware.name.starts_with("Mock"));
            assert_eq!(MockProfile::from_name(profile.name()), Some(*profile));
        }
    }

    #[test]
    fn test_profile_revisions() {
        assert_eq!(
            MockProfile::Old2ds.to_hardware().revision,
            ModelRevision::Original
        );
        assert_eq!(
            MockProfile::New2dsXl.to_hardware().revision,
            ModelRevision::New
        );
    }

    #[test]
    fn test_profile_from_name() {
        assert_eq!(MockProfile::from_name("new3dsxl"), Some(MockProfile::New3dsXl));
        assert_eq!(MockProfile::from_name("New-3DS-XL"), Some(MockProfile::New3dsXl));
        assert_eq!(MockProfile::from_name("2ds"), Some(MockProfile::Old2ds));
        assert_eq!(MockProfile::from_name("switch"), None);
    }

    #[test]
    fn test_profile_fallback() {
        assert_eq!(
            MockProfile::from_name_or_default(Some("old3dsxl")),
            MockProfile::Old3dsXl
        );
        assert_eq!(
            MockProfile::from_name_or_default(Some("switch")),
            MockProfile::New3dsXl
        );
        assert_eq!(MockProfile::from_name_or_default(None), MockProfile::New3dsXl);
    }

    #[test]
    fn test_from_env() {
        // Only test touching this variable
        unsafe { std::env::set_var(MOCK_DEVICE_ENV, "old2ds") };
        let hal = MockHal::from_env();
        assert_eq!(hal.hardware(), MockProfile::Old2ds.to_hardware());

        unsafe { std::env::set_var(MOCK_DEVICE_ENV, "gameboy") };
        let hal = MockHal::from_env();
        assert_eq!(hal.hardware(), MockProfile::New3dsXl.to_hardware());

        unsafe { std::env::remove_var(MOCK_DEVICE_ENV) };
        let hal = MockHal::from_env();
        assert_eq!(hal.hardware().vendors, 0x1C);
    }

    #[test]
    fn test_session_counters() {
        let hal = MockHal::new(MockProfile::New3ds);
        let lcd = hal.lcd();

        lcd.open().unwrap();
        assert_eq!(lcd.vendors(), Ok(0x11));
        lcd.close();

        assert_eq!(hal.opens(LCD_SERVICE), 1);
        assert_eq!(hal.requests(LCD_SERVICE), 1);
        assert_eq!(hal.closes(LCD_SERVICE), 1);
        assert_eq!(hal.opens(GPU_SERVICE), 0);
        assert_eq!(hal.total_opens(), 1);
    }

    #[test]
    fn test_fault_injection() {
        let hal = MockHal::new(MockProfile::New3ds);
        hal.inject_fault(MockFault::FsSdmc, ResultCode(0xC880_3F9F));

        assert_eq!(hal.filesystem().sd_detected(), Err(ResultCode(0xC880_3F9F)));
        assert_eq!(hal.filesystem().card_slot_inserted(), Ok(true));

        hal.clear_faults();
        assert_eq!(hal.filesystem().sd_detected(), Ok(true));
    }

    #[test]
    fn test_success_codes_are_not_faults() {
        let hal = MockHal::new(MockProfile::New3ds);
        hal.inject_fault(MockFault::LcdVendors, ResultCode::SUCCESS);
        hal.inject_fault(MockFault::FsCardSlot, ResultCode(0x0000_0001));

        assert_eq!(hal.lcd().vendors(), Ok(0x11));
        assert_eq!(hal.filesystem().card_slot_inserted(), Ok(true));
    }

    #[test]
    fn test_register_reads() {
        let hal = MockHal::new(MockProfile::New2dsXl);
        let mut buf = [0u8; 4];

        hal.gpu()
            .read_hw_regs(Screen::Bottom.brightness_register(), &mut buf)
            .unwrap();
        assert_eq!(u32::from_le_bytes(buf), 0x6A);

        assert_eq!(hal.gpu().read_hw_regs(0x1040_0000, &mut buf), Err(MOCK_NOT_FOUND));
        assert_eq!(
            hal.register_reads(),
            vec![Screen::Bottom.brightness_register(), 0x1040_0000]
        );
    }

    #[test]
    fn test_config_blocks() {
        let hal = MockHal::new(MockProfile::New2dsXl);

        let mut data = [0u8; AutoBrightnessRecord::SIZE];
        hal.config().config_block(AUTO_BRIGHTNESS_KEY, &mut data).unwrap();
        assert!(AutoBrightnessRecord::from_bytes(&data).is_enabled());
        assert_eq!(AutoBrightnessRecord::from_bytes(&data).unk1, 0x0000_0103);

        let mut wrong_size = [0u8; 4];
        assert_eq!(
            hal.config().config_block(AUTO_BRIGHTNESS_KEY, &mut wrong_size),
            Err(MOCK_INVALID_SIZE)
        );
        assert_eq!(
            hal.config().config_block(0x000A_0000, &mut wrong_size),
            Err(MOCK_NOT_FOUND)
        );
    }

    #[test]
    fn test_config_block_round_trip() {
        let hal = MockHal::new(MockProfile::New3ds);
        let record = AutoBrightnessRecord {
            unk1: 0xDEAD_BEEF,
            enabled: 1,
            reserved: [1, 2, 3],
        };
        hal.write_config_block(AUTO_BRIGHTNESS_KEY, &record.to_bytes());

        let mut data = [0u8; AutoBrightnessRecord::SIZE];
        hal.config().config_block(AUTO_BRIGHTNESS_KEY, &mut data).unwrap();
        assert_eq!(AutoBrightnessRecord::from_bytes(&data), record);
        assert_eq!(
            hal.config_block(AUTO_BRIGHTNESS_KEY),
            Some(record.to_bytes().to_vec())
        );
    }

    #[test]
    fn test_update_keeps_config_blocks() {
        let hal = MockHal::new(MockProfile::New3ds);
        hal.update(|hw| hw.sound_output_mode = 0);

        assert_eq!(hal.hardware().sound_output_mode, 0);
        assert_eq!(hal.config_block(SOUND_OUTPUT_MODE_KEY), Some(vec![1]));
    }

    #[test]
    fn test_from_profile_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "Custom New 3DS"
revision = "new"
vendors = 0xC1
top_brightness = 40
card_type = "twl"
sound_output_mode = 0
"#
        )
        .unwrap();

        let hal = MockHal::from_profile_file(file.path()).unwrap();
        let hardware = hal.hardware();
        assert_eq!(hardware.name, "Custom New 3DS");
        assert_eq!(hardware.vendors, 0xC1);
        assert_eq!(hardware.top_brightness, 40);
        assert_eq!(hardware.bottom_brightness, 0x8E);
        assert_eq!(hardware.card_type, CardType::Twl);
        assert_eq!(hal.config_block(SOUND_OUTPUT_MODE_KEY), Some(vec![0]));
    }

    #[test]
    fn test_from_profile_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "revision = \"newest\"").unwrap();

        let err = MockHal::from_profile_file(file.path()).err().unwrap();
        assert!(matches!(err, MockError::InvalidProfile(_)));
    }
}
