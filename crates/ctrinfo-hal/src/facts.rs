//! Hardware facts
//!
//! [`HardwareFacts`] answers the questions a system-information screen asks
//! about the console. Every query opens the services it needs for the length
//! of that query only; nothing is cached between calls.
//!
//! Two queries propagate failures: [`HardwareFacts::screen_types`] and
//! [`HardwareFacts::brightness`]. The remaining ones are cosmetic and return
//! a [`Fact`], which callers usually collapse into a fallback value.

use serde::{Serialize, Serializer};
use tracing::{debug, error, warn};

use crate::config_block::{
    AUTO_BRIGHTNESS_KEY, AutoBrightnessRecord, SOUND_OUTPUT_MODE_KEY, SoundOutputMode,
};
use crate::screen::{Screen, ScreenTypes, VendorByte};
use crate::service::{
    AudioService, ConfigService, FilesystemService, GpuService, HardwareError, LcdService,
    ModelRevision, Platform, ResultCode, RevisionOracle, Service, Session,
};
use crate::storage::CardType;

/// Label shown when a status could not be read
pub const UNKNOWN_LABEL: &str = "unknown";

/// Outcome of a query whose failure is not fatal to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact<T> {
    /// The service answered
    Reported(T),
    /// The service could not be queried
    Unavailable(HardwareError),
}

impl<T> Fact<T> {
    pub fn is_reported(&self) -> bool {
        matches!(self, Fact::Reported(_))
    }

    pub fn reported(&self) -> Option<&T> {
        match self {
            Fact::Reported(value) => Some(value),
            Fact::Unavailable(_) => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Fact::Reported(value) => Some(value),
            Fact::Unavailable(_) => None,
        }
    }

    pub fn error(&self) -> Option<&HardwareError> {
        match self {
            Fact::Reported(_) => None,
            Fact::Unavailable(err) => Some(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fact<U> {
        match self {
            Fact::Reported(value) => Fact::Reported(f(value)),
            Fact::Unavailable(err) => Fact::Unavailable(err),
        }
    }
}

impl<T: Default> Fact<T> {
    /// Reported value, or the type's default when unavailable
    pub fn or_fallback(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T> From<Result<T, HardwareError>> for Fact<T> {
    fn from(result: Result<T, HardwareError>) -> Self {
        match result {
            Ok(value) => Fact::Reported(value),
            Err(err) => Fact::Unavailable(err),
        }
    }
}

/// Unavailable facts serialize as `null`
impl<T: Serialize> Serialize for Fact<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fact::Reported(value) => serializer.serialize_some(value),
            Fact::Unavailable(_) => serializer.serialize_none(),
        }
    }
}

/// "Mono" / "Stereo" / "Surround", or "unknown"
pub fn sound_output_label(mode: &Fact<SoundOutputMode>) -> &'static str {
    mode.reported().map_or(UNKNOWN_LABEL, |mode| mode.label())
}

/// "enabled" / "disabled", or "unknown"
pub fn auto_brightness_label(enabled: &Fact<bool>) -> &'static str {
    match enabled {
        Fact::Reported(true) => "enabled",
        Fact::Reported(false) => "disabled",
        Fact::Unavailable(_) => UNKNOWN_LABEL,
    }
}

/// Every fact gathered in one pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwareReport {
    pub revision: ModelRevision,
    pub screens: Fact<ScreenTypes>,
    pub top_brightness: Fact<u32>,
    pub bottom_brightness: Fact<u32>,
    pub audio_jack_inserted: Fact<bool>,
    pub card_inserted: Fact<bool>,
    pub card_type: Fact<CardType>,
    pub sd_inserted: Fact<bool>,
    pub sound_output: Fact<SoundOutputMode>,
    pub auto_brightness: Fact<bool>,
}

impl HardwareReport {
    pub fn brightness(&self, screen: Screen) -> &Fact<u32> {
        match screen {
            Screen::Top => &self.top_brightness,
            Screen::Bottom => &self.bottom_brightness,
        }
    }
}

/// Read-only hardware facts on top of a [`Platform`]
pub struct HardwareFacts<P> {
    platform: P,
}

impl<P: Platform> HardwareFacts<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Panel technology of the top and bottom screens
    ///
    /// Original-revision consoles are reported as TN/TN without touching
    /// the LCD service.
    pub fn screen_types(&self) -> Result<ScreenTypes, HardwareError> {
        if !self.platform.revision().revision().is_new() {
            debug!("Original revision, reporting TN panels");
            return Ok(ScreenTypes::ORIGINAL_REVISION);
        }

        let vendors = query(self.platform.lcd(), "GetVendors", |lcd| lcd.vendors())
            .inspect_err(|e| log_failure("screen_types", e))?;

        let types = ScreenTypes::from(VendorByte(vendors));
        debug!(
            "LCD vendors {:#04x}: top {}, bottom {}",
            vendors,
            types.top.label(),
            types.bottom.label()
        );
        Ok(types)
    }

    /// Raw backlight register value of a screen
    pub fn brightness(&self, screen: Screen) -> Result<u32, HardwareError> {
        let address = screen.brightness_register();
        let mut raw = [0u8; 4];

        query(self.platform.gpu(), "ReadHWRegs", |gpu| {
            gpu.read_hw_regs(address, &mut raw)
        })
        .inspect_err(|e| log_failure("brightness", e))?;

        let value = u32::from_le_bytes(raw);
        debug!("{} screen brightness register {:#x} = {}", screen.name(), address, value);
        Ok(value)
    }

    pub fn audio_jack_status(&self) -> Fact<bool> {
        fact(
            "audio_jack_status",
            query(self.platform.audio(), "GetHeadphoneStatus", |dsp| {
                dsp.headphone_status()
            }),
        )
    }

    /// Whether headphones are plugged in, `false` if unknown
    pub fn is_audio_jack_inserted(&self) -> bool {
        self.audio_jack_status().or_fallback()
    }

    pub fn card_slot_status(&self) -> Fact<bool> {
        fact(
            "card_slot_status",
            query(self.platform.filesystem(), "CardSlotIsInserted", |fs| {
                fs.card_slot_inserted()
            }),
        )
    }

    /// Whether a game card is inserted, `false` if unknown
    pub fn is_card_inserted(&self) -> bool {
        self.card_slot_status().or_fallback()
    }

    pub fn card_type(&self) -> Fact<CardType> {
        fact(
            "card_type",
            query(self.platform.filesystem(), "GetCardType", |fs| fs.card_type()),
        )
    }

    /// Inserted card type, [`CardType::Ctr`] if unknown
    pub fn card_type_or_default(&self) -> CardType {
        self.card_type().or_fallback()
    }

    pub fn sd_status(&self) -> Fact<bool> {
        fact(
            "sd_status",
            query(self.platform.filesystem(), "IsSdmcDetected", |fs| {
                fs.sd_detected()
            }),
        )
    }

    /// Whether an SD card is detected, `false` if unknown
    pub fn is_sd_inserted(&self) -> bool {
        self.sd_status().or_fallback()
    }

    pub fn sound_output_mode(&self) -> Fact<SoundOutputMode> {
        let mut data = [0u8; 1];
        let result = read_config_block(self.platform.config(), SOUND_OUTPUT_MODE_KEY, &mut data)
            .and_then(|()| {
                SoundOutputMode::from_index(data[0]).ok_or(HardwareError::UnexpectedValue {
                    service: <P::Config as Service>::NAME,
                    request: CONFIG_BLOCK_REQUEST,
                    value: u32::from(data[0]),
                })
            });

        if let Err(e) = &result {
            log_failure("sound_output_mode", e);
        }
        result.into()
    }

    pub fn sound_output_label(&self) -> &'static str {
        sound_output_label(&self.sound_output_mode())
    }

    /// Auto-brightness flag from the backlight config block
    pub fn auto_brightness(&self) -> Fact<bool> {
        let mut data = [0u8; AutoBrightnessRecord::SIZE];
        fact(
            "auto_brightness",
            read_config_block(self.platform.config(), AUTO_BRIGHTNESS_KEY, &mut data)
                .map(|()| AutoBrightnessRecord::from_bytes(&data).is_enabled()),
        )
    }

    pub fn auto_brightness_label(&self) -> &'static str {
        auto_brightness_label(&self.auto_brightness())
    }

    /// Query every fact once
    pub fn snapshot(&self) -> HardwareReport {
        HardwareReport {
            revision: self.platform.revision().revision(),
            screens: self.screen_types().into(),
            top_brightness: self.brightness(Screen::Top).into(),
            bottom_brightness: self.brightness(Screen::Bottom).into(),
            audio_jack_inserted: self.audio_jack_status(),
            card_inserted: self.card_slot_status(),
            card_type: self.card_type(),
            sd_inserted: self.sd_status(),
            sound_output: self.sound_output_mode(),
            auto_brightness: self.auto_brightness(),
        }
    }
}

const CONFIG_BLOCK_REQUEST: &str = "GetConfigInfoBlk";

/// Open `service`, issue one request, close it again
fn query<S, T>(
    service: &S,
    request: &'static str,
    f: impl FnOnce(&S) -> Result<T, ResultCode>,
) -> Result<T, HardwareError>
where
    S: Service,
{
    let session = Session::open(service)?;
    f(&*session).map_err(|code| session.request_error(request, code))
}

fn read_config_block<C: ConfigService>(
    cfg: &C,
    key: u32,
    buf: &mut [u8],
) -> Result<(), HardwareError> {
    query(cfg, CONFIG_BLOCK_REQUEST, |cfg| cfg.config_block(key, buf))
}

/// Swallow a failure into an unavailable fact
fn fact<T>(operation: &str, result: Result<T, HardwareError>) -> Fact<T> {
    if let Err(e) = &result {
        warn!("{} unavailable: {}", operation, e);
    }
    result.into()
}

fn log_failure(operation: &str, err: &HardwareError) {
    match err.code() {
        Some(code) => error!(
            "{}({}::{}) failed: {}",
            operation,
            err.service(),
            err.call(),
            code
        ),
        None => error!("{} failed: {}", operation, err),
    }
}
