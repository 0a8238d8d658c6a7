//! System service interfaces
//!
//! Each hardware fact is answered by one platform service. Services are
//! opened for a single query through a [`Session`] guard, which closes the
//! service again when it goes out of scope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

use crate::storage::CardType;

/// Result word returned by platform services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCode(pub u32);

impl ResultCode {
    pub const SUCCESS: ResultCode = ResultCode(0);

    /// A result is a failure when its signed value is negative
    pub fn is_failure(self) -> bool {
        (self.0 as i32) < 0
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareError {
    #[error("Failed to open {service} session: {code}")]
    SessionOpen {
        service: &'static str,
        code: ResultCode,
    },

    #[error("{service} request {request} failed: {code}")]
    Request {
        service: &'static str,
        request: &'static str,
        code: ResultCode,
    },

    #[error("{service} request {request} returned unexpected value {value}")]
    UnexpectedValue {
        service: &'static str,
        request: &'static str,
        value: u32,
    },
}

impl HardwareError {
    /// Service that produced the failure
    pub fn service(&self) -> &'static str {
        match self {
            HardwareError::SessionOpen { service, .. }
            | HardwareError::Request { service, .. }
            | HardwareError::UnexpectedValue { service, .. } => service,
        }
    }

    /// Name of the failing call, `open` for session failures
    pub fn call(&self) -> &'static str {
        match self {
            HardwareError::SessionOpen { .. } => "open",
            HardwareError::Request { request, .. }
            | HardwareError::UnexpectedValue { request, .. } => request,
        }
    }

    /// Result code reported by the service, if any
    pub fn code(&self) -> Option<ResultCode> {
        match self {
            HardwareError::SessionOpen { code, .. } | HardwareError::Request { code, .. } => {
                Some(*code)
            }
            HardwareError::UnexpectedValue { .. } => None,
        }
    }
}

/// Console hardware revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelRevision {
    /// Original 3DS, 3DS XL and 2DS
    Original,
    /// New 3DS, New 3DS XL and New 2DS XL
    #[default]
    New,
}

impl ModelRevision {
    pub fn is_new(self) -> bool {
        self == ModelRevision::New
    }

    pub fn name(self) -> &'static str {
        match self {
            ModelRevision::Original => "Original",
            ModelRevision::New => "New",
        }
    }
}

/// Answers which hardware revision the console is
pub trait RevisionOracle {
    fn revision(&self) -> ModelRevision;
}

/// A platform service that must be opened before use
pub trait Service {
    /// Service name used in logs and errors
    const NAME: &'static str;

    fn open(&self) -> Result<(), ResultCode>;

    fn close(&self);
}

/// Display-config service (`gsp::Lcd`)
pub trait LcdService: Service {
    /// Vendor byte: top screen in the high nibble, bottom in the low nibble
    fn vendors(&self) -> Result<u8, ResultCode>;
}

/// GPU service (`gsp::Gpu`), used for hardware register reads
pub trait GpuService: Service {
    fn read_hw_regs(&self, address: u32, buf: &mut [u8]) -> Result<(), ResultCode>;
}

/// DSP audio service
pub trait AudioService: Service {
    fn headphone_status(&self) -> Result<bool, ResultCode>;
}

/// Filesystem user service
pub trait FilesystemService: Service {
    fn card_slot_inserted(&self) -> Result<bool, ResultCode>;

    fn card_type(&self) -> Result<CardType, ResultCode>;

    fn sd_detected(&self) -> Result<bool, ResultCode>;
}

/// System configuration service
pub trait ConfigService: Service {
    /// Read the config block stored under `key` into `buf`, byte-exact
    fn config_block(&self, key: u32, buf: &mut [u8]) -> Result<(), ResultCode>;
}

/// Everything [`crate::HardwareFacts`] needs from a console backend
pub trait Platform {
    type Revision: RevisionOracle;
    type Lcd: LcdService;
    type Gpu: GpuService;
    type Audio: AudioService;
    type Filesystem: FilesystemService;
    type Config: ConfigService;

    fn revision(&self) -> &Self::Revision;
    fn lcd(&self) -> &Self::Lcd;
    fn gpu(&self) -> &Self::Gpu;
    fn audio(&self) -> &Self::Audio;
    fn filesystem(&self) -> &Self::Filesystem;
    fn config(&self) -> &Self::Config;
}

impl<P: Platform + ?Sized> Platform for &P {
    type Revision = P::Revision;
    type Lcd = P::Lcd;
    type Gpu = P::Gpu;
    type Audio = P::Audio;
    type Filesystem = P::Filesystem;
    type Config = P::Config;

    fn revision(&self) -> &Self::Revision {
        (**self).revision()
    }

    fn lcd(&self) -> &Self::Lcd {
        (**self).lcd()
    }

    fn gpu(&self) -> &Self::Gpu {
        (**self).gpu()
    }

    fn audio(&self) -> &Self::Audio {
        (**self).audio()
    }

    fn filesystem(&self) -> &Self::Filesystem {
        (**self).filesystem()
    }

    fn config(&self) -> &Self::Config {
        (**self).config()
    }
}

/// Open service session, closed on drop
pub struct Session<'a, S: Service> {
    service: &'a S,
}

impl<'a, S: Service> Session<'a, S> {
    pub fn open(service: &'a S) -> Result<Self, HardwareError> {
        service.open().map_err(|code| HardwareError::SessionOpen {
            service: S::NAME,
            code,
        })?;
        tracing::trace!("{} session opened", S::NAME);
        Ok(Self { service })
    }

    /// Wrap a failed request on this service
    pub fn request_error(&self, request: &'static str, code: ResultCode) -> HardwareError {
        HardwareError::Request {
            service: S::NAME,
            request,
            code,
        }
    }
}

impl<S: Service> Deref for Session<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.service
    }
}

impl<S: Service> Drop for Session<'_, S> {
    fn drop(&mut self) {
        self.service.close();
        tracing::trace!("{} session closed", S::NAME);
    }
}
