//! Raw cell readings as the platform hands them over.
//!
//! Integer fields hold whatever the platform returned, including the
//! [`UNAVAILABLE`](crate::sentinel::UNAVAILABLE) sentinel. Whether a field can
//! be read at all is described separately by [`Capabilities`].

use crate::error::PlatformError;

/// API level that added ARFCN/UARFCN/EARFCN accessors.
pub const CHANNEL_NUMBER_API_LEVEL: u32 = 24;
/// API level that added the reported bands list.
pub const BANDS_API_LEVEL: u32 = 30;

/// Which optional accessors the running platform provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub channel_number: bool,
    pub bands: bool,
}

impl Capabilities {
    pub const ALL: Self = Self {
        channel_number: true,
        bands: true,
    };

    pub fn for_api_level(level: u32) -> Self {
        Self {
            channel_number: level >= CHANNEL_NUMBER_API_LEVEL,
            bands: level >= BANDS_API_LEVEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCellReading {
    /// Whether the device is registered on this cell, i.e. it is the serving cell.
    pub registered: bool,
    pub cell: RawCell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCell {
    Gsm(RawGsmCell),
    Umts(RawUmtsCell),
    Lte(RawLteCell),
    Nr(RawNrCell),
    Unknown { kind: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGsmCell {
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    pub lac: i32,
    pub cid: i32,
    pub arfcn: i32,
    pub dbm: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUmtsCell {
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    pub lac: i32,
    pub cid: i32,
    pub uarfcn: i32,
    pub dbm: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLteCell {
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    pub tac: i32,
    pub ci: i32,
    pub earfcn: i32,
    pub bands: Vec<i32>,
    pub rsrp: i32,
    pub rsrq: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNrCell {
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    pub tac: i32,
    pub nci: i64,
    pub nrarfcn: i32,
    pub bands: Vec<i32>,
    pub ss_rsrp: i32,
    pub ss_rsrq: i32,
}

/// Access to the platform's telephony state.
pub trait CellInfoSource {
    /// Cell information is only handed out with location permission.
    fn has_location_permission(&self) -> bool;

    fn capabilities(&self) -> Capabilities;

    /// All cells the modem currently sees. `None` means the platform had
    /// nothing to report.
    fn all_cell_info(&self) -> Result<Option<Vec<RawCellReading>>, PlatformError>;
}
