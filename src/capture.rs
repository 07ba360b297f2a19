//! Offline tick captures.
//!
//! One JSON object per line, each holding everything the collaborators
//! gathered for one sampling tick. This lets the pipeline run without a
//! device attached.

use std::{io::BufRead, str::FromStr};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    error::PlatformError,
    model::{LocationData, PerformanceMetrics, Technology},
    parser,
    platform::{
        Capabilities, CellInfoSource, RawCell, RawCellReading, RawGsmCell, RawLteCell, RawNrCell,
        RawUmtsCell,
    },
    sentinel::{UNAVAILABLE, UNAVAILABLE_LONG},
    signal::{assemble, MeasurementBatch, Signal},
};

#[derive(Debug, Deserialize)]
pub struct Tick {
    pub timestamp: DateTime<Utc>,
    #[serde(default = "granted")]
    pub permission_granted: bool,
    #[serde(default)]
    pub api_level: Option<u32>,
    #[serde(default)]
    pub cells: Option<Vec<CapturedCell>>,
    #[serde(default)]
    pub platform_error: Option<CapturedError>,
    #[serde(default)]
    pub location: Option<LocationData>,
    #[serde(default)]
    pub metrics: PerformanceMetrics,
}

fn granted() -> bool {
    true
}

fn unavailable() -> i32 {
    UNAVAILABLE
}

fn unavailable_long() -> i64 {
    UNAVAILABLE_LONG
}

/// A cell as recorded in a capture. Fields the technology doesn't have are
/// ignored; fields that weren't recorded hold the platform sentinel.
#[derive(Debug, Clone, Deserialize)]
pub struct CapturedCell {
    pub technology: String,
    #[serde(default)]
    pub registered: bool,
    #[serde(default)]
    pub mcc: Option<String>,
    #[serde(default)]
    pub mnc: Option<String>,
    #[serde(default = "unavailable")]
    pub lac: i32,
    #[serde(default = "unavailable")]
    pub tac: i32,
    #[serde(default = "unavailable", alias = "ci")]
    pub cid: i32,
    #[serde(default = "unavailable_long")]
    pub nci: i64,
    #[serde(default = "unavailable", alias = "uarfcn", alias = "earfcn", alias = "nrarfcn")]
    pub arfcn: i32,
    #[serde(default)]
    pub bands: Vec<i32>,
    #[serde(default = "unavailable")]
    pub dbm: i32,
    #[serde(default = "unavailable", alias = "ss_rsrp")]
    pub rsrp: i32,
    #[serde(default = "unavailable", alias = "ss_rsrq")]
    pub rsrq: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum CapturedError {
    Security(String),
    Other(String),
}

impl From<CapturedCell> for RawCellReading {
    fn from(x: CapturedCell) -> Self {
        let cell = match Technology::from_str(&x.technology) {
            Ok(Technology::Gsm) => RawCell::Gsm(RawGsmCell {
                mcc: x.mcc,
                mnc: x.mnc,
                lac: x.lac,
                cid: x.cid,
                arfcn: x.arfcn,
                dbm: x.dbm,
            }),
            Ok(Technology::Umts) => RawCell::Umts(RawUmtsCell {
                mcc: x.mcc,
                mnc: x.mnc,
                lac: x.lac,
                cid: x.cid,
                uarfcn: x.arfcn,
                dbm: x.dbm,
            }),
            Ok(Technology::Lte) => RawCell::Lte(RawLteCell {
                mcc: x.mcc,
                mnc: x.mnc,
                tac: x.tac,
                ci: x.cid,
                earfcn: x.arfcn,
                bands: x.bands,
                rsrp: x.rsrp,
                rsrq: x.rsrq,
            }),
            Ok(Technology::Nr) => RawCell::Nr(RawNrCell {
                mcc: x.mcc,
                mnc: x.mnc,
                tac: x.tac,
                nci: x.nci,
                nrarfcn: x.arfcn,
                bands: x.bands,
                ss_rsrp: x.rsrp,
                ss_rsrq: x.rsrq,
            }),
            Ok(Technology::Unknown) | Err(_) => RawCell::Unknown { kind: x.technology },
        };

        Self {
            registered: x.registered,
            cell,
        }
    }
}

/// A captured tick seen through the platform interface.
pub struct TickSource<'a> {
    tick: &'a Tick,
    capabilities: Capabilities,
}

impl CellInfoSource for TickSource<'_> {
    fn has_location_permission(&self) -> bool {
        self.tick.permission_granted
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn all_cell_info(&self) -> Result<Option<Vec<RawCellReading>>, PlatformError> {
        match &self.tick.platform_error {
            Some(CapturedError::Security(x)) => Err(PlatformError::Security(x.clone())),
            Some(CapturedError::Other(x)) => Err(PlatformError::Other(x.clone())),
            None => Ok(self
                .tick
                .cells
                .as_ref()
                .map(|cells| cells.iter().cloned().map(RawCellReading::from).collect())),
        }
    }
}

impl Tick {
    pub fn source(&self, default_api_level: u32) -> TickSource<'_> {
        let api_level = self.api_level.unwrap_or(default_api_level);
        TickSource {
            tick: self,
            capabilities: Capabilities::for_api_level(api_level),
        }
    }

    pub fn to_signal(&self, default_api_level: u32) -> Signal {
        let cell_info = parser::collect(&self.source(default_api_level));
        assemble(
            &cell_info,
            self.location.as_ref(),
            &self.metrics,
            self.timestamp,
        )
    }
}

/// Reads a capture and turns every tick into a measurement. Lines that fail to
/// parse are logged and skipped.
pub fn read(input: impl BufRead, default_api_level: u32) -> Result<MeasurementBatch> {
    let mut batch = MeasurementBatch::default();
    let mut skipped = 0;
    for (i, line) in input.split(b'\n').enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
        if line.trim_ascii().is_empty() {
            continue;
        }

        // bytes, so a line that isn't UTF-8 is skipped like any other bad line
        let tick: Tick = match serde_json::from_slice(&line) {
            Ok(x) => x,
            Err(e) => {
                warn!(line = i + 1, error = %e, "skipping malformed tick");
                skipped += 1;
                continue;
            }
        };
        debug!(line = i + 1, timestamp = %tick.timestamp, "normalizing tick");
        batch.push(tick.to_signal(default_api_level));
    }

    info!(measurements = batch.len(), skipped, "capture processed");
    Ok(batch)
}
