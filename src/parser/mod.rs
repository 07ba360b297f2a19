//! Turns the platform's raw cell readings into [`CellInfoData`].
//!
//! Nothing in here fails: every problem is reported through
//! `CellInfoData::error_message` so a bad tick never stops the sampling loop.

use tracing::{debug, error, warn};

use crate::{
    error::CellInfoError,
    model::CellInfoData,
    platform::{Capabilities, CellInfoSource, RawCell, RawCellReading},
};

mod gsm;
mod lte;
mod nr;
mod umts;

/// Reads the serving cell from `source`.
pub fn collect(source: &impl CellInfoSource) -> CellInfoData {
    if !source.has_location_permission() {
        warn!("location permission not granted, skipping cell info");
        return CellInfoError::PermissionDenied.into();
    }

    match source.all_cell_info() {
        Ok(readings) => {
            let readings = readings.as_deref().unwrap_or_default();
            normalize(readings, source.capabilities())
        }
        Err(e) => {
            error!(error = %e, "error getting cell info");
            CellInfoError::from(e).into()
        }
    }
}

/// Picks the registered cell out of `readings` and parses it.
pub fn normalize(readings: &[RawCellReading], capabilities: Capabilities) -> CellInfoData {
    match serving_cell(readings) {
        Ok(cell) => parse(cell, capabilities),
        Err(e) => {
            debug!(count = readings.len(), "{e}");
            e.into()
        }
    }
}

fn serving_cell(readings: &[RawCellReading]) -> Result<&RawCell, CellInfoError> {
    if readings.is_empty() {
        return Err(CellInfoError::NoCellInfo);
    }
    readings
        .iter()
        .find(|x| x.registered)
        .map(|x| &x.cell)
        .ok_or(CellInfoError::NoRegisteredCell)
}

pub fn parse(cell: &RawCell, capabilities: Capabilities) -> CellInfoData {
    match cell {
        RawCell::Gsm(x) => gsm::parse(x, capabilities),
        RawCell::Umts(x) => umts::parse(x, capabilities),
        RawCell::Lte(x) => lte::parse(x, capabilities),
        RawCell::Nr(x) => nr::parse(x, capabilities),
        RawCell::Unknown { kind } => CellInfoError::UnsupportedTechnology(kind.clone()).into(),
    }
}
