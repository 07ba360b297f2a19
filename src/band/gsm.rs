//! GSM band plan (3GPP TS 45.005, 200 kHz channel spacing).
//!
//! PCS 1900 reuses ARFCNs 512..=810 of DCS 1800. The default plan resolves
//! those to DCS 1800; PCS 1900 has to be asked for explicitly.

use std::sync::LazyLock;

use super::{Allocation, BandPlan};

/// Band name used when the platform could not report an ARFCN at all.
pub const UNKNOWN_BAND: &str = "Unknown GSM";

pub const PCS_1900: Allocation = Allocation::new("PCS 1900", 512, 810, 1_930_200, 200);

const ALLOCATIONS: &[Allocation] = &[
    Allocation::new("E-GSM 900", 0, 0, 935_000, 200),
    Allocation::new("P-GSM 900", 1, 124, 935_200, 200),
    Allocation::new("GSM 850", 128, 251, 869_200, 200),
    Allocation::new("GSM 450", 259, 293, 460_600, 200),
    Allocation::new("GSM 480", 306, 340, 489_000, 200),
    Allocation::new("DCS 1800", 512, 885, 1_805_200, 200),
    Allocation::new("R-GSM 900", 955, 974, 921_200, 200),
    Allocation::new("E-GSM 900", 975, 1023, 925_200, 200),
];

// Canada, United States, Mexico
const PCS_COUNTRIES: &[&str] = &["302", "310", "311", "312", "313", "314", "315", "316", "334"];

static PLAN: LazyLock<BandPlan> =
    LazyLock::new(|| BandPlan::build(ALLOCATIONS).expect("GSM band plan must be disjoint"));

pub fn band_for(arfcn: i32) -> Option<&'static str> {
    PLAN.lookup(arfcn).map(|x| x.band)
}

/// Like [`band_for`], but resolves the DCS 1800 / PCS 1900 overlap using the
/// mobile country code of the serving network.
pub fn band_for_network(arfcn: i32, mcc: Option<&str>) -> Option<&'static str> {
    if PCS_1900.contains(arfcn) && mcc.is_some_and(|x| PCS_COUNTRIES.contains(&x)) {
        return Some(PCS_1900.band);
    }
    band_for(arfcn)
}

/// Downlink frequency for `arfcn` within `band`. Without a band the default
/// plan is used. A band that does not contain the ARFCN gives `None`.
pub fn frequency_hz_for(arfcn: i32, band: Option<&str>) -> Option<i64> {
    match band {
        Some(band) if band == PCS_1900.band => PCS_1900.downlink_hz(arfcn),
        Some(band) => PLAN
            .lookup(arfcn)
            .filter(|x| x.band == band)?
            .downlink_hz(arfcn),
        None => PLAN.lookup(arfcn)?.downlink_hz(arfcn),
    }
}
