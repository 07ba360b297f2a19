//! NR global frequency raster (3GPP TS 38.104).
//!
//! NR band definitions overlap heavily, so a channel number alone does not
//! name a band. Only the frequency is derived here; the band name comes from
//! what the platform reports.

use std::sync::LazyLock;

use super::{Allocation, BandPlan};

const RASTER: &[Allocation] = &[
    Allocation::new("0-3000 MHz", 0, 599_999, 0, 5),
    Allocation::new("3000-24250 MHz", 600_000, 2_016_666, 3_000_000, 15),
    Allocation::new("24250-100000 MHz", 2_016_667, 3_279_165, 24_250_080, 60),
];

static PLAN: LazyLock<BandPlan> =
    LazyLock::new(|| BandPlan::build(RASTER).expect("NR raster must be disjoint"));

pub fn frequency_hz_for(nrarfcn: i32) -> Option<i64> {
    PLAN.lookup(nrarfcn)?.downlink_hz(nrarfcn)
}

pub fn band_name(number: i32) -> String {
    format!("NR Band n{number}")
}

pub fn band_for_cell(reported: &[i32]) -> Option<String> {
    reported.iter().find(|x| **x > 0).map(|x| band_name(*x))
}
