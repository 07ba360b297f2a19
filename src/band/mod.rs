//! Channel number to band and downlink frequency lookups.
//!
//! Each technology has a static band plan: a set of disjoint channel ranges,
//! each with the downlink frequency of its first channel and the channel
//! spacing. Channels outside every range have no band and no frequency.

use anyhow::{Context, Result};
use nodit::{interval::ii, Interval, NoditMap};
use serde::Serialize;

use crate::model::Technology;

pub mod gsm;
pub mod lte;
pub mod nr;
pub mod umts;

/// A contiguous run of channel numbers belonging to one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub band: &'static str,
    pub first: i32,
    pub last: i32,
    /// Downlink frequency of `first`, in kHz.
    pub first_dl_khz: i64,
    pub spacing_khz: i64,
}

impl Allocation {
    pub const fn new(
        band: &'static str,
        first: i32,
        last: i32,
        first_dl_khz: i64,
        spacing_khz: i64,
    ) -> Self {
        Self {
            band,
            first,
            last,
            first_dl_khz,
            spacing_khz,
        }
    }

    pub fn contains(&self, channel: i32) -> bool {
        (self.first..=self.last).contains(&channel)
    }

    /// Downlink centre frequency in Hz, or `None` if `channel` is outside this
    /// allocation.
    pub fn downlink_hz(&self, channel: i32) -> Option<i64> {
        if !self.contains(channel) {
            return None;
        }
        let khz = self.first_dl_khz + self.spacing_khz * i64::from(channel - self.first);
        Some(khz * 1000)
    }
}

/// Disjoint channel ranges of one technology.
pub struct BandPlan {
    ranges: NoditMap<i32, Interval<i32>, Allocation>,
}

impl BandPlan {
    pub fn build(allocations: &[Allocation]) -> Result<Self> {
        let mut ranges = NoditMap::new();
        for allocation in allocations {
            ranges
                .insert_strict(ii(allocation.first, allocation.last), *allocation)
                .ok()
                .with_context(|| format!("overlapping channel range for {}", allocation.band))?;
        }
        Ok(Self { ranges })
    }

    pub fn lookup(&self, channel: i32) -> Option<&Allocation> {
        self.ranges.get_at_point(channel)
    }
}

/// Band and downlink frequency of a bare channel number.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    pub band: Option<&'static str>,
    #[serde(rename = "frequencyHz")]
    pub frequency_hz: Option<i64>,
}

pub fn describe(technology: Technology, channel: i32) -> ChannelInfo {
    let (band, frequency_hz) = match technology {
        Technology::Gsm => {
            let band = gsm::band_for(channel);
            (band, gsm::frequency_hz_for(channel, band))
        }
        Technology::Umts => (umts::band_for(channel), umts::frequency_hz_for(channel)),
        Technology::Lte => (lte::band_for(channel), lte::frequency_hz_for(channel)),
        Technology::Nr => (None, nr::frequency_hz_for(channel)),
        Technology::Unknown => (None, None),
    };
    ChannelInfo { band, frequency_hz }
}
