//! UTRA FDD band plan, downlink UARFCNs (3GPP TS 25.101).
//!
//! F_DL = F_DL_Offset + 0.2 MHz * UARFCN. Besides the general ranges some bands
//! define additional channels on a 100 kHz shifted raster; those are single
//! channel allocations with their own offset. Band VI sits entirely inside
//! band V and is reported as band V.

use std::sync::LazyLock;

use super::{Allocation, BandPlan};

const fn range(band: &'static str, first: i32, last: i32, offset_khz: i64) -> Allocation {
    Allocation::new(band, first, last, offset_khz + 200 * first as i64, 200)
}

const ALLOCATIONS: &[Allocation] = &[
    range("UTRA XIX (800)", 712, 763, 735_000),
    range("UTRA XXI (1500)", 862, 912, 1_326_000),
    range("UTRA III (1800)", 1162, 1513, 1_575_000),
    range("UTRA IV (1700)", 1537, 1738, 1_805_000),
    range("UTRA VII (2600)", 2237, 2563, 2_175_000),
    range("UTRA VIII (900)", 2937, 3088, 340_000),
    range("UTRA X (1700)", 3112, 3388, 1_490_000),
    range("UTRA XI (1500)", 3712, 3787, 736_000),
    range("UTRA XII (700)", 3842, 3903, -37_000),
    range("UTRA XIII (700)", 4017, 4043, -55_000),
    range("UTRA XIV (700)", 4117, 4143, -63_000),
    range("UTRA V (850)", 4357, 4458, 0),
    range("UTRA XX (800)", 4512, 4638, -109_000),
    range("UTRA XXII (3500)", 4662, 5038, 2_580_000),
    range("UTRA XXV (1900)", 5112, 5413, 910_000),
    range("UTRA XXVI (850)", 5762, 5913, -291_000),
    range("UTRA IX (1700)", 9237, 9387, 0),
    range("UTRA II (1900)", 9662, 9938, 0),
    range("UTRA I (2100)", 10562, 10838, 0),
];

/// Additional channels: band, F_DL_Offset in kHz, UARFCNs.
const ADDITIONAL: &[(&str, i64, &[i32])] = &[
    ("UTRA XIX (800)", 735_100, &[787, 812, 837]),
    (
        "UTRA II (1900)",
        1_850_100,
        &[412, 437, 462, 487, 512, 537, 562, 587, 612, 637, 662, 687],
    ),
    ("UTRA V (850)", 670_100, &[1007, 1012, 1032, 1037, 1062, 1087]),
    (
        "UTRA IV (1700)",
        1_735_100,
        &[1887, 1912, 1937, 1962, 1987, 2012, 2037, 2062, 2087],
    ),
    (
        "UTRA VII (2600)",
        2_105_100,
        &[
            2587, 2612, 2637, 2662, 2687, 2712, 2737, 2762, 2787, 2812, 2837, 2862, 2887, 2912,
        ],
    ),
    (
        "UTRA X (1700)",
        1_430_100,
        &[3412, 3437, 3462, 3487, 3512, 3537, 3562, 3587, 3612, 3637, 3662, 3687],
    ),
    ("UTRA XII (700)", -54_900, &[3932, 3957, 3962, 3987, 3992]),
    ("UTRA XIII (700)", -64_900, &[4067, 4092]),
    ("UTRA XIV (700)", -72_900, &[4167, 4192]),
    (
        "UTRA XXVI (850)",
        -325_900,
        &[5937, 5962, 5987, 5992, 6012, 6037, 6062, 6087],
    ),
    (
        "UTRA XXV (1900)",
        674_100,
        &[
            6292, 6317, 6342, 6367, 6392, 6417, 6442, 6467, 6492, 6517, 6542, 6567, 6592,
        ],
    ),
];

fn allocations() -> Vec<Allocation> {
    let additional = ADDITIONAL.iter().flat_map(|&(band, offset_khz, channels)| {
        channels.iter().map(move |&x| range(band, x, x, offset_khz))
    });
    ALLOCATIONS.iter().copied().chain(additional).collect()
}

static PLAN: LazyLock<BandPlan> = LazyLock::new(|| {
    BandPlan::build(&allocations()).expect("UTRA band plan must be disjoint")
});

pub fn band_for(uarfcn: i32) -> Option<&'static str> {
    PLAN.lookup(uarfcn).map(|x| x.band)
}

pub fn frequency_hz_for(uarfcn: i32) -> Option<i64> {
    PLAN.lookup(uarfcn)?.downlink_hz(uarfcn)
}
