//! E-UTRA band plan, downlink EARFCNs (3GPP TS 36.101).
//!
//! F_DL = F_DL_low + 0.1 MHz * (EARFCN - N_Offs-DL)

use std::sync::LazyLock;

use super::{Allocation, BandPlan};

const fn band(
    number: i32,
    name: &'static str,
    first: i32,
    last: i32,
    dl_low_khz: i64,
) -> (i32, Allocation) {
    (number, Allocation::new(name, first, last, dl_low_khz, 100))
}

const BANDS: &[(i32, Allocation)] = &[
    band(1, "LTE Band 1 (2100)", 0, 599, 2_110_000),
    band(2, "LTE Band 2 (1900)", 600, 1199, 1_930_000),
    band(3, "LTE Band 3 (1800)", 1200, 1949, 1_805_000),
    band(4, "LTE Band 4 (1700)", 1950, 2399, 2_110_000),
    band(5, "LTE Band 5 (850)", 2400, 2649, 869_000),
    band(6, "LTE Band 6 (800)", 2650, 2749, 875_000),
    band(7, "LTE Band 7 (2600)", 2750, 3449, 2_620_000),
    band(8, "LTE Band 8 (900)", 3450, 3799, 925_000),
    band(9, "LTE Band 9 (1800)", 3800, 4149, 1_844_900),
    band(10, "LTE Band 10 (1700)", 4150, 4749, 2_110_000),
    band(11, "LTE Band 11 (1500)", 4750, 4949, 1_475_900),
    band(12, "LTE Band 12 (700)", 5010, 5179, 729_000),
    band(13, "LTE Band 13 (700)", 5180, 5279, 746_000),
    band(14, "LTE Band 14 (700)", 5280, 5379, 758_000),
    band(17, "LTE Band 17 (700)", 5730, 5849, 734_000),
    band(18, "LTE Band 18 (800)", 5850, 5999, 860_000),
    band(19, "LTE Band 19 (800)", 6000, 6149, 875_000),
    band(20, "LTE Band 20 (800)", 6150, 6449, 791_000),
    band(21, "LTE Band 21 (1500)", 6450, 6599, 1_495_900),
    band(22, "LTE Band 22 (3500)", 6600, 7399, 3_510_000),
    band(23, "LTE Band 23 (2000)", 7500, 7699, 2_180_000),
    band(24, "LTE Band 24 (1600)", 7700, 8039, 1_525_000),
    band(25, "LTE Band 25 (1900)", 8040, 8689, 1_930_000),
    band(26, "LTE Band 26 (850)", 8690, 9039, 859_000),
    band(27, "LTE Band 27 (800)", 9040, 9209, 852_000),
    band(28, "LTE Band 28 (700)", 9210, 9659, 758_000),
    band(29, "LTE Band 29 (700)", 9660, 9769, 717_000),
    band(30, "LTE Band 30 (2300)", 9770, 9869, 2_350_000),
    band(31, "LTE Band 31 (450)", 9870, 9919, 462_500),
    band(32, "LTE Band 32 (1500)", 9920, 10359, 1_452_000),
    band(33, "LTE Band 33 (1900)", 36000, 36199, 1_900_000),
    band(34, "LTE Band 34 (2000)", 36200, 36349, 2_010_000),
    band(35, "LTE Band 35 (1900)", 36350, 36949, 1_850_000),
    band(36, "LTE Band 36 (1900)", 36950, 37549, 1_930_000),
    band(37, "LTE Band 37 (1900)", 37550, 37749, 1_910_000),
    band(38, "LTE Band 38 (2600)", 37750, 38249, 2_570_000),
    band(39, "LTE Band 39 (1900)", 38250, 38649, 1_880_000),
    band(40, "LTE Band 40 (2300)", 38650, 39649, 2_300_000),
    band(41, "LTE Band 41 (2500)", 39650, 41589, 2_496_000),
    band(42, "LTE Band 42 (3500)", 41590, 43589, 3_400_000),
    band(43, "LTE Band 43 (3700)", 43590, 45589, 3_600_000),
    band(44, "LTE Band 44 (700)", 45590, 46589, 703_000),
    band(45, "LTE Band 45 (1500)", 46590, 46789, 1_447_000),
    band(46, "LTE Band 46 (5200)", 46790, 54539, 5_150_000),
    band(47, "LTE Band 47 (5900)", 54540, 55239, 5_855_000),
    band(48, "LTE Band 48 (3500)", 55240, 56739, 3_550_000),
    band(49, "LTE Band 49 (3500)", 56740, 58239, 3_550_000),
    band(50, "LTE Band 50 (1500)", 58240, 59089, 1_432_000),
    band(51, "LTE Band 51 (1500)", 59090, 59139, 1_427_000),
    band(52, "LTE Band 52 (3300)", 59140, 60139, 3_300_000),
    band(53, "LTE Band 53 (2500)", 60140, 60254, 2_483_500),
    band(65, "LTE Band 65 (2100)", 65536, 66435, 2_110_000),
    band(66, "LTE Band 66 (1700)", 66436, 67335, 2_110_000),
    band(67, "LTE Band 67 (700)", 67336, 67535, 738_000),
    band(68, "LTE Band 68 (700)", 67536, 67835, 753_000),
    band(69, "LTE Band 69 (2600)", 67836, 68335, 2_570_000),
    band(70, "LTE Band 70 (1700)", 68336, 68585, 1_995_000),
    band(71, "LTE Band 71 (600)", 68586, 68935, 617_000),
    band(72, "LTE Band 72 (450)", 68936, 68985, 461_000),
    band(73, "LTE Band 73 (450)", 68986, 69035, 460_000),
    band(74, "LTE Band 74 (1500)", 69036, 69465, 1_475_000),
    band(75, "LTE Band 75 (1500)", 69466, 70315, 1_432_000),
    band(76, "LTE Band 76 (1500)", 70316, 70365, 1_427_000),
    band(85, "LTE Band 85 (700)", 70366, 70545, 728_000),
    band(87, "LTE Band 87 (410)", 70546, 70595, 420_000),
    band(88, "LTE Band 88 (410)", 70596, 70645, 422_000),
    band(252, "LTE Band 252 (5200)", 255144, 256143, 5_150_000),
    band(255, "LTE Band 255 (5800)", 260894, 262143, 5_725_000),
];

static PLAN: LazyLock<BandPlan> = LazyLock::new(|| {
    let allocations: Vec<_> = BANDS.iter().map(|(_, x)| *x).collect();
    BandPlan::build(&allocations).expect("E-UTRA band plan must be disjoint")
});

pub fn band_for(earfcn: i32) -> Option<&'static str> {
    PLAN.lookup(earfcn).map(|x| x.band)
}

pub fn frequency_hz_for(earfcn: i32) -> Option<i64> {
    PLAN.lookup(earfcn)?.downlink_hz(earfcn)
}

/// Display name for a band number reported by the platform.
pub fn band_name(number: i32) -> String {
    match BANDS.iter().find(|(n, _)| *n == number) {
        Some((_, allocation)) => allocation.band.to_string(),
        None => format!("LTE Band {number}"),
    }
}

/// Band of a serving cell. The EARFCN decides when it is known; the bands the
/// platform reports are only consulted when there is no EARFCN. An EARFCN
/// outside every range gives `None` even if bands were reported.
pub fn band_for_cell(earfcn: Option<i32>, reported: &[i32]) -> Option<String> {
    match earfcn {
        Some(earfcn) => band_for(earfcn).map(String::from),
        None => reported.iter().find(|x| **x > 0).map(|x| band_name(*x)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        assert_eq!(band_for(0), Some("LTE Band 1 (2100)"));
        assert_eq!(band_for(1300), Some("LTE Band 3 (1800)"));
        assert_eq!(band_for(3350), Some("LTE Band 7 (2600)"));
        assert_eq!(band_for(6300), Some("LTE Band 20 (800)"));
        assert_eq!(band_for(38950), Some("LTE Band 40 (2300)"));
        assert_eq!(band_for(66786), Some("LTE Band 66 (1700)"));
        assert_eq!(band_for(70366), Some("LTE Band 85 (700)"));
        assert_eq!(band_for(70545), Some("LTE Band 85 (700)"));
        assert_eq!(band_for(56740), Some("LTE Band 49 (3500)"));
        assert_eq!(band_for(255144), Some("LTE Band 252 (5200)"));
    }

    #[test]
    fn frequencies() {
        assert_eq!(frequency_hz_for(300), Some(2_140_000_000));
        assert_eq!(frequency_hz_for(1300), Some(1_815_000_000));
        assert_eq!(frequency_hz_for(1849), Some(1_869_900_000));
        assert_eq!(frequency_hz_for(3100), Some(2_655_000_000));
        assert_eq!(frequency_hz_for(6300), Some(806_000_000));
        assert_eq!(frequency_hz_for(3800), Some(1_844_900_000));
        assert_eq!(frequency_hz_for(9870), Some(462_500_000));
        assert_eq!(frequency_hz_for(66786), Some(2_145_000_000));
        assert_eq!(frequency_hz_for(70366), Some(728_000_000));
        assert_eq!(frequency_hz_for(70456), Some(737_000_000));
        assert_eq!(frequency_hz_for(60140), Some(2_483_500_000));
        assert_eq!(frequency_hz_for(261000), Some(5_735_600_000));
    }

    #[test]
    fn out_of_range() {
        for earfcn in [-1, 5000, 5500, 7450, 10360, 20000, 35999, 60255, 65535, 70646, 262144] {
            assert_eq!(band_for(earfcn), None, "{earfcn}");
            assert_eq!(frequency_hz_for(earfcn), None, "{earfcn}");
        }
    }

    #[test]
    fn cell_band() {
        assert_eq!(
            band_for_cell(Some(1300), &[20]).as_deref(),
            Some("LTE Band 3 (1800)")
        );
        assert_eq!(
            band_for_cell(None, &[20]).as_deref(),
            Some("LTE Band 20 (800)")
        );
        assert_eq!(
            band_for_cell(None, &[85]).as_deref(),
            Some("LTE Band 85 (700)")
        );
        assert_eq!(band_for_cell(None, &[86]).as_deref(), Some("LTE Band 86"));
        assert_eq!(band_for_cell(None, &[]), None);
        assert_eq!(band_for_cell(Some(5500), &[3]), None);
    }
}
