use crate::{
    band::lte,
    model::{plmn_id, CellInfoData, Technology},
    platform::{Capabilities, RawLteCell},
    sentinel::{self, capability_gate, mask_unavailable, UNAVAILABLE},
};

pub fn parse(cell: &RawLteCell, capabilities: Capabilities) -> CellInfoData {
    let earfcn = sentinel::gated(capabilities.channel_number, cell.earfcn);
    let bands = capability_gate(capabilities.bands, || cell.bands.as_slice()).unwrap_or_default();

    CellInfoData {
        technology: Some(Technology::Lte),
        plmn_id: plmn_id(cell.mcc.as_deref(), cell.mnc.as_deref()),
        tac: mask_unavailable(cell.tac, UNAVAILABLE),
        cell_id: sentinel::cell_id(cell.ci),
        earfcn,
        frequency_band: lte::band_for_cell(earfcn, bands),
        frequency_hz: earfcn.and_then(lte::frequency_hz_for),
        rsrp: mask_unavailable(cell.rsrp, UNAVAILABLE),
        rsrq: mask_unavailable(cell.rsrq, UNAVAILABLE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> RawLteCell {
        RawLteCell {
            mcc: Some("432".into()),
            mnc: Some("11".into()),
            tac: 3_301,
            ci: 27_447_297,
            earfcn: 1300,
            bands: vec![3],
            rsrp: -90,
            rsrq: -10,
        }
    }

    #[test]
    fn full() {
        let data = parse(&cell(), Capabilities::ALL);
        assert_eq!(
            data,
            CellInfoData {
                technology: Some(Technology::Lte),
                plmn_id: Some("432-11".into()),
                tac: Some(3_301),
                cell_id: Some(27_447_297),
                earfcn: Some(1300),
                frequency_band: Some("LTE Band 3 (1800)".into()),
                frequency_hz: Some(1_815_000_000),
                rsrp: Some(-90),
                rsrq: Some(-10),
                ..Default::default()
            }
        );
    }

    #[test]
    fn bands_without_earfcn() {
        let caps = Capabilities {
            channel_number: false,
            bands: true,
        };
        let data = parse(&cell(), caps);
        assert_eq!(data.earfcn, None);
        assert_eq!(data.frequency_band.as_deref(), Some("LTE Band 3 (1800)"));
        assert_eq!(data.frequency_hz, None);
    }

    #[test]
    fn bands_not_supported() {
        // the platform's list must not be read when the accessor doesn't exist
        let caps = Capabilities {
            channel_number: false,
            bands: false,
        };
        let data = parse(&cell(), caps);
        assert_eq!(data.frequency_band, None);
    }

    #[test]
    fn unavailable() {
        let data = parse(
            &RawLteCell {
                mcc: None,
                mnc: None,
                tac: UNAVAILABLE,
                ci: UNAVAILABLE,
                earfcn: UNAVAILABLE,
                bands: Vec::new(),
                rsrp: UNAVAILABLE,
                rsrq: UNAVAILABLE,
            },
            Capabilities::ALL,
        );
        assert_eq!(
            data,
            CellInfoData {
                technology: Some(Technology::Lte),
                ..Default::default()
            }
        );
    }

    #[test]
    fn idempotent() {
        let cell = cell();
        assert_eq!(
            parse(&cell, Capabilities::ALL),
            parse(&cell, Capabilities::ALL)
        );
    }
}
