use crate::{
    band::nr,
    model::{plmn_id, CellInfoData, Technology},
    platform::{Capabilities, RawNrCell},
    sentinel::{self, capability_gate, mask_unavailable, UNAVAILABLE, UNAVAILABLE_LONG},
};

pub fn parse(cell: &RawNrCell, capabilities: Capabilities) -> CellInfoData {
    let nrarfcn = sentinel::gated(capabilities.channel_number, cell.nrarfcn);
    let bands = capability_gate(capabilities.bands, || cell.bands.as_slice()).unwrap_or_default();

    CellInfoData {
        technology: Some(Technology::Nr),
        plmn_id: plmn_id(cell.mcc.as_deref(), cell.mnc.as_deref()),
        tac: mask_unavailable(cell.tac, UNAVAILABLE),
        cell_id: mask_unavailable(cell.nci, UNAVAILABLE_LONG),
        nrarfcn,
        frequency_band: nr::band_for_cell(bands),
        frequency_hz: nrarfcn.and_then(nr::frequency_hz_for),
        rsrp: mask_unavailable(cell.ss_rsrp, UNAVAILABLE),
        rsrq: mask_unavailable(cell.ss_rsrq, UNAVAILABLE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> RawNrCell {
        RawNrCell {
            mcc: Some("310".into()),
            mnc: Some("260".into()),
            tac: 11_008,
            nci: 5_131_776_017,
            nrarfcn: 632_628,
            bands: vec![78],
            ss_rsrp: -98,
            ss_rsrq: -11,
        }
    }

    #[test]
    fn full() {
        let data = parse(&cell(), Capabilities::ALL);
        assert_eq!(
            data,
            CellInfoData {
                technology: Some(Technology::Nr),
                plmn_id: Some("310-260".into()),
                tac: Some(11_008),
                cell_id: Some(5_131_776_017),
                nrarfcn: Some(632_628),
                frequency_band: Some("NR Band n78".into()),
                frequency_hz: Some(3_489_420_000),
                rsrp: Some(-98),
                rsrq: Some(-11),
                ..Default::default()
            }
        );
    }

    #[test]
    fn unavailable() {
        let data = parse(
            &RawNrCell {
                nci: UNAVAILABLE_LONG,
                nrarfcn: UNAVAILABLE,
                ss_rsrp: UNAVAILABLE,
                ss_rsrq: UNAVAILABLE,
                tac: UNAVAILABLE,
                ..cell()
            },
            Capabilities::default(),
        );
        assert_eq!(data.cell_id, None);
        assert_eq!(data.nrarfcn, None);
        assert_eq!(data.frequency_band, None);
        assert_eq!(data.frequency_hz, None);
        assert_eq!(data.rsrp, None);
        assert_eq!(data.rsrq, None);
        assert_eq!(data.tac, None);
        assert_eq!(data.plmn_id.as_deref(), Some("310-260"));
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
