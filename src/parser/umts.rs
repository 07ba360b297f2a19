use crate::{
    band::umts,
    model::{plmn_id, CellInfoData, Technology},
    platform::{Capabilities, RawUmtsCell},
    sentinel::{self, mask_unavailable, UNAVAILABLE},
};

pub fn parse(cell: &RawUmtsCell, capabilities: Capabilities) -> CellInfoData {
    let uarfcn = sentinel::gated(capabilities.channel_number, cell.uarfcn);

    CellInfoData {
        technology: Some(Technology::Umts),
        plmn_id: plmn_id(cell.mcc.as_deref(), cell.mnc.as_deref()),
        lac: mask_unavailable(cell.lac, UNAVAILABLE),
        cell_id: sentinel::cell_id(cell.cid),
        uarfcn,
        frequency_band: uarfcn.and_then(umts::band_for).map(String::from),
        frequency_hz: uarfcn.and_then(umts::frequency_hz_for),
        rscp: mask_unavailable(cell.dbm, UNAVAILABLE),
        ..Default::default()
    }
}
