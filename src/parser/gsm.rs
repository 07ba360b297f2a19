use crate::{
    band::gsm,
    model::{plmn_id, CellInfoData, Technology},
    platform::{Capabilities, RawGsmCell},
    sentinel::{self, mask_unavailable, UNAVAILABLE},
};

pub fn parse(cell: &RawGsmCell, capabilities: Capabilities) -> CellInfoData {
    let arfcn = sentinel::gated(capabilities.channel_number, cell.arfcn);
    let band = match arfcn {
        Some(arfcn) => gsm::band_for_network(arfcn, cell.mcc.as_deref()),
        None => Some(gsm::UNKNOWN_BAND),
    };

    CellInfoData {
        technology: Some(Technology::Gsm),
        plmn_id: plmn_id(cell.mcc.as_deref(), cell.mnc.as_deref()),
        lac: mask_unavailable(cell.lac, UNAVAILABLE),
        cell_id: sentinel::cell_id(cell.cid),
        arfcn,
        frequency_band: band.map(String::from),
        frequency_hz: arfcn.and_then(|x| gsm::frequency_hz_for(x, band)),
        rx_lev: mask_unavailable(cell.dbm, UNAVAILABLE),
        ..Default::default()
    }
}
