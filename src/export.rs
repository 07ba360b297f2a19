//! Flat CSV view of measurements, one row per tick.

use std::io;

use anyhow::Result;
use serde::Serialize;

use crate::signal::Signal;

/// CSV representation of a [`Signal`]; every column is always written.
#[derive(Debug, Serialize)]
struct Row<'a> {
    timestamp: String,
    technology: Option<&'a str>,
    plmn_id: Option<&'a str>,
    lac: Option<i32>,
    tac: Option<i32>,
    rac: Option<i32>,
    cell_id: Option<i64>,
    frequency_band: Option<&'a str>,
    arfcn: Option<i32>,
    uarfcn: Option<i32>,
    earfcn: Option<i32>,
    nrarfcn: Option<i32>,
    frequency_hz: Option<i64>,
    rsrp: Option<i32>,
    rsrq: Option<i32>,
    rscp: Option<i32>,
    ec_no: Option<i32>,
    rx_lev: Option<i32>,
    download_rate: Option<f64>,
    upload_rate: Option<f64>,
    dns_response_time: Option<f64>,
    ping_response_time: Option<f64>,
    sms_delivery_time: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl<'a> From<&'a Signal> for Row<'a> {
    fn from(x: &'a Signal) -> Self {
        Self {
            timestamp: x.timestamp.to_rfc3339(),
            technology: x.technology.as_ref().map(AsRef::<str>::as_ref),
            plmn_id: x.plmn_id.as_deref(),
            lac: x.lac,
            tac: x.tac,
            rac: x.rac,
            cell_id: x.cell_id,
            frequency_band: x.frequency_band.as_deref(),
            arfcn: x.arfcn,
            uarfcn: x.uarfcn,
            earfcn: x.earfcn,
            nrarfcn: x.nrarfcn,
            frequency_hz: x.frequency_hz,
            rsrp: x.rsrp,
            rsrq: x.rsrq,
            rscp: x.rscp,
            ec_no: x.ec_no,
            rx_lev: x.rx_lev,
            download_rate: x.download_rate,
            upload_rate: x.upload_rate,
            dns_response_time: x.dns_response_time,
            ping_response_time: x.ping_response_time,
            sms_delivery_time: x.sms_delivery_time,
            latitude: x.latitude,
            longitude: x.longitude,
        }
    }
}

pub fn write_csv(output: impl io::Write, signals: &[Signal]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    for signal in signals {
        writer.serialize(Row::from(signal))?;
    }
    writer.flush()?;
    Ok(())
}
