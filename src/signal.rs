//! The record reported to the backend for every sampling tick.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{CellInfoData, LocationData, PerformanceMetrics, Technology};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<Technology>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plmn_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lac: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tac: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rac: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_band: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arfcn: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earfcn: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uarfcn: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nrarfcn: Option<i32>,
    #[serde(rename = "frequencyHz", default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsrq: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rscp: Option<i32>,
    #[serde(rename = "ecNo", default, skip_serializing_if = "Option::is_none")]
    pub ec_no: Option<i32>,
    #[serde(rename = "rxLev", default, skip_serializing_if = "Option::is_none")]
    pub rx_lev: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_response_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping_response_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_delivery_time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
}

impl Signal {
    /// A record with nothing but its timestamp.
    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        assemble(
            &CellInfoData::default(),
            None,
            &PerformanceMetrics::default(),
            timestamp,
        )
    }
}

/// Merges everything gathered for one tick. A failed cell read leaves the
/// cell fields empty but still reports location and probe results; the error
/// itself is not part of the record.
pub fn assemble(
    cell_info: &CellInfoData,
    location: Option<&LocationData>,
    metrics: &PerformanceMetrics,
    timestamp: DateTime<Utc>,
) -> Signal {
    let empty = CellInfoData::default();
    let cell = if cell_info.is_error() {
        &empty
    } else {
        cell_info
    };

    Signal {
        timestamp,

        technology: cell.technology,
        plmn_id: cell.plmn_id.clone(),
        lac: cell.lac,
        tac: cell.tac,
        rac: cell.rac,
        cell_id: cell.cell_id,

        frequency_band: cell.frequency_band.clone(),
        arfcn: cell.arfcn,
        earfcn: cell.earfcn,
        uarfcn: cell.uarfcn,
        nrarfcn: cell.nrarfcn,
        frequency_hz: cell.frequency_hz,

        rsrp: cell.rsrp,
        rsrq: cell.rsrq,
        rscp: cell.rscp,
        ec_no: cell.ec_no,
        rx_lev: cell.rx_lev,

        download_rate: metrics.download_rate,
        upload_rate: metrics.upload_rate,
        dns_response_time: metrics.dns_response_time,
        ping_response_time: metrics.ping_response_time,
        sms_delivery_time: metrics.sms_delivery_time,

        longitude: location.and_then(|x| x.longitude),
        latitude: location.and_then(|x| x.latitude),
    }
}

/// Request body of the bulk ingest endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBatch {
    pub measurements: Vec<Signal>,
}

impl MeasurementBatch {
    pub fn push(&mut self, signal: Signal) {
        self.measurements.push(signal);
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::error::CellInfoError;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 12, 0, 0).unwrap()
    }

    fn location() -> LocationData {
        LocationData {
            latitude: Some(35.7),
            longitude: Some(51.4),
            status: "Fixed".into(),
        }
    }

    fn metrics() -> PerformanceMetrics {
        PerformanceMetrics {
            download_rate: Some(1_250.5),
            upload_rate: Some(310.0),
            dns_response_time: Some(24.0),
            ping_response_time: Some(48.5),
            sms_delivery_time: None,
        }
    }

    fn lte() -> CellInfoData {
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
    }

    #[test]
    fn merge() {
        let signal = assemble(&lte(), Some(&location()), &metrics(), timestamp());
        assert_eq!(signal.timestamp, timestamp());
        assert_eq!(signal.technology, Some(Technology::Lte));
        assert_eq!(signal.earfcn, Some(1300));
        assert_eq!(signal.rsrp, Some(-90));
        assert_eq!(signal.latitude, Some(35.7));
        assert_eq!(signal.longitude, Some(51.4));
        assert_eq!(signal.download_rate, Some(1_250.5));
        assert_eq!(signal.sms_delivery_time, None);
    }

    #[test]
    fn failed_cell_info() {
        let cell = CellInfoData::from(CellInfoError::UnsupportedTechnology("x".into()));
        let signal = assemble(&cell, Some(&location()), &metrics(), timestamp());
        let expected = Signal {
            latitude: Some(35.7),
            longitude: Some(51.4),
            ..assemble(
                &CellInfoData::default(),
                None,
                &metrics(),
                timestamp(),
            )
        };
        assert_eq!(signal, expected);
        assert_eq!(signal.technology, None);
        assert_eq!(signal.ping_response_time, Some(48.5));
    }

    #[test]
    fn nothing_available() {
        let signal = assemble(
            &CellInfoData::from(CellInfoError::NoCellInfo),
            None,
            &PerformanceMetrics::default(),
            timestamp(),
        );
        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(json, json!({ "timestamp": "2024-06-14T12:00:00Z" }));
    }

    #[test]
    fn order_independent() {
        // gathering order of the inputs can't show up in the output
        let (cell, loc, perf) = (lte(), location(), metrics());
        let a = assemble(&cell, Some(&loc), &perf, timestamp());
        let (perf, loc, cell) = (metrics(), location(), lte());
        let b = assemble(&cell, Some(&loc), &perf, timestamp());
        assert_eq!(a, b);
    }

    #[test]
    fn wire_format() {
        let mut batch = MeasurementBatch::default();
        batch.push(assemble(&lte(), Some(&location()), &metrics(), timestamp()));
        assert_eq!(batch.len(), 1);

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(
            json,
            json!({
                "measurements": [{
                    "timestamp": "2024-06-14T12:00:00Z",
                    "technology": "LTE",
                    "plmn_id": "432-11",
                    "tac": 3301,
                    "cell_id": 27447297,
                    "frequency_band": "LTE Band 3 (1800)",
                    "earfcn": 1300,
                    "frequencyHz": 1815000000i64,
                    "rsrp": -90,
                    "rsrq": -10,
                    "download_rate": 1250.5,
                    "upload_rate": 310.0,
                    "dns_response_time": 24.0,
                    "ping_response_time": 48.5,
                    "longitude": 51.4,
                    "latitude": 35.7,
                }]
            })
        );

        let back: MeasurementBatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, batch);
    }
}
