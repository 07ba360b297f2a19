use serde::{Deserialize, Serialize};

use crate::error::CellInfoError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Technology {
    #[serde(rename = "GSM")]
    #[strum(to_string = "GSM")]
    Gsm,
    #[serde(rename = "UMTS")]
    #[strum(to_string = "UMTS", serialize = "WCDMA")]
    Umts,
    #[serde(rename = "LTE")]
    #[strum(to_string = "LTE")]
    Lte,
    #[serde(rename = "NR")]
    #[strum(to_string = "NR")]
    Nr,
    #[strum(to_string = "Unknown")]
    Unknown,
}

/// Normalized view of the serving cell for one tick.
///
/// Either the fields of a single technology are filled in, or `error_message`
/// is set. The only overlap is an unsupported technology, which is reported as
/// `Technology::Unknown` together with its error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellInfoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<Technology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plmn_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lac: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tac: Option<i32>,
    // not exposed by any public platform api
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rac: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arfcn: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earfcn: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uarfcn: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nrarfcn: Option<i32>,
    #[serde(rename = "frequencyHz", skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsrp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsrq: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rscp: Option<i32>,
    #[serde(rename = "ecNo", skip_serializing_if = "Option::is_none")]
    pub ec_no: Option<i32>,
    #[serde(rename = "rxLev", skip_serializing_if = "Option::is_none")]
    pub rx_lev: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CellInfoData {
    pub fn failed(error: CellInfoError) -> Self {
        Self {
            error_message: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

impl From<CellInfoError> for CellInfoData {
    fn from(value: CellInfoError) -> Self {
        match value {
            CellInfoError::UnsupportedTechnology(_) => Self {
                technology: Some(Technology::Unknown),
                ..Self::failed(value)
            },
            _ => Self::failed(value),
        }
    }
}

/// Position fix handed over by the location collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// e.g. "Fixed", "Waiting for fix", "Providers disabled"
    pub status: String,
}

/// Results of the network probes for one tick. Each probe may fail on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// KB/s
    #[serde(default)]
    pub download_rate: Option<f64>,
    /// KB/s
    #[serde(default)]
    pub upload_rate: Option<f64>,
    /// ms
    #[serde(default)]
    pub dns_response_time: Option<f64>,
    /// ms
    #[serde(default)]
    pub ping_response_time: Option<f64>,
    /// ms
    #[serde(default)]
    pub sms_delivery_time: Option<f64>,
}

/// Joins a mobile country and network code, unless either is missing.
pub fn plmn_id(mcc: Option<&str>, mnc: Option<&str>) -> Option<String> {
    match (mcc, mnc) {
        (Some(mcc), Some(mnc)) if !mcc.is_empty() && !mnc.is_empty() => {
            Some(format!("{mcc}-{mnc}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn plmn() {
        assert_eq!(plmn_id(Some("432"), Some("11")).as_deref(), Some("432-11"));
        assert_eq!(plmn_id(Some("310"), Some("410")).as_deref(), Some("310-410"));
        assert_eq!(plmn_id(Some("432"), None), None);
        assert_eq!(plmn_id(None, Some("11")), None);
        assert_eq!(plmn_id(Some(""), Some("11")), None);
        assert_eq!(plmn_id(Some("432"), Some("")), None);
    }

    #[test]
    fn technology_names() {
        assert_eq!(Technology::Umts.to_string(), "UMTS");
        assert_eq!(Technology::from_str("wcdma").unwrap(), Technology::Umts);
        assert_eq!(Technology::from_str("lte").unwrap(), Technology::Lte);
        assert_eq!(
            serde_json::to_string(&Technology::Gsm).unwrap(),
            r#""GSM""#
        );
    }

    #[test]
    fn failed() {
        let data = CellInfoData::from(CellInfoError::NoCellInfo);
        assert!(data.is_error());
        assert_eq!(data.technology, None);
        assert_eq!(
            data.error_message.as_deref(),
            Some("No cell information available.")
        );

        let data = CellInfoData::from(CellInfoError::UnsupportedTechnology("CellInfoTdscdma".into()));
        assert_eq!(data.technology, Some(Technology::Unknown));
        assert_eq!(
            data.error_message.as_deref(),
            Some("Unsupported cell type: CellInfoTdscdma")
        );
    }

    #[test]
    fn wire_names() {
        let data = CellInfoData {
            frequency_hz: Some(1),
            rx_lev: Some(-70),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({ "frequencyHz": 1, "rxLev": -70 }));
    }
}
