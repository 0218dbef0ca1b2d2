// Observation domain model
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One dated data point of a series (a row of `observations`).
///
/// `limit` is stored by the ingestion side but nothing here reads it;
/// it is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: i64,
    pub series_id: String,
    pub frequency: String,
    pub limit: Option<i32>,
    pub channel_name: String,
    pub obs_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub value: Option<Decimal>,
    pub value_unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serializes_date_and_decimal() {
        let observation = Observation {
            id: 7,
            series_id: "GDP".to_string(),
            frequency: "Quarterly".to_string(),
            limit: None,
            channel_name: "mail".to_string(),
            obs_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            value: Some(Decimal::from_str("2.1").unwrap()),
            value_unit: "%".to_string(),
        };

        let json = serde_json::to_value(&observation).unwrap();
        assert_eq!(json["seriesId"], "GDP");
        assert_eq!(json["channelName"], "mail");
        assert_eq!(json["obsDate"], "2024-01-01");
        assert_eq!(json["value"], 2.1);
        assert_eq!(json["limit"], serde_json::Value::Null);
        assert_eq!(json["valueUnit"], "%");
    }

    #[test]
    fn test_full_precision_decimal_is_exact() {
        let observation = Observation {
            id: 3,
            series_id: "M2SL".to_string(),
            frequency: "Monthly".to_string(),
            limit: None,
            channel_name: "mail".to_string(),
            obs_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            value: Some(Decimal::from_str("12345678901234.123456").unwrap()),
            value_unit: "USD".to_string(),
        };

        let text = serde_json::to_string(&observation).unwrap();
        assert!(text.contains(r#""value":12345678901234.123456"#), "{text}");
    }

    #[test]
    fn test_missing_value_is_null() {
        let observation = Observation {
            id: 1,
            series_id: "CPI".to_string(),
            frequency: "Monthly".to_string(),
            limit: Some(12),
            channel_name: "web".to_string(),
            obs_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            value: None,
            value_unit: "Index".to_string(),
        };

        let json = serde_json::to_value(&observation).unwrap();
        assert!(json["value"].is_null());
        assert_eq!(json["limit"], 12);
    }
}
