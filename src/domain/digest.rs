// Digest domain model - Channel-wide listing joined with series titles
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A denormalized observation row carrying its series' display title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestRow {
    pub series_id: String,
    pub title: String,
    pub frequency: String,
    pub obs_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub value: Option<Decimal>,
    pub value_unit: String,
}

/// How the digest collapses each series' history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestMode {
    /// Every observation of the channel, grouped by series, newest first.
    #[default]
    Full,
    /// Only the newest observation of each series.
    Latest,
}

impl DigestMode {
    pub fn apply(self, rows: Vec<DigestRow>) -> Vec<DigestRow> {
        match self {
            DigestMode::Full => rows,
            DigestMode::Latest => latest_per_series(rows),
        }
    }
}

/// Keep the first row of each run of equal `series_id`.
///
/// Input must already be sorted by series, newest first within a series.
pub fn latest_per_series(rows: Vec<DigestRow>) -> Vec<DigestRow> {
    let mut latest: Vec<DigestRow> = Vec::new();
    for row in rows {
        match latest.last() {
            Some(prev) if prev.series_id == row.series_id => {}
            _ => latest.push(row),
        }
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(series_id: &str, date: (i32, u32, u32)) -> DigestRow {
        DigestRow {
            series_id: series_id.to_string(),
            title: format!("{series_id} title"),
            frequency: "Monthly".to_string(),
            obs_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            value: None,
            value_unit: "%".to_string(),
        }
    }

    #[test]
    fn test_latest_per_series_keeps_group_heads() {
        let rows = vec![
            row("CPI", (2024, 2, 1)),
            row("CPI", (2024, 1, 1)),
            row("GDP", (2024, 1, 1)),
            row("GDP", (2023, 1, 1)),
            row("UNRATE", (2022, 5, 1)),
        ];

        let latest = latest_per_series(rows);
        let heads: Vec<(&str, NaiveDate)> = latest
            .iter()
            .map(|r| (r.series_id.as_str(), r.obs_date))
            .collect();

        assert_eq!(
            heads,
            vec![
                ("CPI", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
                ("GDP", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                ("UNRATE", NaiveDate::from_ymd_opt(2022, 5, 1).unwrap()),
            ]
        );
    }

    #[test]
    fn test_full_mode_is_identity() {
        let rows = vec![row("GDP", (2024, 1, 1)), row("GDP", (2023, 1, 1))];
        assert_eq!(DigestMode::Full.apply(rows.clone()), rows);
    }

    #[test]
    fn test_latest_of_empty_is_empty() {
        assert!(DigestMode::Latest.apply(Vec::new()).is_empty());
    }

    #[test]
    fn test_digest_row_json_shape() {
        let json = serde_json::to_value(row("GDP", (2024, 1, 1))).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["seriesId", "title", "frequency", "obsDate", "value", "valueUnit"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
