// Series domain model
use serde::Serialize;

/// A named economic time series (a row of `fred_series`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_id: String,
    pub title_cn: String,
    pub link: String,
}

impl Series {
    pub fn new(series_id: String, title_cn: String, link: String) -> Self {
        Self {
            series_id,
            title_cn,
            link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let series = Series::new(
            "GDP".to_string(),
            "GDP growth".to_string(),
            "https://fred.stlouisfed.org/series/GDP".to_string(),
        );

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "seriesId": "GDP",
                "titleCn": "GDP growth",
                "link": "https://fred.stlouisfed.org/series/GDP",
            })
        );
    }
}
