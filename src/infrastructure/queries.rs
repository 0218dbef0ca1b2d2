// SQL text shared by the MySQL and SQLite repositories
//
// Only the `value` projection differs between dialects; everything else,
// filters and sort order included, comes from one place.

pub const LIST_SERIES: &str = "SELECT series_id, title_cn, link FROM fred_series";

pub const FIND_SERIES: &str = "SELECT series_id, title_cn, link FROM fred_series WHERE series_id = ?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    /// No decimal type: `value` is read back as text
    Sqlite,
}

impl Dialect {
    fn value_column(self, qualifier: &str) -> String {
        match self {
            Dialect::MySql => format!("{qualifier}value"),
            Dialect::Sqlite => format!("CAST({qualifier}value AS TEXT) AS value"),
        }
    }
}

/// Observation statements for one dialect, built once per repository
#[derive(Debug, Clone)]
pub struct ObservationQueries {
    pub by_series: String,
    pub by_channel: String,
    pub by_series_and_channel: String,
    pub digest: String,
}

impl ObservationQueries {
    pub fn for_dialect(dialect: Dialect) -> Self {
        let select = format!(
            "SELECT id, series_id, frequency, `limit`, channel_name, obs_date, {}, value_unit \
             FROM observations",
            dialect.value_column("")
        );

        Self {
            by_series: format!("{select} WHERE series_id = ? ORDER BY obs_date DESC, id DESC"),
            by_channel: format!("{select} WHERE channel_name = ? ORDER BY obs_date DESC, id DESC"),
            by_series_and_channel: format!(
                "{select} WHERE series_id = ? AND channel_name = ? ORDER BY obs_date DESC, id DESC"
            ),
            digest: format!(
                "SELECT o.series_id, s.title_cn, o.frequency, o.obs_date, {}, o.value_unit \
                 FROM observations o \
                 INNER JOIN fred_series s ON s.series_id = o.series_id \
                 WHERE o.channel_name = ? \
                 ORDER BY o.series_id ASC, o.obs_date DESC, o.id DESC",
                dialect.value_column("o.")
            ),
        }
    }

    #[cfg(test)]
    fn all(&self) -> [&str; 4] {
        [
            &self.by_series,
            &self.by_channel,
            &self.by_series_and_channel,
            &self.digest,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialects_differ_only_in_value_projection() {
        let mysql = ObservationQueries::for_dialect(Dialect::MySql);
        let sqlite = ObservationQueries::for_dialect(Dialect::Sqlite);

        for (my, lite) in mysql.all().iter().zip(sqlite.all()) {
            let normalized = lite
                .replace("CAST(o.value AS TEXT) AS value", "o.value")
                .replace("CAST(value AS TEXT) AS value", "value");
            assert_eq!(*my, normalized);
            assert!(!my.contains("CAST"));
        }
    }

    #[test]
    fn test_observation_queries_sort_newest_first() {
        let queries = ObservationQueries::for_dialect(Dialect::MySql);

        for sql in [&queries.by_series, &queries.by_channel, &queries.by_series_and_channel] {
            assert!(sql.ends_with("ORDER BY obs_date DESC, id DESC"), "{sql}");
        }
        assert!(
            queries
                .digest
                .ends_with("ORDER BY o.series_id ASC, o.obs_date DESC, o.id DESC")
        );
        assert!(queries.digest.contains("INNER JOIN fred_series s ON s.series_id = o.series_id"));
    }

    #[test]
    fn test_placeholder_counts() {
        let queries = ObservationQueries::for_dialect(Dialect::Sqlite);
        let placeholders = |sql: &str| sql.matches('?').count();

        assert_eq!(placeholders(FIND_SERIES), 1);
        assert_eq!(placeholders(&queries.by_series), 1);
        assert_eq!(placeholders(&queries.by_channel), 1);
        assert_eq!(placeholders(&queries.by_series_and_channel), 2);
        assert_eq!(placeholders(&queries.digest), 1);
    }
}
