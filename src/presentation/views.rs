// Server-rendered HTML for the web channel series page
use crate::domain::observation::Observation;

/// Body returned instead of the page when a series has no web rows
pub const NO_WEB_DATA: &str = "No web data available.";

pub fn render_series_page(series_id: &str, rows: &[Observation]) -> String {
    let title = escape_html(series_id);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str("<table>\n<thead>\n<tr><th>Date</th><th>Frequency</th><th>Value</th><th>Unit</th></tr>\n</thead>\n<tbody>\n");

    for row in rows {
        let value = row
            .value
            .map(|v| v.normalize().to_string())
            .unwrap_or_else(|| "-".to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.obs_date,
            escape_html(&row.frequency),
            escape_html(&value),
            escape_html(&row.value_unit),
        ));
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
