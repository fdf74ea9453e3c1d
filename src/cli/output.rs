use std::fmt::Write;

use anyhow::Result;
use chrono::Local;
use scour::history::HistoryEntry;
use serde_json::json;

use super::OutputFormat;
use crate::workflow::BatchOutcome;

/// Print a finished batch search in the chosen format.
pub(crate) fn print_outcome(outcome: &BatchOutcome, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Plain => format_outcome_plain(outcome),
        OutputFormat::Json => format_outcome_json(outcome)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}

/// Print the stored recent searches in the chosen format.
pub(crate) fn print_history(entries: &[HistoryEntry], format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Plain => format_history_plain(entries),
        OutputFormat::Json => serde_json::to_string_pretty(entries)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}

pub(crate) fn format_outcome_plain(outcome: &BatchOutcome) -> String {
    let mut out = String::new();
    if let Some(error) = &outcome.error {
        let _ = writeln!(out, "{error}");
        return out;
    }

    let state = &outcome.state;
    if !state.combined_summary().is_empty() {
        let _ = writeln!(out, "Combined Summary");
        let _ = writeln!(out, "{}", state.combined_summary());
        if let Some(top) = state.top_result() {
            let _ = writeln!(out, "{}", top.url);
        }
        let _ = writeln!(out);
    }

    if state.results().is_empty() {
        let _ = writeln!(out, "No results for '{}'", outcome.query);
    }
    for (index, result) in state.results().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, result.title);
        if !result.description.is_empty() {
            let _ = writeln!(out, "   {}", result.description);
        }
        let _ = writeln!(out, "   {}", result.url);
    }
    out
}

pub(crate) fn format_outcome_json(outcome: &BatchOutcome) -> Result<String> {
    let payload = json!({
        "query": outcome.query,
        "ok": outcome.error.is_none(),
        "error": outcome.error,
        "combined_summary": outcome.state.combined_summary(),
        "results": outcome.state.results(),
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

fn format_history_plain(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No recent searches\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let time = entry.time.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        let _ = write!(out, "{time}  {}", entry.query);
        if !entry.top_result_title.is_empty() {
            let _ = write!(out, "  ({})", entry.top_result_title);
        }
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use scour::session::SessionState;
    use serde_json::Value;

    use super::*;

    fn failed(query: &str) -> BatchOutcome {
        BatchOutcome {
            query: query.into(),
            state: SessionState::default(),
            error: Some("Search failed: service returned HTTP 502 Bad Gateway".into()),
        }
    }

    #[test]
    fn json_format_reports_failures() {
        let json = format_outcome_json(&failed("climate")).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["query"], "climate");
        assert_eq!(value["ok"], false);
        assert!(value["results"].as_array().unwrap().is_empty());
    }

    #[test]
    fn plain_format_reports_failures() {
        let text = format_outcome_plain(&failed("climate"));
        assert!(text.starts_with("Search failed:"));
    }

    #[test]
    fn plain_history_lists_queries_and_titles() {
        let time = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let entries = vec![
            HistoryEntry::new("climate policy", time, "Carbon markets"),
            HistoryEntry::new("solar", time, ""),
        ];
        let text = format_history_plain(&entries);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("climate policy  (Carbon markets)"));
        assert!(lines[1].ends_with("solar"));
        assert_eq!(format_history_plain(&[]), "No recent searches\n");
    }
}
