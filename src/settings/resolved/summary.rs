use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Effective configuration:");
    let _ = writeln!(out, "  Endpoint: {}", config.search.endpoint);
    let _ = writeln!(
        out,
        "  Country: {} ({})",
        config.search.country.code(),
        config.search.country.label()
    );
    let _ = writeln!(
        out,
        "  UI language: {} ({})",
        config.search.ui_lang.code(),
        config.search.ui_lang.label()
    );
    let _ = writeln!(out, "  Timeout: {}s", config.search.timeout.as_secs());
    let _ = writeln!(out, "  Summary limit: {}", config.display.summary_limit);
    let _ = writeln!(
        out,
        "  Snippet preview: {} chars",
        config.display.snippet_preview_chars
    );
    let _ = writeln!(out, "  Snippet limit: {}", config.display.snippet_limit);
    let _ = writeln!(out, "  History file: {}", config.history.path.display());
    let _ = writeln!(out, "  Persist history: {}", bool_to_word(config.history.persist));
    let _ = writeln!(
        out,
        "  Export target: {}",
        config.export.directory.join(&config.export.file_name).display()
    );
    if let Some(query) = &config.initial_query {
        let _ = writeln!(out, "  Initial query: {query}");
    }
    out
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
