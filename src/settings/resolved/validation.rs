use std::num::NonZeroUsize;

use reqwest::Url;
use scour::session::{Country, UiLanguage};

use super::{ConfigError, SettingSource};

/// The service base URL must be absolute http(s).
pub(crate) fn endpoint(value: &str, origin: SettingSource) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|err| ConfigError::invalid("search.endpoint", value, origin.clone(), err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim_end_matches('/').to_string()),
        scheme => Err(ConfigError::invalid(
            "search.endpoint",
            value,
            origin,
            format!("unsupported scheme `{scheme}`, expected http or https"),
        )),
    }
}

pub(crate) fn country(value: &str, origin: SettingSource) -> Result<Country, ConfigError> {
    value
        .parse()
        .map_err(|err: scour::session::UnknownCode| {
            ConfigError::invalid("search.country", value, origin, err.to_string())
        })
}

pub(crate) fn ui_lang(value: &str, origin: SettingSource) -> Result<UiLanguage, ConfigError> {
    value
        .parse()
        .map_err(|err: scour::session::UnknownCode| {
            ConfigError::invalid("search.ui_lang", value, origin, err.to_string())
        })
}

pub(crate) fn limit(
    key: &'static str,
    value: usize,
    origin: SettingSource,
) -> Result<NonZeroUsize, ConfigError> {
    NonZeroUsize::new(value)
        .ok_or_else(|| ConfigError::invalid(key, value.to_string(), origin, "must be greater than zero"))
}

pub(crate) fn positive(key: &'static str, value: u64, origin: SettingSource) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::invalid(
            key,
            value.to_string(),
            origin,
            "must be greater than zero",
        ));
    }
    Ok(value)
}

/// Export targets are plain file names inside the export directory.
pub(crate) fn file_name(value: &str, origin: SettingSource) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::invalid(
            "export.file_name",
            value,
            origin,
            "must not be empty",
        ));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(ConfigError::invalid(
            "export.file_name",
            value,
            origin,
            "must not contain path separators",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_rejects_non_http_schemes() {
        let err = endpoint("ftp://example.com", SettingSource::CliFlag("--endpoint")).unwrap_err();
        assert_eq!(err.key, "search.endpoint");
        let message = err.to_string();
        assert!(message.contains("value: ftp://example.com"));
        assert!(message.contains("CLI flag"));

        assert!(endpoint("not a url", SettingSource::ConfigKey("search.endpoint")).is_err());
    }

    #[test]
    fn endpoint_drops_trailing_slash() {
        let value = endpoint("https://search.example.com/", SettingSource::ConfigKey("k")).unwrap();
        assert_eq!(value, "https://search.example.com");
    }

    #[test]
    fn validation_rejects_zero_limits() {
        let source = SettingSource::Environment("SCOUR__DISPLAY__SNIPPET_LIMIT");
        let err = limit("display.snippet_limit", 0, source).unwrap_err();
        assert_eq!(err.key, "display.snippet_limit");
        let message = err.to_string();
        assert!(message.contains("value: 0"));
        assert!(message.contains("environment variable"));
    }

    #[test]
    fn selectors_accept_only_offered_codes() {
        let source = SettingSource::ConfigKey("search.country");
        assert_eq!(country("BE", source.clone()).unwrap(), Country::Belgium);
        assert!(country("be", source.clone()).is_err());
        assert_eq!(
            ui_lang("in-US", source.clone()).unwrap(),
            UiLanguage::HindiIn
        );
        assert!(ui_lang("en-GB", source).is_err());
    }

    #[test]
    fn file_name_must_be_a_bare_name() {
        let source = SettingSource::ConfigKey("export.file_name");
        assert!(file_name("../escape.txt", source.clone()).is_err());
        assert!(file_name("  ", source.clone()).is_err());
        assert_eq!(file_name(" out.txt ", source).unwrap(), "out.txt");
    }
}
