//! Closed sets of region and interface-language codes offered by the selectors.
//!
//! Both are passed to the search service verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownCode {
    kind: &'static str,
    value: String,
    expected: String,
}

/// Region the search service should localise results for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[default]
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "BE")]
    Belgium,
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "FR")]
    France,
    #[serde(rename = "DE")]
    Germany,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::UnitedStates,
        Country::Belgium,
        Country::India,
        Country::France,
        Country::Germany,
    ];

    /// ISO-3166 code sent as the `country` parameter.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Country::UnitedStates => "US",
            Country::Belgium => "BE",
            Country::India => "IN",
            Country::France => "FR",
            Country::Germany => "DE",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::Belgium => "Belgium",
            Country::India => "India",
            Country::France => "France",
            Country::Germany => "Germany",
        }
    }

    /// The next option, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = UnknownCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|country| country.code() == value)
            .ok_or_else(|| UnknownCode {
                kind: "country",
                value: value.to_string(),
                expected: Self::ALL.map(Country::code).join(", "),
            })
    }
}

/// Language tag sent as the `ui_lang` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiLanguage {
    #[default]
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "fr-FR")]
    FrenchFr,
    #[serde(rename = "de-DE")]
    GermanDe,
    #[serde(rename = "in-US")]
    HindiIn,
    #[serde(rename = "es-ES")]
    SpanishEs,
}

impl UiLanguage {
    pub const ALL: [UiLanguage; 5] = [
        UiLanguage::EnglishUs,
        UiLanguage::FrenchFr,
        UiLanguage::GermanDe,
        UiLanguage::HindiIn,
        UiLanguage::SpanishEs,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            UiLanguage::EnglishUs => "en-US",
            UiLanguage::FrenchFr => "fr-FR",
            UiLanguage::GermanDe => "de-DE",
            // The service keys Hindi on this tag.
            UiLanguage::HindiIn => "in-US",
            UiLanguage::SpanishEs => "es-ES",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UiLanguage::EnglishUs => "English (US)",
            UiLanguage::FrenchFr => "French (FR)",
            UiLanguage::GermanDe => "German (DE)",
            UiLanguage::HindiIn => "Hindi (IN)",
            UiLanguage::SpanishEs => "Spanish (ES)",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UiLanguage {
    type Err = UnknownCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == value)
            .ok_or_else(|| UnknownCode {
                kind: "UI language",
                value: value.to_string(),
                expected: Self::ALL.map(UiLanguage::code).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back() {
        for country in Country::ALL {
            assert_eq!(country.code().parse::<Country>(), Ok(country));
        }
        for language in UiLanguage::ALL {
            assert_eq!(language.code().parse::<UiLanguage>(), Ok(language));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let err = "us".parse::<Country>().unwrap_err();
        assert!(err.to_string().contains("US, BE, IN, FR, DE"));
        assert!("en-GB".parse::<UiLanguage>().is_err());
    }

    #[test]
    fn next_cycles_through_every_option() {
        let mut country = Country::default();
        for _ in 0..Country::ALL.len() {
            country = country.next();
        }
        assert_eq!(country, Country::default());
        assert_eq!(UiLanguage::SpanishEs.next(), UiLanguage::EnglishUs);
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&(Country::India, UiLanguage::HindiIn)).unwrap();
        assert_eq!(json, r#"["IN","in-US"]"#);
    }
}
