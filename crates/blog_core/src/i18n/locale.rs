//! Supported interface locales.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Interface language. Stored as its two-letter code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Two-letter code persisted under the locale key.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// The other locale; what the language toggle switches to.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ru,
            Self::Ru => Self::En,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Locale code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl Display for UnknownLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported locale `{}`; expected en|ru", self.0)
    }
}

impl Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Self::En),
            "ru" | "ru-ru" => Ok(Self::Ru),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(" RU ".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn toggle_is_an_involution() {
        for locale in Locale::ALL {
            assert_eq!(locale.toggled().toggled(), locale);
        }
    }
}
