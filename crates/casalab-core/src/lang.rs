//! Supported interface languages.

use serde::{Deserialize, Serialize};

/// Language of the localized brand copy.
///
/// The essence and voice sections are authored in all three; selecting a
/// language swaps both sections at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
    Spanish,
}

impl Language {
    /// Display order in the language switcher.
    pub const ALL: &[Language] = &[Self::English, Self::German, Self::Spanish];

    /// Stable lowercase key, as used in CSS class names and the switcher.
    pub fn key(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::German => "german",
            Self::Spanish => "spanish",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "english" => Some(Self::English),
            "german" => Some(Self::German),
            "spanish" => Some(Self::Spanish),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        for &lang in Language::ALL {
            assert_eq!(Language::from_key(lang.key()), Some(lang));
        }
    }

    #[test]
    fn unknown_key_rejected() {
        assert_eq!(Language::from_key("french"), None);
        assert_eq!(Language::from_key(""), None);
    }

    #[test]
    fn english_is_default() {
        assert_eq!(Language::default(), Language::English);
    }
}
