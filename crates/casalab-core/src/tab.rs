//! The fixed set of style-guide sections.

use serde::{Deserialize, Serialize};

/// Which section of the guide is currently displayed.
///
/// Exactly one tab is active at a time; the renderer matches on this
/// exhaustively, so adding a variant without a screen is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Essence,
    Logos,
    Typography,
    Palette,
    Sensory,
    Voice,
    Digital,
}

impl Tab {
    /// Sidebar order, top to bottom.
    pub const ALL: &[Tab] = &[
        Self::Essence,
        Self::Logos,
        Self::Typography,
        Self::Palette,
        Self::Sensory,
        Self::Voice,
        Self::Digital,
    ];

    /// Stable lowercase id.
    pub fn key(self) -> &'static str {
        match self {
            Self::Essence => "essence",
            Self::Logos => "logos",
            Self::Typography => "typography",
            Self::Palette => "palette",
            Self::Sensory => "sensory",
            Self::Voice => "voice",
            Self::Digital => "digital",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Essence => "Brand Essence",
            Self::Logos => "Identity System",
            Self::Typography => "Typography",
            Self::Palette => "Color Palette",
            Self::Sensory => "Sensory Identity",
            Self::Voice => "Tone of Voice",
            Self::Digital => "Digital Experience",
        }
    }

    /// Name of the sidebar glyph for this section.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Essence => "anchor",
            Self::Logos => "layout",
            Self::Typography => "type",
            Self::Palette => "palette",
            Self::Sensory => "wind",
            Self::Voice => "globe",
            Self::Digital => "sparkles",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        for &tab in Tab::ALL {
            assert_eq!(Tab::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn seven_sections_essence_first() {
        assert_eq!(Tab::ALL.len(), 7);
        assert_eq!(Tab::ALL[0], Tab::Essence);
        assert_eq!(Tab::default(), Tab::Essence);
    }

    #[test]
    fn labels_non_empty() {
        for &tab in Tab::ALL {
            assert!(!tab.label().is_empty());
            assert!(!tab.icon().is_empty());
        }
    }
}
