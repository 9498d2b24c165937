//! The Casa Bonita color system.
//!
//! Five print-and-digital colors in display order. The first entry is the
//! primary gold and receives the shimmer ("shine") treatment in the
//! palette screen.

use serde::Serialize;

/// One entry of the brand palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    /// `#RRGGBB`, uppercase.
    pub hex: &'static str,
    /// CSS gradient override for the swatch; falls back to `hex`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<&'static str>,
    pub usage: &'static str,
    pub cmyk: &'static str,
}

impl PaletteColor {
    /// Background used for the swatch block.
    pub fn swatch_background(&self) -> &'static str {
        self.gradient.unwrap_or(self.hex)
    }
}

/// Display order is the on-page order.
pub const PALETTE: &[PaletteColor] = &[
    PaletteColor {
        name: "Gilded Horizon",
        hex: "#D4AF37",
        gradient: Some("linear-gradient(135deg, #D4AF37 0%, #C5A059 50%, #B08D55 100%)"),
        usage: "Primary Brand Mark, Foil Stamping",
        cmyk: "20, 35, 80, 0",
    },
    PaletteColor {
        name: "Obsidian Slate",
        hex: "#1C1C1C",
        gradient: None,
        usage: "Headings, High Contrast Text",
        cmyk: "70, 60, 50, 90",
    },
    PaletteColor {
        name: "Ancient Olive",
        hex: "#6B705C",
        gradient: None,
        usage: "Subtle Accents, Digital UI Elements",
        cmyk: "50, 40, 70, 20",
    },
    PaletteColor {
        name: "Alabaster",
        hex: "#F2F0E9",
        gradient: None,
        usage: "Canvas Background, Stationery",
        cmyk: "3, 2, 6, 0",
    },
    PaletteColor {
        name: "Warm Taupe",
        hex: "#A89F91",
        gradient: None,
        usage: "Secondary Text, Dividers",
        cmyk: "30, 30, 40, 0",
    },
];

/// Whether `s` is a `#` followed by exactly six hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// The palette as pretty-printed JSON, for the Download Assets action.
pub fn tokens_json() -> String {
    // A const slice of Serialize records cannot fail to serialize.
    serde_json::to_string_pretty(PALETTE).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_hex_codes_valid() {
        for color in PALETTE {
            assert!(is_valid_hex(color.hex), "bad hex for {}", color.name);
        }
    }

    #[test]
    fn gold_leads_the_palette() {
        assert_eq!(PALETTE[0].name, "Gilded Horizon");
        assert_eq!(PALETTE[0].hex, "#D4AF37");
        assert!(PALETTE[0].gradient.is_some());
    }

    #[test]
    fn swatch_background_prefers_gradient() {
        assert!(PALETTE[0].swatch_background().starts_with("linear-gradient"));
        assert_eq!(PALETTE[1].swatch_background(), "#1C1C1C");
    }

    #[test]
    fn hex_validation_edges() {
        assert!(is_valid_hex("#D4AF37"));
        assert!(!is_valid_hex("D4AF37"));
        assert!(!is_valid_hex("#D4AF3"));
        assert!(!is_valid_hex("#D4AF377"));
        assert!(!is_valid_hex("#GGGGGG"));
    }

    #[test]
    fn tokens_json_parses_back() {
        let json = tokens_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(PALETTE.len()));
        assert_eq!(value[0]["hex"], "#D4AF37");
    }
}
