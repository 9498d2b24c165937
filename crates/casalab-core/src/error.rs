use thiserror::Error;

use crate::lang::Language;

/// Authoring defects in the static content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("empty {section} field `{field}` for language {lang:?}")]
    EmptyField {
        section: &'static str,
        field: &'static str,
        lang: Language,
    },

    #[error("invalid hex code `{hex}` for palette color {name}")]
    InvalidHex {
        name: &'static str,
        hex: &'static str,
    },
}
