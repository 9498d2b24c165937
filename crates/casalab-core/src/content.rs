//! Hardcoded marketing copy and static card content.
//!
//! Lookups are keyed by [`Language`] and matched exhaustively, so a
//! missing translation is a compile error rather than a silent blank.
//! [`validate`] re-checks the one property the type system cannot see —
//! that no authored field is empty.

use crate::error::ContentError;
use crate::lang::Language;
use crate::palette;

/// Default text shown in the typography live tester.
pub const DEFAULT_DEMO_TEXT: &str = "The Art of Slow Living";

// ── Brand essence ───────────────────────────────────────────────────

/// Copy for the Brand Essence section, one instance per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EssenceCopy {
    pub headline: &'static str,
    pub subhead: &'static str,
    pub guest_title: &'static str,
    pub guest_body: &'static str,
    pub owner_title: &'static str,
    pub owner_body: &'static str,
    pub manifesto_title: &'static str,
    pub manifesto: &'static str,
}

static ESSENCE_ENGLISH: EssenceCopy = EssenceCopy {
    headline: "The Art of Slow Living",
    subhead: "More than a stay—a feeling of coming home.",
    guest_title: "Your Private Sanctuary",
    guest_body: "We don't just hand over keys; we welcome you to a home prepared \
        with love. It is about the luxury of silence, the warmth of the sun, and \
        the joy of being together.",
    owner_title: "Trusted Guardians",
    owner_body: "We treat your home as our own. With personal care and attention \
        to every detail, we ensure your piece of paradise is cherished and \
        protected.",
    manifesto_title: "The Casa Bonita Manifesto",
    manifesto: "\"We believe true luxury is the absence of worry. It is the sound \
        of the wind in the olive trees and the warmth of a shared meal. We are \
        here to make every moment count.\"",
};

static ESSENCE_GERMAN: EssenceCopy = EssenceCopy {
    headline: "Die Kunst des Slow Living",
    subhead: "Mehr als ein Aufenthalt – ein Gefühl von Zuhause.",
    guest_title: "Ihr Privates Rückzugsgebiet",
    guest_body: "Wir übergeben nicht nur Schlüssel, wir heißen Sie herzlich \
        willkommen. Genießen Sie die Stille, die Sonne und die kostbare Zeit \
        mit Ihren Liebsten.",
    owner_title: "Vertrauensvolle Hände",
    owner_body: "Wir kümmern uns um Ihr Haus, als wäre es unser eigenes. Mit \
        Sorgfalt und Liebe zum Detail sorgen wir dafür, dass Ihr Paradies \
        geschützt und geschätzt wird.",
    manifesto_title: "Das Casa Bonita Manifest",
    manifesto: "\"Wir glauben, dass wahrer Luxus die Abwesenheit von Sorgen ist. \
        Es ist das Rauschen des Windes in den Olivenbäumen und die Wärme eines \
        gemeinsamen Essens. Wir sind da, um jeden Moment unvergesslich zu \
        machen.\"",
};

static ESSENCE_SPANISH: EssenceCopy = EssenceCopy {
    headline: "El Arte del Slow Living",
    subhead: "Más que una estancia, una vuelta a los orígenes.",
    guest_title: "Su Santuario Privado",
    guest_body: "No solo entregamos llaves; le damos la bienvenida a un hogar \
        preparado con cariño. Es el lujo del silencio, la calidez del sol y la \
        alegría de compartir.",
    owner_title: "Guardianes de Confianza",
    owner_body: "Cuidamos su casa como si fuera la nuestra. Con atención \
        personal y cariño por cada detalle, aseguramos que su paraíso sea \
        respetado y protegido.",
    manifesto_title: "El Manifiesto Casa Bonita",
    manifesto: "\"Creemos que el verdadero lujo es la ausencia de preocupaciones. \
        Es el sonido del viento en los olivos y la calidez de una comida \
        compartida. Estamos aquí para que cada momento cuente.\"",
};

pub fn essence(lang: Language) -> &'static EssenceCopy {
    match lang {
        Language::English => &ESSENCE_ENGLISH,
        Language::German => &ESSENCE_GERMAN,
        Language::Spanish => &ESSENCE_SPANISH,
    }
}

// ── Tone of voice ───────────────────────────────────────────────────

/// Sample campaign copy for the Tone of Voice section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceCopy {
    pub headline: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
}

static VOICE_ENGLISH: VoiceCopy = VoiceCopy {
    headline: "Escape to the untamed beauty of Santanyí.",
    body: "We don't just hand over keys; we welcome you home. A return to the \
        rhythm of the sun and the sea.",
    cta: "Begin your journey",
};

static VOICE_GERMAN: VoiceCopy = VoiceCopy {
    headline: "Exklusive Fincas, persönlich betreut.",
    body: "Wir übergeben nicht einfach Schlüssel; wir heißen Sie zu Hause \
        willkommen. Eine Rückkehr zum Rhythmus von Sonne und Meer.",
    cta: "Ihre Reise beginnen",
};

static VOICE_SPANISH: VoiceCopy = VoiceCopy {
    headline: "La auténtica esencia de Mallorca.",
    body: "No solo entregamos llaves; le damos la bienvenida a casa. Un retorno \
        al ritmo del sol y el mar.",
    cta: "Comience su viaje",
};

pub fn voice(lang: Language) -> &'static VoiceCopy {
    match lang {
        Language::English => &VOICE_ENGLISH,
        Language::German => &VOICE_GERMAN,
        Language::Spanish => &VOICE_SPANISH,
    }
}

// ── Sensory identity ────────────────────────────────────────────────

/// One card of the sensory architecture grid (scent, sound, touch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensoryCard {
    pub title: &'static str,
    pub tagline: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
    /// Accent color of the card's top border and glyph.
    pub accent_hex: &'static str,
}

pub const SENSORY_CARDS: &[SensoryCard] = &[
    SensoryCard {
        title: "Olfactive Logo",
        tagline: "Wild Fig & Dry Stone",
        body: "A bespoke scent developed to greet guests upon entry. Notes of green fig \
            leaf, warmed limestone, and a hint of sea salt. It anchors the memory of \
            the home.",
        icon: "wind",
        accent_hex: "#D4AF37",
    },
    SensoryCard {
        title: "Sonic Branding",
        tagline: "Binaural Silence",
        body: "Our digital presence uses \"Silence\" as a texture. UI sounds are muted, \
            deep, and organic (wood clicks), creating a sense of weight and calm.",
        icon: "mic",
        accent_hex: "#1C1C1C",
    },
    SensoryCard {
        title: "Tactile Palette",
        tagline: "Raw Linen & Honed Slate",
        body: "We prioritize uncoated papers for stationery and natural fabrics in the \
            homes. Luxury is defined by the texture of the materials we touch.",
        icon: "hexagon",
        accent_hex: "#6B705C",
    },
];

// ── Typography ──────────────────────────────────────────────────────

/// One row of the type-specimen table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpecimen {
    pub role: &'static str,
    pub family: &'static str,
    /// CSS class that renders the specimen in its family.
    pub css_class: &'static str,
    pub remit: &'static str,
}

pub const TYPE_SPECIMENS: &[TypeSpecimen] = &[
    TypeSpecimen {
        role: "Display",
        family: "Cinzel Regular",
        css_class: "font-cinzel",
        remit: "Headlines Only",
    },
    TypeSpecimen {
        role: "Nuance",
        family: "Cormorant Garamond",
        css_class: "font-cormorant",
        remit: "Subheads & Quotes",
    },
    TypeSpecimen {
        role: "Body",
        family: "Montserrat Light",
        css_class: "font-montserrat",
        remit: "UI & Paragraphs",
    },
];

/// Body shown for the Montserrat specimen row.
pub const BODY_SPECIMEN_TEXT: &str = "Montserrat Light is used for all functional text. \
    It ensures clarity and modern readability, balancing the historic weight of the \
    display fonts.";

// ── Digital experience chapters ─────────────────────────────────────

/// Intro copy for one numbered chapter of the Digital Experience tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectChapter {
    pub number: &'static str,
    pub kicker: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const EFFECT_CHAPTERS: &[EffectChapter] = &[
    EffectChapter {
        number: "01",
        kicker: "The Entrance",
        title: "Cinematic Focus",
        body: "Standard websites just \"load\". Casa Bonita websites \"awaken\". We use \
            a blur-to-clear transition that mimics the human eye focusing on a \
            beautiful object.",
    },
    EffectChapter {
        number: "02",
        kicker: "The Touch",
        title: "Responsive Physics",
        body: "Desktop buttons magnetically pull towards your cursor, creating a sense \
            of gravity. On mobile they shrink and glow under your thumb, mimicking the \
            resistance of a physical premium switch.",
    },
    EffectChapter {
        number: "03",
        kicker: "The Depth",
        title: "Parallax Layers",
        body: "We create depth by separating the image from the text. As you scroll (or \
            hover), the layers move at different speeds, creating a 3D window into the \
            property.",
    },
    EffectChapter {
        number: "04",
        kicker: "The Narrative",
        title: "Scroll-Triggered Pacing",
        body: "We control the flow of time. By revealing the \"Golden Thread\" and \
            staggering the text only when the user scrolls, we force a moment of pause \
            and reflection.",
    },
    EffectChapter {
        number: "05",
        kicker: "The Discovery",
        title: "Interactive Spotlight",
        body: "True luxury is often hidden. This effect uses curiosity to reveal \
            content.",
    },
];

// ── Validation ──────────────────────────────────────────────────────

/// Check every authored field is non-empty and every palette hex parses.
///
/// The catalog is compile-time data, so a failure here is an authoring
/// defect caught by tests and the mount-time tripwire, not a runtime path.
pub fn validate() -> Result<(), ContentError> {
    for &lang in Language::ALL {
        let e = essence(lang);
        for (field, value) in [
            ("headline", e.headline),
            ("subhead", e.subhead),
            ("guest_title", e.guest_title),
            ("guest_body", e.guest_body),
            ("owner_title", e.owner_title),
            ("owner_body", e.owner_body),
            ("manifesto_title", e.manifesto_title),
            ("manifesto", e.manifesto),
        ] {
            check_field("essence", field, value, lang)?;
        }

        let v = voice(lang);
        for (field, value) in [("headline", v.headline), ("body", v.body), ("cta", v.cta)] {
            check_field("voice", field, value, lang)?;
        }
    }

    for color in palette::PALETTE {
        if !palette::is_valid_hex(color.hex) {
            return Err(ContentError::InvalidHex {
                name: color.name,
                hex: color.hex,
            });
        }
    }

    tracing::debug!(
        languages = Language::ALL.len(),
        palette = palette::PALETTE.len(),
        "content catalog validated"
    );
    Ok(())
}

fn check_field(
    section: &'static str,
    field: &'static str,
    value: &str,
    lang: Language,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            section,
            field,
            lang,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_validates() {
        validate().unwrap();
    }

    #[test]
    fn every_language_has_full_essence_copy() {
        for &lang in Language::ALL {
            let e = essence(lang);
            assert!(!e.headline.is_empty(), "{lang:?} headline");
            assert!(!e.manifesto.is_empty(), "{lang:?} manifesto");
            assert!(!e.guest_body.is_empty(), "{lang:?} guest_body");
            assert!(!e.owner_body.is_empty(), "{lang:?} owner_body");
        }
    }

    #[test]
    fn every_language_has_full_voice_copy() {
        for &lang in Language::ALL {
            let v = voice(lang);
            assert!(!v.headline.is_empty());
            assert!(!v.body.is_empty());
            assert!(!v.cta.is_empty());
        }
    }

    #[test]
    fn languages_localize_distinctly() {
        assert_ne!(
            essence(Language::English).headline,
            essence(Language::German).headline
        );
        assert_ne!(voice(Language::German).cta, voice(Language::Spanish).cta);
    }

    #[test]
    fn static_tables_populated() {
        assert_eq!(SENSORY_CARDS.len(), 3);
        assert_eq!(TYPE_SPECIMENS.len(), 3);
        assert_eq!(EFFECT_CHAPTERS.len(), 5);
        assert!(!DEFAULT_DEMO_TEXT.is_empty());
    }
}
