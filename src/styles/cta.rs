//! Call-to-action treatment per design style.

use crate::config::schema::DesignStyle;

/// Text casing applied to CTA labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCasing {
    /// Text rendered as written
    Normal,
    /// `text-transform: uppercase`
    Uppercase,
}

impl TextCasing {
    /// The CSS `text-transform` value for this casing.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Normal => "none",
            Self::Uppercase => "uppercase",
        }
    }
}

/// Fully-resolved CTA button descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaStyle {
    /// Space-separated CSS class list
    pub classes: String,
    /// Label casing
    pub casing: TextCasing,
    /// `font-weight` declaration
    pub font_weight: &'static str,
    /// `letter-spacing` declaration
    pub letter_spacing: &'static str,
    /// `border-radius` declaration
    pub border_radius: &'static str,
}

/// Resolves the CTA descriptor for a design style.
#[must_use]
pub fn resolve(design: DesignStyle) -> CtaStyle {
    match design {
        DesignStyle::Angular => CtaStyle {
            classes: "cta cta--angular".to_string(),
            casing: TextCasing::Uppercase,
            font_weight: "700",
            letter_spacing: "0.05em",
            border_radius: "0",
        },
        DesignStyle::Rounded => CtaStyle {
            classes: "cta cta--rounded".to_string(),
            casing: TextCasing::Normal,
            font_weight: "600",
            letter_spacing: "normal",
            border_radius: "0.5rem",
        },
        DesignStyle::Modern => CtaStyle {
            classes: "cta cta--modern".to_string(),
            casing: TextCasing::Normal,
            font_weight: "600",
            letter_spacing: "normal",
            border_radius: "9999px",
        },
        DesignStyle::Klassik => CtaStyle {
            classes: "cta cta--klassik".to_string(),
            casing: TextCasing::Normal,
            font_weight: "500",
            letter_spacing: "0.02em",
            border_radius: "0.25rem",
        },
    }
}
