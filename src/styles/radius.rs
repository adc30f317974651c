//! Border-radius tokens per design style.

use crate::config::schema::{DesignStyle, RadiusScale};

/// Radius tokens for the three element sizes the renderer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusTokens {
    /// Cards, sections, images
    pub container: &'static str,
    /// Buttons, inputs
    pub control: &'static str,
    /// Badges and chips
    pub badge: &'static str,
}

/// Resolves the radius tokens a design style implies.
#[must_use]
pub fn tokens(design: DesignStyle) -> RadiusTokens {
    match design {
        DesignStyle::Angular => RadiusTokens {
            container: "0",
            control: "0",
            badge: "0",
        },
        DesignStyle::Rounded => RadiusTokens {
            container: "1rem",
            control: "0.5rem",
            badge: "9999px",
        },
        DesignStyle::Modern => RadiusTokens {
            container: "1.5rem",
            control: "0.75rem",
            badge: "9999px",
        },
        DesignStyle::Klassik => RadiusTokens {
            container: "0.25rem",
            control: "0.25rem",
            badge: "0.25rem",
        },
    }
}

/// Resolves the tokens for an explicit radius override.
///
/// Used when `style.border_radius` is set; the design style no longer
/// decides in that case.
#[must_use]
pub fn tokens_for_scale(scale: RadiusScale) -> RadiusTokens {
    match scale {
        RadiusScale::None => RadiusTokens {
            container: "0",
            control: "0",
            badge: "0",
        },
        RadiusScale::Subtle => RadiusTokens {
            container: "0.25rem",
            control: "0.25rem",
            badge: "0.5rem",
        },
        RadiusScale::Medium => RadiusTokens {
            container: "0.75rem",
            control: "0.5rem",
            badge: "9999px",
        },
        RadiusScale::Large => RadiusTokens {
            container: "1.5rem",
            control: "1rem",
            badge: "9999px",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_is_square_everywhere() {
        let t = tokens(DesignStyle::Angular);
        assert_eq!(t.container, "0");
        assert_eq!(t.control, "0");
        assert_eq!(t.badge, "0");
    }

    #[test]
    fn test_modern_is_rounder_than_rounded() {
        let rounded = tokens(DesignStyle::Rounded);
        let modern = tokens(DesignStyle::Modern);
        assert_eq!(rounded.container, "1rem");
        assert_eq!(modern.container, "1.5rem");
    }

    #[test]
    fn test_scale_override_none_matches_angular() {
        assert_eq!(tokens_for_scale(RadiusScale::None), tokens(DesignStyle::Angular));
    }
}
