//! Color scheme resolver.
//!
//! Maps `(scheme, dark_mode)` to the concrete hex values the renderer
//! writes as CSS custom properties. Brand colors stay stable across modes;
//! surfaces and text invert.

use crate::config::schema::ColorScheme;

/// Fully-resolved palette for one scheme and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemePalette {
    /// Primary brand color
    pub primary: &'static str,
    /// Secondary brand color
    pub secondary: &'static str,
    /// Accent color for highlights and CTAs
    pub accent: &'static str,
    /// Page background
    pub background: &'static str,
    /// Card and panel surface
    pub surface: &'static str,
    /// Body text
    pub text: &'static str,
    /// De-emphasized text
    pub muted: &'static str,
}

/// Resolves the palette for a color scheme.
#[must_use]
pub fn resolve(scheme: ColorScheme, dark_mode: bool) -> SchemePalette {
    match (scheme, dark_mode) {
        (ColorScheme::Warm, false) => SchemePalette {
            primary: "#b45309",
            secondary: "#92400e",
            accent: "#f59e0b",
            background: "#fffbf5",
            surface: "#ffffff",
            text: "#1c1917",
            muted: "#78716c",
        },
        (ColorScheme::Warm, true) => SchemePalette {
            primary: "#f59e0b",
            secondary: "#fbbf24",
            accent: "#fb923c",
            background: "#1c1917",
            surface: "#292524",
            text: "#fafaf9",
            muted: "#a8a29e",
        },
        (ColorScheme::Modern, false) => SchemePalette {
            primary: "#1d4ed8",
            secondary: "#1e40af",
            accent: "#38bdf8",
            background: "#f8fafc",
            surface: "#ffffff",
            text: "#0f172a",
            muted: "#64748b",
        },
        (ColorScheme::Modern, true) => SchemePalette {
            primary: "#60a5fa",
            secondary: "#3b82f6",
            accent: "#38bdf8",
            background: "#0f172a",
            surface: "#1e293b",
            text: "#f1f5f9",
            muted: "#94a3b8",
        },
        (ColorScheme::Elegant, false) => SchemePalette {
            primary: "#1f2937",
            secondary: "#374151",
            accent: "#ca8a04",
            background: "#fafaf9",
            surface: "#ffffff",
            text: "#111827",
            muted: "#6b7280",
        },
        (ColorScheme::Elegant, true) => SchemePalette {
            primary: "#e5e7eb",
            secondary: "#d1d5db",
            accent: "#eab308",
            background: "#111827",
            surface: "#1f2937",
            text: "#f9fafb",
            muted: "#9ca3af",
        },
        (ColorScheme::Nature, false) => SchemePalette {
            primary: "#15803d",
            secondary: "#166534",
            accent: "#84cc16",
            background: "#f7fdf7",
            surface: "#ffffff",
            text: "#14532d",
            muted: "#57736a",
        },
        (ColorScheme::Nature, true) => SchemePalette {
            primary: "#4ade80",
            secondary: "#22c55e",
            accent: "#a3e635",
            background: "#052e16",
            surface: "#14532d",
            text: "#f0fdf4",
            muted: "#86efac",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_schemes() -> [ColorScheme; 4] {
        [
            ColorScheme::Warm,
            ColorScheme::Modern,
            ColorScheme::Elegant,
            ColorScheme::Nature,
        ]
    }

    #[test]
    fn test_all_palettes_are_complete_hex() {
        for scheme in all_schemes() {
            for dark in [false, true] {
                let palette = resolve(scheme, dark);
                for value in [
                    palette.primary,
                    palette.secondary,
                    palette.accent,
                    palette.background,
                    palette.surface,
                    palette.text,
                    palette.muted,
                ] {
                    assert!(value.starts_with('#'), "{scheme:?}/{dark}: {value}");
                    assert_eq!(value.len(), 7, "{scheme:?}/{dark}: {value}");
                }
            }
        }
    }

    #[test]
    fn test_dark_mode_inverts_surfaces() {
        for scheme in all_schemes() {
            let light = resolve(scheme, false);
            let dark = resolve(scheme, true);
            assert_ne!(light.background, dark.background);
            assert_ne!(light.text, dark.text);
        }
    }

    #[test]
    fn test_schemes_are_distinct() {
        let warm = resolve(ColorScheme::Warm, false);
        let nature = resolve(ColorScheme::Nature, false);
        assert_ne!(warm.primary, nature.primary);
    }
}
