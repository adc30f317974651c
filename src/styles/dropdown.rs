//! Navigation dropdown resolver.

use crate::config::schema::DesignStyle;

/// Fully-resolved dropdown style descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownStyle {
    /// Space-separated CSS class list
    pub classes: String,
    /// `border-radius` declaration
    pub border_radius: &'static str,
    /// `box-shadow` declaration
    pub box_shadow: &'static str,
    /// `background` declaration
    pub background: &'static str,
    /// `border` declaration
    pub border: &'static str,
}

/// Resolves the dropdown descriptor for a design style and scroll state.
///
/// Dropdowns over an unscrolled transparent header get a stronger shadow
/// so they separate from the hero behind them.
#[must_use]
pub fn resolve(design: DesignStyle, scrolled: bool) -> DropdownStyle {
    match design {
        DesignStyle::Angular => DropdownStyle {
            classes: dropdown_classes("dropdown--angular", scrolled),
            border_radius: "0",
            box_shadow: if scrolled {
                "4px 4px 0 rgba(0, 0, 0, 0.9)"
            } else {
                "6px 6px 0 rgba(0, 0, 0, 0.9)"
            },
            background: "#ffffff",
            border: "2px solid #111111",
        },
        DesignStyle::Rounded => DropdownStyle {
            classes: dropdown_classes("dropdown--rounded", scrolled),
            border_radius: "0.75rem",
            box_shadow: if scrolled {
                "0 8px 24px rgba(0, 0, 0, 0.1)"
            } else {
                "0 12px 32px rgba(0, 0, 0, 0.14)"
            },
            background: "#ffffff",
            border: "1px solid rgba(0, 0, 0, 0.06)",
        },
        DesignStyle::Modern => DropdownStyle {
            classes: dropdown_classes("dropdown--modern", scrolled),
            border_radius: "1rem",
            box_shadow: if scrolled {
                "0 16px 48px rgba(0, 0, 0, 0.14)"
            } else {
                "0 20px 56px rgba(0, 0, 0, 0.18)"
            },
            background: "rgba(255, 255, 255, 0.85)",
            border: "1px solid rgba(255, 255, 255, 0.5)",
        },
        DesignStyle::Klassik => DropdownStyle {
            classes: dropdown_classes("dropdown--klassik", scrolled),
            border_radius: "0.25rem",
            box_shadow: "0 2px 8px rgba(0, 0, 0, 0.12)",
            background: "#fdfbf7",
            border: "1px solid #d8d2c4",
        },
    }
}

fn dropdown_classes(base: &str, scrolled: bool) -> String {
    if scrolled {
        format!("nav-dropdown {base} is-scrolled")
    } else {
        format!("nav-dropdown {base}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_populated() {
        for design in [
            DesignStyle::Angular,
            DesignStyle::Rounded,
            DesignStyle::Modern,
            DesignStyle::Klassik,
        ] {
            for scrolled in [false, true] {
                let style = resolve(design, scrolled);
                assert!(!style.classes.is_empty());
                assert!(!style.border_radius.is_empty());
                assert!(!style.box_shadow.is_empty());
                assert!(!style.background.is_empty());
                assert!(!style.border.is_empty());
            }
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(
            resolve(DesignStyle::Modern, true),
            resolve(DesignStyle::Modern, true)
        );
    }

    #[test]
    fn test_angular_has_square_corners() {
        assert_eq!(resolve(DesignStyle::Angular, false).border_radius, "0");
    }

    #[test]
    fn test_unscrolled_shadow_is_stronger_for_rounded() {
        let top = resolve(DesignStyle::Rounded, false);
        let scrolled = resolve(DesignStyle::Rounded, true);
        assert_ne!(top.box_shadow, scrolled.box_shadow);
    }
}
