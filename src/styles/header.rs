//! Header chrome resolver.
//!
//! Maps `(design, scrolled, visible)` to the class list and inline
//! declarations the header renders with. Several header variants call this
//! independently, so the mapping must be deterministic and every field of
//! the descriptor is always populated.

use crate::config::schema::DesignStyle;

/// Fully-resolved header style descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStyle {
    /// Space-separated CSS class list
    pub classes: String,
    /// `background` declaration
    pub background: &'static str,
    /// `backdrop-filter` declaration
    pub backdrop_filter: &'static str,
    /// `box-shadow` declaration
    pub box_shadow: &'static str,
    /// `border-bottom` declaration
    pub border_bottom: &'static str,
    /// `border-radius` declaration
    pub border_radius: &'static str,
    /// `transform` declaration (drives hide-on-scroll)
    pub transform: &'static str,
    /// `transition` declaration
    pub transition: &'static str,
}

/// Resolves the header descriptor for a design style and scroll state.
///
/// A hidden header always translates out of view regardless of design;
/// everything else varies per design and per scroll position.
#[must_use]
pub fn resolve(design: DesignStyle, scrolled: bool, visible: bool) -> HeaderStyle {
    let transform = if visible {
        "translateY(0)"
    } else {
        "translateY(-100%)"
    };

    match design {
        DesignStyle::Angular => HeaderStyle {
            classes: header_classes("header--angular", scrolled, visible),
            background: if scrolled { "#ffffff" } else { "transparent" },
            backdrop_filter: "none",
            box_shadow: if scrolled {
                "0 2px 0 rgba(0, 0, 0, 0.9)"
            } else {
                "none"
            },
            border_bottom: if scrolled { "2px solid #111111" } else { "none" },
            border_radius: "0",
            transform,
            transition: "transform 0.2s ease, background 0.2s ease",
        },
        DesignStyle::Rounded => HeaderStyle {
            classes: header_classes("header--rounded", scrolled, visible),
            background: if scrolled {
                "rgba(255, 255, 255, 0.97)"
            } else {
                "transparent"
            },
            backdrop_filter: "none",
            box_shadow: if scrolled {
                "0 4px 16px rgba(0, 0, 0, 0.08)"
            } else {
                "none"
            },
            border_bottom: "none",
            border_radius: "0 0 1rem 1rem",
            transform,
            transition: "transform 0.3s ease, box-shadow 0.3s ease",
        },
        DesignStyle::Modern => HeaderStyle {
            classes: header_classes("header--modern", scrolled, visible),
            background: if scrolled {
                "rgba(255, 255, 255, 0.72)"
            } else {
                "rgba(255, 255, 255, 0.25)"
            },
            backdrop_filter: "blur(14px) saturate(160%)",
            box_shadow: if scrolled {
                "0 8px 32px rgba(0, 0, 0, 0.12)"
            } else {
                "none"
            },
            border_bottom: "1px solid rgba(255, 255, 255, 0.4)",
            border_radius: "0 0 1.5rem 1.5rem",
            transform,
            transition: "all 0.4s cubic-bezier(0.4, 0, 0.2, 1)",
        },
        DesignStyle::Klassik => HeaderStyle {
            classes: header_classes("header--klassik", scrolled, visible),
            background: "#fdfbf7",
            backdrop_filter: "none",
            box_shadow: if scrolled {
                "0 1px 4px rgba(0, 0, 0, 0.1)"
            } else {
                "none"
            },
            border_bottom: "1px solid #d8d2c4",
            border_radius: "0",
            transform,
            transition: "transform 0.25s ease",
        },
    }
}

fn header_classes(base: &str, scrolled: bool, visible: bool) -> String {
    let mut classes = format!("site-header {base}");
    if scrolled {
        classes.push_str(" is-scrolled");
    }
    if !visible {
        classes.push_str(" is-hidden");
    }
    classes
}
