//! Confirmed parameter bundle per style package.
//!
//! Each style package stands for a coherent set of concrete parameters;
//! this resolver is the single place that spells them out, so every
//! consumer of a package sees the same bundle.

use crate::config::schema::{BadgeStyle, DesignStyle, RadiusScale, StylePackage};

/// Shadow depth used across cards and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowIntensity {
    /// No shadows, hard edges only
    None,
    /// Light functional shadows
    Subtle,
    /// Deep layered shadows
    Pronounced,
}

/// How aggressively the site animates state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionLevel {
    /// Short opacity-only transitions
    Reduced,
    /// Default easings on transform and color
    Standard,
    /// Long springy transitions on everything
    Expressive,
}

/// The confirmed concrete parameters behind one style package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifiedStyle {
    /// Header/design variant the package implies
    pub design: DesignStyle,
    /// Radius scale
    pub radius: RadiusScale,
    /// Shadow depth
    pub shadow: ShadowIntensity,
    /// Badge shape
    pub badge: BadgeStyle,
    /// Transition aggressiveness
    pub transitions: TransitionLevel,
}

/// Resolves the parameter bundle for a style package.
#[must_use]
pub fn resolve(package: StylePackage) -> UnifiedStyle {
    match package {
        StylePackage::Einfach => UnifiedStyle {
            design: DesignStyle::Angular,
            radius: RadiusScale::None,
            shadow: ShadowIntensity::None,
            badge: BadgeStyle::Minimal,
            transitions: TransitionLevel::Reduced,
        },
        StylePackage::Standard => UnifiedStyle {
            design: DesignStyle::Rounded,
            radius: RadiusScale::Medium,
            shadow: ShadowIntensity::Subtle,
            badge: BadgeStyle::Rounded,
            transitions: TransitionLevel::Standard,
        },
        StylePackage::Modern => UnifiedStyle {
            design: DesignStyle::Modern,
            radius: RadiusScale::Large,
            shadow: ShadowIntensity::Pronounced,
            badge: BadgeStyle::Pill,
            transitions: TransitionLevel::Expressive,
        },
    }
}
