//! The style marker carried on every store notification.
//!
//! Replaces the out-of-band body-attribute write of earlier releases: the
//! store computes the marker and hands it to subscribers, and the
//! presentation layer applies it through its normal rendering path so CSS
//! selectors outside the component tree can target the active package.

use crate::config::schema::{ColorScheme, DesignStyle, SiteConfig, StylePackage};
use crate::config::ConfigEnum;

/// Compact summary of the configuration dimensions CSS selectors key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleMarker {
    /// Active style package
    pub package: StylePackage,
    /// Active design style
    pub design: DesignStyle,
    /// Active color scheme
    pub scheme: ColorScheme,
    /// Dark mode active
    pub dark: bool,
}

impl StyleMarker {
    /// Computes the marker for `config`.
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            package: config.style.package,
            design: config.layout.design,
            scheme: config.theme.color_scheme,
            dark: config.theme.dark_mode,
        }
    }

    /// Renders the marker as a space-separated class list.
    ///
    /// Example: `style-standard design-angular scheme-warm theme-light`.
    #[must_use]
    pub fn class_string(&self) -> String {
        format!(
            "style-{} design-{} scheme-{} theme-{}",
            self.package.as_str(),
            self.design.as_str(),
            self.scheme.as_str(),
            if self.dark { "dark" } else { "light" }
        )
    }
}

impl Default for StyleMarker {
    fn default() -> Self {
        Self::from_config(&SiteConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker_class_string() {
        let marker = StyleMarker::default();
        assert_eq!(
            marker.class_string(),
            "style-standard design-angular scheme-warm theme-light"
        );
    }

    #[test]
    fn test_marker_tracks_config() {
        let mut config = SiteConfig::new();
        config.style.package = StylePackage::Modern;
        config.layout.design = DesignStyle::Modern;
        config.theme.color_scheme = ColorScheme::Elegant;
        config.theme.dark_mode = true;

        let marker = StyleMarker::from_config(&config);
        assert_eq!(
            marker.class_string(),
            "style-modern design-modern scheme-elegant theme-dark"
        );
    }
}
