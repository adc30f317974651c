//! Integration tests for the derived style resolvers.

use werksite::config::{
    ColorScheme, ConfigEnum, DesignStyle, RadiusScale, SiteConfig, StylePackage,
};
use werksite::styles::{colors, cta, dropdown, header, marker::StyleMarker, radius, unified};

const ALL_DESIGNS: [DesignStyle; 4] = [
    DesignStyle::Angular,
    DesignStyle::Rounded,
    DesignStyle::Modern,
    DesignStyle::Klassik,
];

#[test]
fn test_header_resolver_covers_full_input_space() {
    for design in ALL_DESIGNS {
        for scrolled in [false, true] {
            for visible in [false, true] {
                let style = header::resolve(design, scrolled, visible);
                assert!(style.classes.contains("site-header"));
                assert!(!style.transform.is_empty());
                // Same inputs, same output
                assert_eq!(style, header::resolve(design, scrolled, visible));
            }
        }
    }
}

#[test]
fn test_unrecognized_raw_design_falls_back_to_angular() {
    // The parse boundary maps unknown raw values to the default design,
    // so resolvers downstream produce the classic descriptor
    let design = DesignStyle::parse_or_default("webtrash-3000");
    assert_eq!(design, DesignStyle::Angular);

    let style = header::resolve(design, false, true);
    assert_eq!(style, header::resolve(DesignStyle::Angular, false, true));
}

#[test]
fn test_dropdown_descriptors_differ_per_design() {
    let descriptors: Vec<_> = ALL_DESIGNS
        .iter()
        .map(|&design| dropdown::resolve(design, false))
        .collect();
    for (i, a) in descriptors.iter().enumerate() {
        for b in descriptors.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_palettes_complete_for_all_schemes_and_modes() {
    for scheme in [
        ColorScheme::Warm,
        ColorScheme::Modern,
        ColorScheme::Elegant,
        ColorScheme::Nature,
    ] {
        for dark in [false, true] {
            let palette = colors::resolve(scheme, dark);
            assert!(palette.primary.starts_with('#'));
            assert!(palette.background.starts_with('#'));
            assert!(palette.text.starts_with('#'));
        }
    }
}

#[test]
fn test_cta_casing_follows_design() {
    assert_eq!(
        cta::resolve(DesignStyle::Angular).casing.css_value(),
        "uppercase"
    );
    assert_eq!(
        cta::resolve(DesignStyle::Klassik).casing.css_value(),
        "none"
    );
}

#[test]
fn test_radius_tokens_and_overrides_agree_on_square() {
    assert_eq!(
        radius::tokens(DesignStyle::Angular),
        radius::tokens_for_scale(RadiusScale::None)
    );
}

#[test]
fn test_unified_bundles_are_deterministic_and_distinct() {
    let packages = [
        StylePackage::Einfach,
        StylePackage::Standard,
        StylePackage::Modern,
    ];
    for package in packages {
        assert_eq!(unified::resolve(package), unified::resolve(package));
    }
    assert_ne!(
        unified::resolve(StylePackage::Einfach).design,
        unified::resolve(StylePackage::Modern).design
    );
}

#[test]
fn test_style_marker_reflects_configuration() {
    let mut config = SiteConfig::new();
    config.theme.dark_mode = true;
    config.theme.color_scheme = ColorScheme::Nature;

    let marker = StyleMarker::from_config(&config);
    let classes = marker.class_string();
    assert!(classes.contains("scheme-nature"));
    assert!(classes.contains("theme-dark"));
    assert!(classes.contains("design-angular"));
}
