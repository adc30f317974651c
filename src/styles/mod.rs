//! Derived style resolvers.
//!
//! Pure functions mapping configuration values to concrete style
//! descriptors consumed by the site renderer: header and dropdown chrome,
//! color palettes, radius tokens, call-to-action treatment, and the
//! confirmed parameter bundle behind each style package. Given the same
//! inputs a resolver always returns the same fully-populated descriptor,
//! so independent header variants render consistently.

pub mod colors;
pub mod cta;
pub mod dropdown;
pub mod header;
pub mod marker;
pub mod radius;
pub mod unified;

pub use colors::SchemePalette;
pub use cta::{CtaStyle, TextCasing};
pub use dropdown::DropdownStyle;
pub use header::HeaderStyle;
pub use marker::StyleMarker;
pub use radius::RadiusTokens;
pub use unified::{ShadowIntensity, TransitionLevel, UnifiedStyle};
