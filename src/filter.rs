//! Filter evaluator: turns filter criteria into active-filter labels
//!
//! Labels are display-only. The catalog shown to the user is not narrowed
//! by these criteria.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

macro_rules! facet {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            /// Every value, in the order the filter panel lists them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name as declared in the filter panel
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.name().eq_ignore_ascii_case(wanted)
                            || v.name().replace(' ', "-").eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| Error::unknown($kind, s))
            }
        }
    };
}

facet!(
    /// Furniture style
    Style, "style" {
        Modern => "modern",
        Traditional => "traditional",
        Minimalist => "minimalist",
        Industrial => "industrial",
        Scandinavian => "scandinavian",
    }
);

facet!(
    /// Dominant color
    Color, "color" {
        Black => "black",
        White => "white",
        Brown => "brown",
        Gray => "gray",
        Blue => "blue",
    }
);

facet!(
    /// Primary material
    Material, "material" {
        Wood => "Wood",
        Metal => "Metal",
        Glass => "Glass",
        Fabric => "Fabric",
        Leather => "Leather",
        Plastic => "Plastic",
        Marble => "Marble",
    }
);

facet!(
    /// Manufacturer
    Brand, "brand" {
        AneesUpholstery => "Anees Upholstery",
        AmericanLeather => "American Leather",
        CenturyFurniture => "Century Furniture",
        Bernhardt => "Bernhardt",
        FineArtLamps => "Fine Art Lamps",
    }
);

/// Inclusive price range in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, 2000)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Snapshot of the filter panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub styles: BTreeSet<Style>,
    pub colors: BTreeSet<Color>,
    pub materials: BTreeSet<Material>,
    pub brands: BTreeSet<Brand>,
}

impl FilterCriteria {
    pub fn with_price_range(mut self, min: u32, max: u32) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.insert(style);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.insert(color);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.insert(material);
        self
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brands.insert(brand);
        self
    }

    /// Flip a style checkbox
    pub fn toggle_style(&mut self, style: Style) {
        if !self.styles.remove(&style) {
            self.styles.insert(style);
        }
    }

    pub fn toggle_color(&mut self, color: Color) {
        if !self.colors.remove(&color) {
            self.colors.insert(color);
        }
    }

    pub fn toggle_material(&mut self, material: Material) {
        if !self.materials.remove(&material) {
            self.materials.insert(material);
        }
    }

    pub fn toggle_brand(&mut self, brand: Brand) {
        if !self.brands.remove(&brand) {
            self.brands.insert(brand);
        }
    }
}

/// Computes labels relative to the configured full price range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEvaluator {
    bounds: PriceRange,
}

impl FilterEvaluator {
    pub fn new(bounds: PriceRange) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    /// Criteria with the full price range and no facet selected
    pub fn reset(&self) -> FilterCriteria {
        FilterCriteria {
            price_range: self.bounds,
            ..FilterCriteria::default()
        }
    }

    /// Active-filter labels: price range, styles, colors, materials, brands
    pub fn apply(&self, criteria: &FilterCriteria) -> Vec<String> {
        let mut labels = Vec::new();

        let range = criteria.price_range;
        if range.min > self.bounds.min || range.max < self.bounds.max {
            labels.push(range.to_string());
        }

        labels.extend(criteria.styles.iter().map(|s| capitalize(s.name())));
        labels.extend(criteria.colors.iter().map(|c| capitalize(c.name())));
        labels.extend(criteria.materials.iter().map(|m| m.name().to_string()));
        labels.extend(criteria.brands.iter().map(|b| b.name().to_string()));
        labels
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
