//! Core types for icon selection and lookup

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// Lookup table built by one generation run: composite key to destination
/// filename
pub type IconManifest = AHashMap<String, String>;

/// The four Heroicons style/size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    /// 24px outline icons
    Outline,
    /// 24px solid icons
    Solid,
    /// 20px solid icons
    Mini,
    /// 16px solid icons
    Micro,
}

impl IconVariant {
    /// All variants, in catalog order
    pub const ALL: [IconVariant; 4] = [
        IconVariant::Outline,
        IconVariant::Solid,
        IconVariant::Mini,
        IconVariant::Micro,
    ];

    /// Short name used in composite keys and destination filenames
    pub fn name(&self) -> &'static str {
        match self {
            IconVariant::Outline => "outline",
            IconVariant::Solid => "solid",
            IconVariant::Mini => "mini",
            IconVariant::Micro => "micro",
        }
    }

    /// Pixel size, matching the catalog's size directories
    pub fn size_px(&self) -> u32 {
        match self {
            IconVariant::Outline | IconVariant::Solid => 24,
            IconVariant::Mini => 20,
            IconVariant::Micro => 16,
        }
    }

    /// Style directory inside the catalog's size directory
    pub fn style_dir(&self) -> &'static str {
        match self {
            IconVariant::Outline => "outline",
            IconVariant::Solid | IconVariant::Mini | IconVariant::Micro => "solid",
        }
    }

    /// Parse a variant from its short name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "outline" => Ok(IconVariant::Outline),
            "solid" => Ok(IconVariant::Solid),
            "mini" => Ok(IconVariant::Mini),
            "micro" => Ok(IconVariant::Micro),
            other => Err(IconError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One requested icon: a catalog filename stem plus a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRequest {
    /// Filename stem in the catalog, e.g. "arrow-down-tray"
    pub name: String,
    /// Style/size category
    pub variant: IconVariant,
}

impl IconRequest {
    /// Create a request for one icon
    pub fn new(name: impl Into<String>, variant: IconVariant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }

    /// Composite key addressing this icon in the lookup table
    pub fn key(&self) -> String {
        format!("{}/{}", self.variant, self.name)
    }

    /// Destination filename inside the output icons directory
    pub fn dest_filename(&self) -> String {
        format!("{}_{}.svg", self.variant, self.name)
    }
}
