//! Configuration for a single generation run

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{IconRequest, IconVariant};

/// Configuration consumed by one [`Generator`](crate::Generator) run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlerConfig {
    /// Path to a checkout of the upstream Heroicons repository
    pub catalog_root: PathBuf,
    /// Directory receiving the copied assets and the generated module
    pub output_root: PathBuf,
    /// Name of the generated module, which is also its filename stem
    pub module_name: String,
    /// Icons to bundle, in request order
    pub icons: Vec<IconRequest>,
    /// Treat runtime lookup misses as errors instead of using the fallback
    pub fail_on_error: bool,
    /// Override for the bundled fallback SVG markup
    pub fallback_svg: Option<String>,
}

impl BundlerConfig {
    /// Create a configuration with the default module name and no icons
    pub fn new(catalog_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog_root: catalog_root.into(),
            output_root: output_root.into(),
            module_name: "heroicons".to_string(),
            icons: Vec::new(),
            fail_on_error: false,
            fallback_svg: None,
        }
    }

    /// Add one icon request
    pub fn icon(mut self, name: impl Into<String>, variant: IconVariant) -> Self {
        self.icons.push(IconRequest::new(name, variant));
        self
    }

    /// Replace the full request list
    pub fn with_icons(mut self, icons: Vec<IconRequest>) -> Self {
        self.icons = icons;
        self
    }

    /// Set the generated module name
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Make runtime lookup misses hard errors
    pub fn with_fail_on_error(mut self) -> Self {
        self.fail_on_error = true;
        self
    }

    /// Override the fallback SVG markup
    pub fn with_fallback_svg(mut self, svg: impl Into<String>) -> Self {
        self.fallback_svg = Some(svg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_accumulates_requests_in_order() {
        let config = BundlerConfig::new("catalog", "out")
            .icon("home", IconVariant::Outline)
            .icon("user", IconVariant::Solid);

        assert_eq!(config.icons.len(), 2);
        assert_eq!(config.icons[0], IconRequest::new("home", IconVariant::Outline));
        assert_eq!(config.icons[1], IconRequest::new("user", IconVariant::Solid));
        assert_eq!(config.module_name, "heroicons");
        assert!(!config.fail_on_error);
        assert!(config.fallback_svg.is_none());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = BundlerConfig::new("catalog", "out")
            .with_module_name("icons")
            .with_fail_on_error()
            .with_fallback_svg("<svg/>");

        assert_eq!(config.module_name, "icons");
        assert!(config.fail_on_error);
        assert_eq!(config.fallback_svg.as_deref(), Some("<svg/>"));
    }
}
