//! Build-time icon copying and artifact generation

use std::fs;
use std::path::PathBuf;

use crate::codegen;
use crate::config::BundlerConfig;
use crate::error::Result;
use crate::types::{IconManifest, IconRequest};

/// Default SVG content for the missing icon: a red hexagon with an
/// exclamation mark
pub const DEFAULT_MISSING_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="#fb2c36"><path d="M17.5 2.5L23 12L17.5 21.5H6.5L1 12L6.5 2.5H17.5ZM11 15V17H13V15H11ZM11 7V13H13V7H11Z"></path></svg>"##;

/// Subdirectory of the output root receiving copied assets
pub const ICONS_SUBDIR: &str = "icons";

/// Well-known filename of the fallback asset
pub const MISSING_ICON_FILENAME: &str = "missing.svg";

/// Copies requested icons out of the catalog and emits the bundle module
pub struct Generator {
    config: BundlerConfig,
}

impl Generator {
    /// Create a generator for one configuration
    pub fn new(config: BundlerConfig) -> Self {
        Self { config }
    }

    /// Run the generation pipeline: write the fallback asset, copy every
    /// requested icon that exists, emit the generated module, and report
    /// the misses.
    ///
    /// A request whose source icon cannot be copied is recorded and
    /// skipped; only I/O failures on the output side abort the run.
    pub fn generate(&self) -> Result<()> {
        let fallback = self
            .config
            .fallback_svg
            .as_deref()
            .unwrap_or(DEFAULT_MISSING_ICON_SVG);

        let icons_dir = self.config.output_root.join(ICONS_SUBDIR);
        fs::create_dir_all(&icons_dir)?;
        fs::write(icons_dir.join(MISSING_ICON_FILENAME), fallback)?;

        let mut manifest = IconManifest::new();
        let mut missing: Vec<String> = Vec::new();

        for request in &self.config.icons {
            let src = self.catalog_path(request);
            let dest = icons_dir.join(request.dest_filename());

            // Later duplicates of a key overwrite earlier ones, both on
            // disk and in the manifest.
            match fs::copy(&src, &dest) {
                Ok(_) => {
                    manifest.insert(request.key(), request.dest_filename());
                }
                Err(err) => {
                    log::debug!("Could not copy {:?}: {}", src, err);
                    missing.push(request.key());
                }
            }
        }

        codegen::write_module(&self.config, &manifest)?;

        log::info!(
            "Bundled {} icons into {:?}",
            manifest.len(),
            self.config.output_root
        );

        if !missing.is_empty() {
            log::warn!(
                "The following icons were not found and could not be copied:\n{}",
                missing.join("\n")
            );
        }

        Ok(())
    }

    /// Expected source path for a request. The layout is an external
    /// contract with the upstream catalog:
    /// `optimized/<size>/<style>/<name>.svg`.
    fn catalog_path(&self, request: &IconRequest) -> PathBuf {
        self.config
            .catalog_root
            .join("optimized")
            .join(request.variant.size_px().to_string())
            .join(request.variant.style_dir())
            .join(format!("{}.svg", request.name))
    }
}
