//! Emission of the generated bundle module

use std::fs;

use crate::config::BundlerConfig;
use crate::error::Result;
use crate::generator::{ICONS_SUBDIR, MISSING_ICON_FILENAME};
use crate::types::IconManifest;

/// Render the generated module source for a finished manifest.
///
/// Table entries are emitted in sorted key order so regeneration is
/// deterministic.
pub fn render_module(config: &BundlerConfig, manifest: &IconManifest) -> String {
    let mut entries: Vec<(&str, &str)> = manifest
        .iter()
        .map(|(key, filename)| (key.as_str(), filename.as_str()))
        .collect();
    entries.sort_unstable();

    let mut out = String::new();
    out.push_str("// Code generated by rust_heroicons. DO NOT EDIT.\n");
    out.push_str("\n");
    out.push_str("use std::sync::OnceLock;\n");
    out.push_str("\n");
    out.push_str("use rust_heroicons::{IconBundle, Result, SvgMarkup};\n");
    out.push_str("\n");
    out.push_str("pub use rust_heroicons::IconVariant;\n");
    out.push_str("\n");
    out.push_str("/// Treat lookup misses as errors instead of substituting the missing icon.\n");
    out.push_str(&format!(
        "pub const FAIL_ON_ERROR: bool = {};\n",
        config.fail_on_error
    ));
    out.push_str("\n");
    out.push_str("/// Composite key to bundled asset filename.\n");
    out.push_str("static ICON_PATHS: &[(&str, &str)] = &[\n");
    for (key, filename) in &entries {
        out.push_str(&format!("    ({:?}, {:?}),\n", key, filename));
    }
    out.push_str("];\n");
    out.push_str("\n");
    out.push_str("/// Bundled asset filename to embedded SVG markup.\n");
    out.push_str("static ICON_DATA: &[(&str, &str)] = &[\n");
    for (_, filename) in &entries {
        out.push_str(&format!(
            "    ({:?}, include_str!({:?})),\n",
            filename,
            format!("{}/{}", ICONS_SUBDIR, filename)
        ));
    }
    out.push_str("];\n");
    out.push_str("\n");
    out.push_str(&format!(
        "static MISSING_ICON: &str = include_str!({:?});\n",
        format!("{}/{}", ICONS_SUBDIR, MISSING_ICON_FILENAME)
    ));
    out.push_str("\n");
    out.push_str("/// Icon bundle embedded in this module.\n");
    out.push_str("pub fn bundle() -> &'static IconBundle {\n");
    out.push_str("    static BUNDLE: OnceLock<IconBundle> = OnceLock::new();\n");
    out.push_str(
        "    BUNDLE.get_or_init(|| IconBundle::new(ICON_PATHS, ICON_DATA, MISSING_ICON, FAIL_ON_ERROR))\n",
    );
    out.push_str("}\n");
    out.push_str("\n");
    out.push_str("/// Render a bundled icon with `class` injected into its root element.\n");
    out.push_str(
        "pub fn render_icon(name: &str, variant: IconVariant, class: &str) -> Result<SvgMarkup> {\n",
    );
    out.push_str("    bundle().render_icon(name, variant, class)\n");
    out.push_str("}\n");
    out
}

/// Write the generated module to `<output_root>/<module_name>.rs`
pub fn write_module(config: &BundlerConfig, manifest: &IconManifest) -> Result<()> {
    let source = render_module(config, manifest);
    let path = config
        .output_root
        .join(format!("{}.rs", config.module_name));
    fs::write(&path, source)?;
    Ok(())
}
