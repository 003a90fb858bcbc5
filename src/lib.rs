//! Build-time Heroicons bundler with compile-time SVG embedding
//!
//! This crate selects a named subset of the upstream
//! [Heroicons](https://heroicons.com) catalog, copies each selected SVG
//! into a project-local directory, and emits a generated Rust module that
//! embeds the subset via `include_str!` and serves it at runtime with a
//! fallback for anything that cannot be found.
//!
//! # Features
//!
//! - **Deterministic path resolution** - icons resolve against the
//!   catalog's fixed `optimized/<size>/<style>` layout
//! - **Miss-tolerant generation** - a missing icon is reported, never fatal
//! - **Compile-time embedding** - the generated module has no runtime
//!   file-system dependency
//! - **Fallback or fail-fast rendering** - baked in from configuration at
//!   generation time
//! - **CSS class injection** - a caller-supplied class lands on the SVG
//!   root element
//!
//! # Example
//!
//! ```no_run
//! use rust_heroicons::{BundlerConfig, Generator, IconVariant};
//!
//! let config = BundlerConfig::new("vendor/heroicons", "src/web")
//!     .icon("home", IconVariant::Outline)
//!     .icon("user", IconVariant::Solid)
//!     .icon("bell", IconVariant::Mini);
//!
//! Generator::new(config).generate().expect("icon generation failed");
//! ```

pub mod bundle;
pub mod codegen;
pub mod config;
pub mod error;
pub mod generator;
pub mod provider;
pub mod types;

pub use bundle::{inject_class, IconBundle, SvgMarkup};
pub use codegen::{render_module, write_module};
pub use config::BundlerConfig;
pub use error::{IconError, Result};
pub use generator::{Generator, DEFAULT_MISSING_ICON_SVG, ICONS_SUBDIR, MISSING_ICON_FILENAME};
pub use provider::{initialize, render_icon, IconProvider};
pub use types::{IconManifest, IconRequest, IconVariant};
