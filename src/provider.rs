//! Process-wide icon provider registration
//!
//! Alternative to the embedded bundle for projects that resolve icon
//! markup some other way: register an [`IconProvider`] once at startup,
//! then render through the module-level [`render_icon`].

use std::sync::OnceLock;

use crate::bundle::{inject_class, SvgMarkup};
use crate::error::{IconError, Result};
use crate::types::IconVariant;

/// Supplies SVG markup for icons by name and variant
pub trait IconProvider: Send + Sync {
    /// SVG markup for the given icon, or an error when it cannot be
    /// resolved
    fn get_icon(&self, name: &str, variant: IconVariant) -> Result<String>;
}

static PROVIDER: OnceLock<Box<dyn IconProvider>> = OnceLock::new();

/// Register the process-wide provider.
///
/// The registration is one-shot: a second call returns
/// [`IconError::AlreadyInitialized`] and leaves the first provider in
/// place.
pub fn initialize(provider: impl IconProvider + 'static) -> Result<()> {
    PROVIDER
        .set(Box::new(provider))
        .map_err(|_| IconError::AlreadyInitialized)
}

/// Render an icon through the registered provider with `class` injected
/// into its root element.
///
/// Fails with [`IconError::NotInitialized`] until [`initialize`] has been
/// called.
pub fn render_icon(name: &str, variant: IconVariant, class: &str) -> Result<SvgMarkup> {
    let provider = PROVIDER.get().ok_or(IconError::NotInitialized)?;
    let svg = provider.get_icon(name, variant)?;
    Ok(SvgMarkup::new(inject_class(&svg, class)))
}
