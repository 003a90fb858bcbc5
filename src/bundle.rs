//! Runtime lookup and rendering over an embedded asset bundle

use std::fmt;

use ahash::AHashMap;

use crate::error::{IconError, Result};
use crate::provider::IconProvider;
use crate::types::IconVariant;

/// Pre-escaped SVG markup, safe to interpolate into an HTML template
/// without further escaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgMarkup(String);

impl SvgMarkup {
    /// Wrap markup that is already safe for direct interpolation
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// View the markup as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the markup
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SvgMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SvgMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An immutable set of bundled icons: the composite-key and asset tables,
/// the fallback markup, and the baked fail-fast flag.
///
/// Built once by a generated module and safe for unsynchronized concurrent
/// reads afterward.
#[derive(Debug, Clone)]
pub struct IconBundle {
    /// Composite key to bundled asset filename
    paths: AHashMap<String, String>,
    /// Bundled asset filename to embedded SVG markup
    data: AHashMap<String, String>,
    missing: String,
    fail_on_error: bool,
}

impl IconBundle {
    /// Build a bundle from table slices, typically the statics of a
    /// generated module
    pub fn new(
        paths: &[(&str, &str)],
        data: &[(&str, &str)],
        missing: &str,
        fail_on_error: bool,
    ) -> Self {
        Self {
            paths: paths
                .iter()
                .map(|(key, filename)| (key.to_string(), filename.to_string()))
                .collect(),
            data: data
                .iter()
                .map(|(filename, svg)| (filename.to_string(), svg.to_string()))
                .collect(),
            missing: missing.to_string(),
            fail_on_error,
        }
    }

    /// Number of icons in the bundle, not counting the fallback
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when the bundle holds no icons
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// SVG markup for the given icon with `class` injected into its root
    /// element.
    ///
    /// A lookup miss yields the fallback markup, or
    /// [`IconError::IconNotFound`] when the bundle was generated with
    /// fail-on-error.
    pub fn render_icon(&self, name: &str, variant: IconVariant, class: &str) -> Result<SvgMarkup> {
        let svg = self.lookup(name, variant)?;
        Ok(SvgMarkup(inject_class(svg, class)))
    }

    fn lookup(&self, name: &str, variant: IconVariant) -> Result<&str> {
        let key = format!("{}/{}", variant, name);

        let Some(filename) = self.paths.get(&key) else {
            return self.miss(key);
        };

        // A key whose asset never made it into the data table is treated
        // like an absent key.
        match self.data.get(filename) {
            Some(svg) => Ok(svg),
            None => self.miss(key),
        }
    }

    fn miss(&self, key: String) -> Result<&str> {
        if self.fail_on_error {
            Err(IconError::IconNotFound(key))
        } else {
            Ok(&self.missing)
        }
    }
}

impl IconProvider for IconBundle {
    fn get_icon(&self, name: &str, variant: IconVariant) -> Result<String> {
        self.lookup(name, variant).map(str::to_string)
    }
}

/// Insert `class` into the root element of `svg`.
///
/// An existing `class="..."` attribute has `class` prepended inside the
/// quotes; otherwise a new attribute is inserted after the opening
/// `<svg ` token. Exactly one textual substitution, first match wins.
/// Markup with neither pattern is returned unchanged, as is an empty
/// `class`.
pub fn inject_class(svg: &str, class: &str) -> String {
    if class.is_empty() {
        return svg.to_string();
    }

    if let Some(pos) = svg.find("class=\"") {
        let insert_at = pos + "class=\"".len();
        let mut out = String::with_capacity(svg.len() + class.len() + 1);
        out.push_str(&svg[..insert_at]);
        out.push_str(class);
        out.push(' ');
        out.push_str(&svg[insert_at..]);
        out
    } else if let Some(pos) = svg.find("<svg ") {
        let insert_at = pos + "<svg ".len();
        let mut out = String::with_capacity(svg.len() + class.len() + 9);
        out.push_str(&svg[..insert_at]);
        out.push_str("class=\"");
        out.push_str(class);
        out.push_str("\" ");
        out.push_str(&svg[insert_at..]);
        out
    } else {
        svg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_bundle(fail_on_error: bool) -> IconBundle {
        IconBundle::new(
            &[
                ("outline/home", "outline_home.svg"),
                ("solid/ghost", "solid_ghost.svg"),
            ],
            &[("outline_home.svg", "<svg>H</svg>")],
            "<svg>missing</svg>",
            fail_on_error,
        )
    }

    #[test]
    fn renders_bundled_markup() {
        let bundle = sample_bundle(false);
        let markup = bundle.render_icon("home", IconVariant::Outline, "").unwrap();
        assert_eq!(markup.as_str(), "<svg>H</svg>");
    }

    #[test]
    fn unknown_key_falls_back() {
        let bundle = sample_bundle(false);
        let markup = bundle.render_icon("home", IconVariant::Micro, "").unwrap();
        assert_eq!(markup.as_str(), "<svg>missing</svg>");
    }

    #[test]
    fn unknown_key_fails_fast_when_configured() {
        let bundle = sample_bundle(true);
        let err = bundle.render_icon("home", IconVariant::Micro, "").unwrap_err();
        assert!(matches!(err, IconError::IconNotFound(key) if key == "micro/home"));
    }

    #[test]
    fn key_without_asset_data_behaves_like_a_miss() {
        // "solid/ghost" is in the path table but has no data entry.
        let markup = sample_bundle(false)
            .render_icon("ghost", IconVariant::Solid, "")
            .unwrap();
        assert_eq!(markup.as_str(), "<svg>missing</svg>");

        let err = sample_bundle(true)
            .render_icon("ghost", IconVariant::Solid, "")
            .unwrap_err();
        assert!(matches!(err, IconError::IconNotFound(key) if key == "solid/ghost"));
    }

    #[test]
    fn class_injection_applies_during_render() {
        let bundle = IconBundle::new(
            &[("outline/home", "outline_home.svg")],
            &[("outline_home.svg", r#"<svg viewBox="0 0 24 24"></svg>"#)],
            "<svg>missing</svg>",
            false,
        );
        let markup = bundle
            .render_icon("home", IconVariant::Outline, "w-6")
            .unwrap();
        assert_eq!(markup.as_str(), r#"<svg class="w-6" viewBox="0 0 24 24"></svg>"#);
    }

    #[test]
    fn inject_class_adds_attribute_to_root_tag() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"></path></svg>"#;
        assert_eq!(
            inject_class(svg, "w-6 h-6"),
            r#"<svg class="w-6 h-6" xmlns="http://www.w3.org/2000/svg"><path d="M0 0"></path></svg>"#
        );
    }

    #[test]
    fn inject_class_prepends_to_existing_attribute() {
        let svg = r#"<svg class="base" viewBox="0 0 24 24"></svg>"#;
        assert_eq!(
            inject_class(svg, "extra"),
            r#"<svg class="extra base" viewBox="0 0 24 24"></svg>"#
        );
    }

    #[test]
    fn inject_class_without_root_tag_is_a_no_op() {
        assert_eq!(inject_class(r#"<circle r="4"/>"#, "extra"), r#"<circle r="4"/>"#);
    }

    #[test]
    fn empty_class_is_a_no_op() {
        let svg = r#"<svg viewBox="0 0 24 24"/>"#;
        assert_eq!(inject_class(svg, ""), svg);
    }

    #[test]
    fn markup_displays_transparently() {
        let markup = SvgMarkup::new("<svg/>");
        assert_eq!(markup.to_string(), "<svg/>");
        assert_eq!(markup.as_ref(), "<svg/>");
        assert_eq!(markup.into_string(), "<svg/>");
    }
}
