//! Diagram specification.
//!
//! A [`DiagramSpec`] captures everything about one rendering run except the
//! input file: the category order, the optional highlight target, the output
//! path, and figure styling. Specs are plain JSON so a diagram variant can be
//! kept in a file and reused; every field is optional in the JSON and falls
//! back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ResultExt as _};
use crate::links::Highlight;

/// Default category order for the climate model association data.
pub const DEFAULT_CATEGORY_ORDER: [&str; 5] =
    ["Model", "Country", "Institute", "Portal", "Downscaling"];

/// Default export path.
pub const DEFAULT_OUTPUT_FILE: &str = "sankey_diagram.html";

/// Default layout font size.
pub const DEFAULT_FONT_SIZE: usize = 10;

/// Configuration for one diagram rendering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSpec {
    /// Categories drawn as columns, left to right.
    pub category_order: Vec<String>,

    /// Optional highlight target; all links of matching rows take the
    /// highlight color.
    pub highlight: Option<Highlight>,

    /// Path of the exported HTML file.
    pub output_file: PathBuf,

    /// Figure width in pixels; plotly picks one when unset.
    pub width: Option<usize>,

    /// Figure height in pixels; plotly picks one when unset.
    pub height: Option<usize>,

    /// Layout font size.
    pub font_size: usize,
}

impl Default for DiagramSpec {
    fn default() -> Self {
        Self {
            category_order: DEFAULT_CATEGORY_ORDER
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
            highlight: None,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            width: None,
            height: None,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl DiagramSpec {
    /// Load a diagram spec from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read diagram spec: {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse a diagram spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this spec to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save this spec to a JSON file.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write diagram spec: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = DiagramSpec::default();
        assert_eq!(
            spec.category_order,
            vec!["Model", "Country", "Institute", "Portal", "Downscaling"]
        );
        assert!(spec.highlight.is_none());
        assert_eq!(spec.output_file, PathBuf::from("sankey_diagram.html"));
        assert_eq!(spec.font_size, 10);
    }

    #[test]
    fn test_json_round_trip() -> Result<()> {
        let spec = DiagramSpec {
            category_order: vec!["Country".to_owned(), "Model".to_owned()],
            highlight: Some(Highlight::new("Country", "USA")),
            output_file: PathBuf::from("out/usa.html"),
            width: Some(1800),
            height: Some(1300),
            font_size: 12,
        };

        let parsed = DiagramSpec::from_json(&spec.to_json()?)?;
        assert_eq!(parsed.category_order, spec.category_order);
        assert_eq!(parsed.highlight, spec.highlight);
        assert_eq!(parsed.output_file, spec.output_file);
        assert_eq!(parsed.width, Some(1800));
        assert_eq!(parsed.height, Some(1300));
        assert_eq!(parsed.font_size, 12);
        Ok(())
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() -> Result<()> {
        let spec = DiagramSpec::from_json(r#"{"category_order": ["Portal", "Model"]}"#)?;
        assert_eq!(spec.category_order, vec!["Portal", "Model"]);
        assert!(spec.highlight.is_none());
        assert_eq!(spec.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        Ok(())
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = DiagramSpec::from_json("{not json");
        assert!(matches!(
            result,
            Err(crate::error::SankeyError::Config(_))
        ));
    }
}
