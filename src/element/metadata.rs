use super::ElementId;
use serde::{Deserialize, Serialize};

/// Bounding polygon of an element on its page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Polygon vertices in the coordinate system's units
    pub points: Vec<(f64, f64)>,
    /// Name of the coordinate system (e.g. "PixelSpace")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Page width in system units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_width: Option<f64>,
    /// Page height in system units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_height: Option<f64>,
}

/// Metadata carried by every element.
///
/// Only `parent_id`, `category_depth`, `page_number`, `section`,
/// `text_as_html` and `is_continuation` drive structural decisions; the rest
/// pass through untouched and are merged when elements are chunked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Id of the enclosing element in the outline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ElementId>,
    /// Nesting level in the outline (0 = top level)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_depth: Option<u32>,
    /// 1-based page the element was found on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Source file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Logical section (e.g. an EPUB chapter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Detected languages, in detection order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// HTML rendition of a table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_as_html: Option<String>,
    /// Set on table fragments; true for every fragment after the first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_continuation: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emphasized_text_contents: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_urls: Vec<String>,
}

impl ElementMetadata {
    /// Fold another element's metadata into this one.
    ///
    /// List fields are unioned in first-seen order; scalar fields keep the
    /// first non-null value.
    pub fn merge_from(&mut self, other: &ElementMetadata) {
        fill(&mut self.parent_id, &other.parent_id);
        fill(&mut self.category_depth, &other.category_depth);
        fill(&mut self.page_number, &other.page_number);
        fill(&mut self.filename, &other.filename);
        fill(&mut self.section, &other.section);
        fill(&mut self.coordinates, &other.coordinates);
        fill(&mut self.text_as_html, &other.text_as_html);
        fill(&mut self.is_continuation, &other.is_continuation);

        union(&mut self.languages, &other.languages);
        union(&mut self.emphasized_text_contents, &other.emphasized_text_contents);
        union(&mut self.link_urls, &other.link_urls);
    }

    /// Merged metadata for a run of elements, flattened for a chunk
    pub fn merged<'a>(sources: impl IntoIterator<Item = &'a ElementMetadata>) -> Self {
        let mut merged = ElementMetadata::default();
        for source in sources {
            merged.merge_from(source);
        }
        // Chunks have no place in the outline
        merged.parent_id = None;
        merged.category_depth = None;
        merged
    }
}

fn fill<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if slot.is_none() {
        slot.clone_from(value);
    }
}

fn union(target: &mut Vec<String>, values: &[String]) {
    for value in values {
        if !target.contains(value) {
            target.push(value.clone());
        }
    }
}
