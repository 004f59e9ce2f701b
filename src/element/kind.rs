use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification of extracted document elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementType {
    /// Section heading
    Title,
    /// Prose paragraph
    NarrativeText,
    /// Generic text that no classifier claimed
    Text,
    /// Text the extractor could not categorize
    UncategorizedText,
    /// Bulleted or enumerated list entry
    ListItem,
    /// Tabular content, usually carrying an HTML rendition
    Table,
    /// Caption attached to a figure or image
    FigureCaption,
    /// Mathematical formula
    Formula,
    /// Postal address
    Address,
    /// Email address
    EmailAddress,
    /// Running page header
    Header,
    /// Running page footer
    Footer,
    /// Explicit page break marker
    PageBreak,
    /// Checkbox with no text payload
    CheckBox,
    /// Embedded image
    Image,
    /// Pre-chunked text built from several elements
    CompositeElement,
}

/// Returned when a type tag does not name a known element type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown element type: {0}")]
pub struct UnknownElementType(pub String);

impl ElementType {
    pub const ALL: [ElementType; 16] = [
        ElementType::Title,
        ElementType::NarrativeText,
        ElementType::Text,
        ElementType::UncategorizedText,
        ElementType::ListItem,
        ElementType::Table,
        ElementType::FigureCaption,
        ElementType::Formula,
        ElementType::Address,
        ElementType::EmailAddress,
        ElementType::Header,
        ElementType::Footer,
        ElementType::PageBreak,
        ElementType::CheckBox,
        ElementType::Image,
        ElementType::CompositeElement,
    ];

    /// Canonical type tag, as used in rulesets and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Title => "Title",
            ElementType::NarrativeText => "NarrativeText",
            ElementType::Text => "Text",
            ElementType::UncategorizedText => "UncategorizedText",
            ElementType::ListItem => "ListItem",
            ElementType::Table => "Table",
            ElementType::FigureCaption => "FigureCaption",
            ElementType::Formula => "Formula",
            ElementType::Address => "Address",
            ElementType::EmailAddress => "EmailAddress",
            ElementType::Header => "Header",
            ElementType::Footer => "Footer",
            ElementType::PageBreak => "PageBreak",
            ElementType::CheckBox => "CheckBox",
            ElementType::Image => "Image",
            ElementType::CompositeElement => "CompositeElement",
        }
    }

    /// Whether elements of this type carry text and may take part in the
    /// outline. Checkboxes, images and page breaks never do.
    pub fn is_text_bearing(&self) -> bool {
        !matches!(
            self,
            ElementType::CheckBox | ElementType::Image | ElementType::PageBreak
        )
    }

    pub fn is_title(&self) -> bool {
        matches!(self, ElementType::Title)
    }

    /// Map a layout-detector label onto an element type.
    ///
    /// Returns the type and, for heading labels that imply a level, the
    /// category depth the label carries. Unrecognized labels become `Text`.
    pub fn from_layout_label(label: &str) -> (ElementType, Option<u32>) {
        match label {
            "Headline" => (ElementType::Title, Some(1)),
            "Subheadline" => (ElementType::Title, Some(2)),
            "Figure" => (ElementType::FigureCaption, None),
            "Checked" | "Unchecked" => (ElementType::CheckBox, None),
            "List" | "List-item" => (ElementType::ListItem, None),
            "Section-header" => (ElementType::Title, None),
            "Page-header" => (ElementType::Header, None),
            "Page-footer" => (ElementType::Footer, None),
            "Picture" => (ElementType::Image, None),
            other => match other.parse::<ElementType>() {
                Ok(kind) => (kind, None),
                Err(_) => (ElementType::Text, None),
            },
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}
