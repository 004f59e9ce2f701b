use crate::element::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Types the default ruleset nests under a Title
const TITLE_CHILDREN: [ElementType; 9] = [
    ElementType::Text,
    ElementType::UncategorizedText,
    ElementType::NarrativeText,
    ElementType::ListItem,
    ElementType::Formula,
    ElementType::FigureCaption,
    ElementType::Table,
    ElementType::Address,
    ElementType::EmailAddress,
];

/// Child type -> types allowed to be its parent in the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ruleset {
    parents: BTreeMap<ElementType, BTreeSet<ElementType>>,
}

impl Ruleset {
    /// Create an empty ruleset; every element becomes its own root
    pub fn new() -> Self {
        Self {
            parents: BTreeMap::new(),
        }
    }

    /// Allow `parent` to enclose elements of type `child`
    pub fn allow(&mut self, child: ElementType, parent: ElementType) {
        self.parents.entry(child).or_default().insert(parent);
    }

    /// Builder form of [`Ruleset::allow`] for several parents at once
    pub fn with_rule(
        mut self,
        child: ElementType,
        parents: impl IntoIterator<Item = ElementType>,
    ) -> Self {
        let entry = self.parents.entry(child).or_default();
        entry.extend(parents);
        self
    }

    /// Build from a child -> allowed parents map
    pub fn from_parents_map(
        map: impl IntoIterator<Item = (ElementType, Vec<ElementType>)>,
    ) -> Self {
        map.into_iter()
            .fold(Self::new(), |ruleset, (child, parents)| {
                ruleset.with_rule(child, parents)
            })
    }

    /// Build from a parent -> allowed children map.
    ///
    /// # Example
    /// ```
    /// use doctown_outline::{ElementType, Ruleset};
    ///
    /// // Headers may enclose titles, titles may enclose narrative text
    /// let ruleset = Ruleset::from_children_map([
    ///     (ElementType::Header, vec![ElementType::Title]),
    ///     (ElementType::Title, vec![ElementType::NarrativeText]),
    /// ]);
    /// assert!(ruleset.is_allowed_parent(ElementType::Title, ElementType::Header));
    /// ```
    pub fn from_children_map(
        map: impl IntoIterator<Item = (ElementType, Vec<ElementType>)>,
    ) -> Self {
        let mut ruleset = Self::new();
        for (parent, children) in map {
            // Mentioned parents take part in the outline even with no parent of their own
            ruleset.parents.entry(parent).or_default();
            for child in children {
                ruleset.allow(child, parent);
            }
        }
        ruleset
    }

    /// Allowed parent types for `child`, if the ruleset has an entry for it
    pub fn allowed_parents(&self, child: ElementType) -> Option<&BTreeSet<ElementType>> {
        self.parents.get(&child)
    }

    pub fn is_allowed_parent(&self, child: ElementType, parent: ElementType) -> bool {
        self.parents
            .get(&child)
            .is_some_and(|parents| parents.contains(&parent))
    }

    /// Whether `kind` takes part in the outline at all, as a child or as a parent
    pub fn knows(&self, kind: ElementType) -> bool {
        self.parents.contains_key(&kind) || self.parents.values().any(|p| p.contains(&kind))
    }

    /// Number of child types with an entry
    pub fn rule_count(&self) -> usize {
        self.parents.len()
    }
}

impl Default for Ruleset {
    /// Body text nests under the closest Title; Titles open top-level sections
    fn default() -> Self {
        TITLE_CHILDREN
            .into_iter()
            .fold(Self::new(), |ruleset, child| {
                ruleset.with_rule(child, [ElementType::Title])
            })
    }
}
