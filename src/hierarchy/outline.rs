use crate::element::{Element, ElementId};
use std::collections::HashMap;

/// Read-only tree view over hierarchy-annotated elements.
///
/// Nodes are indices into the borrowed slice; `parent_id` references that
/// point outside the slice are treated as roots.
pub struct Outline<'a> {
    elements: &'a [Element],
    index: HashMap<&'a ElementId, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

impl<'a> Outline<'a> {
    pub fn build(elements: &'a [Element]) -> Self {
        let mut index = HashMap::with_capacity(elements.len());
        for (position, element) in elements.iter().enumerate() {
            // First occurrence wins when ids repeat
            index.entry(element.id()).or_insert(position);
        }

        let mut parents = vec![None; elements.len()];
        let mut children = vec![Vec::new(); elements.len()];
        let mut roots = Vec::new();

        for (position, element) in elements.iter().enumerate() {
            // Parents always precede their children; anything else is ignored
            let parent = element
                .parent_id()
                .and_then(|id| index.get(id).copied())
                .filter(|&parent| parent < position);

            match parent {
                Some(parent) => {
                    parents[position] = Some(parent);
                    children[parent].push(position);
                }
                None => roots.push(position),
            }
        }

        Self {
            elements,
            index,
            parents,
            children,
            roots,
        }
    }

    /// Elements with no parent, in document order
    pub fn roots(&self) -> impl Iterator<Item = &'a Element> + '_ {
        self.roots.iter().map(|&i| &self.elements[i])
    }

    pub fn get(&self, id: &ElementId) -> Option<&'a Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    pub fn parent(&self, id: &ElementId) -> Option<&'a Element> {
        let position = *self.index.get(id)?;
        self.parents[position].map(|p| &self.elements[p])
    }

    /// Direct children of `id`, in document order
    pub fn children(&self, id: &ElementId) -> Vec<&'a Element> {
        match self.index.get(id) {
            Some(&position) => self.children[position]
                .iter()
                .map(|&c| &self.elements[c])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Ancestors of `id`, nearest first
    pub fn ancestors(&self, id: &ElementId) -> Vec<&'a Element> {
        let mut ancestors = Vec::new();
        let mut current = self.index.get(id).and_then(|&i| self.parents[i]);
        while let Some(position) = current {
            ancestors.push(&self.elements[position]);
            current = self.parents[position];
        }
        ancestors
    }

    /// Number of edges between `id` and its root
    pub fn depth_of(&self, id: &ElementId) -> Option<usize> {
        self.index.get(id)?;
        Some(self.ancestors(id).len())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
