use super::Ruleset;
use crate::element::{Element, ensure_unique_ids};
use tracing::{debug, trace, warn};

/// Deepest explicit category depth accepted from an extractor
pub const MAX_CATEGORY_DEPTH: u32 = 32;

/// Assign `parent_id` and `category_depth` to every element.
///
/// Same elements, same order; only the two outline fields change.
pub fn assign_hierarchy(mut elements: Vec<Element>, ruleset: &Ruleset) -> Vec<Element> {
    assign_hierarchy_in_place(&mut elements, ruleset);
    elements
}

/// In-place form of [`assign_hierarchy`].
///
/// Walks the elements once, keeping one active parent candidate per depth
/// level. Slot `d` of the stack holds the index of the most recent element
/// placed at depth `d`; slots deeper than the last placement are cleared.
/// Repeated ids are made unique first so every `parent_id` names one element.
pub fn assign_hierarchy_in_place(elements: &mut [Element], ruleset: &Ruleset) {
    ensure_unique_ids(elements);

    let mut stack: Vec<Option<usize>> = Vec::new();
    let mut roots = 0usize;
    let mut skipped = 0usize;

    for index in 0..elements.len() {
        let kind = elements[index].kind;

        if !kind.is_text_bearing() || !ruleset.knows(kind) {
            elements[index].metadata.parent_id = None;
            skipped += 1;
            trace!(index, %kind, "Element left out of the outline");
            continue;
        }

        let explicit_depth = elements[index].metadata.category_depth;
        let (parent, depth) = match explicit_depth {
            Some(depth) if depth > MAX_CATEGORY_DEPTH => {
                warn!(
                    index,
                    depth,
                    max = MAX_CATEGORY_DEPTH,
                    "Category depth out of range, leaving element out of the outline"
                );
                elements[index].metadata.parent_id = None;
                skipped += 1;
                continue;
            }
            Some(depth) => (parent_above(&stack, depth as usize), depth as usize),
            None => match closest_allowed_parent(&stack, elements, index, ruleset) {
                Some((parent, parent_depth)) => (Some(parent), parent_depth + 1),
                None => (None, 0),
            },
        };

        // A new placement invalidates everything below it
        stack.truncate(depth);
        stack.resize(depth, None);
        stack.push(Some(index));

        let parent_id = parent.map(|p| elements[p].id().clone());
        if parent_id.is_none() {
            roots += 1;
        }
        trace!(index, %kind, depth, parent = ?parent, "Placed element");

        let metadata = &mut elements[index].metadata;
        metadata.parent_id = parent_id;
        metadata.category_depth = Some(depth as u32);
    }

    debug!(
        elements = elements.len(),
        roots, skipped, "Assigned element hierarchy"
    );
}

/// Nearest active candidate at a depth strictly lower than `depth`
fn parent_above(stack: &[Option<usize>], depth: usize) -> Option<usize> {
    stack
        .iter()
        .take(depth)
        .rev()
        .find_map(|slot| *slot)
}

/// Deepest active candidate the ruleset allows as a parent, with its depth
fn closest_allowed_parent(
    stack: &[Option<usize>],
    elements: &[Element],
    index: usize,
    ruleset: &Ruleset,
) -> Option<(usize, usize)> {
    let kind = elements[index].kind;
    stack
        .iter()
        .enumerate()
        .rev()
        .filter_map(|(depth, slot)| slot.map(|candidate| (candidate, depth)))
        .find(|&(candidate, _)| ruleset.is_allowed_parent(kind, elements[candidate].kind))
}
