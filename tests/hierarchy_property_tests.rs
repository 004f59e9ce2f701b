// Property-based tests for hierarchy assignment

use doctown_outline::{Element, ElementType, Outline, Ruleset, assign_hierarchy};
use proptest::prelude::*;
use std::collections::HashMap;

fn kind_strategy() -> impl Strategy<Value = ElementType> {
    prop_oneof![
        Just(ElementType::Title),
        Just(ElementType::NarrativeText),
        Just(ElementType::Text),
        Just(ElementType::ListItem),
        Just(ElementType::Table),
        Just(ElementType::Header),
        Just(ElementType::CheckBox),
        Just(ElementType::Image),
    ]
}

fn elements_strategy() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(
        (kind_strategy(), "[a-z ]{0,20}", prop::option::weighted(0.3, 0u32..5)),
        0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, text, depth))| {
                let mut element = Element::with_id(format!("e{}", i), kind, text);
                element.metadata.category_depth = depth;
                element
            })
            .collect()
    })
}

fn list_ruleset() -> Ruleset {
    Ruleset::default().with_rule(ElementType::ListItem, [ElementType::Title, ElementType::ListItem])
}

proptest! {
    /// Parents always come earlier in document order and sit at a shallower depth
    #[test]
    fn prop_parents_precede_children(elements in elements_strategy()) {
        let ruleset = list_ruleset();
        let assigned = assign_hierarchy(elements, &ruleset);
        let positions: HashMap<_, _> = assigned
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id().clone(), i))
            .collect();

        for (index, element) in assigned.iter().enumerate() {
            if let Some(parent_id) = element.parent_id() {
                let parent_index = positions[parent_id];
                prop_assert!(parent_index < index);

                let parent_depth = assigned[parent_index].category_depth().unwrap();
                let child_depth = element.category_depth().unwrap();
                prop_assert!(parent_depth < child_depth);
            }
        }
    }

    /// Inferred depths are exactly one below the chosen parent
    #[test]
    fn prop_inferred_depth_follows_parent(elements in elements_strategy()) {
        let implicit: Vec<Element> = elements
            .into_iter()
            .map(|mut e| {
                e.metadata.category_depth = None;
                e
            })
            .collect();
        let assigned = assign_hierarchy(implicit, &list_ruleset());
        let by_id: HashMap<_, _> = assigned.iter().map(|e| (e.id().clone(), e)).collect();

        for element in &assigned {
            if let Some(parent_id) = element.parent_id() {
                let parent = by_id[parent_id];
                prop_assert!(list_ruleset().is_allowed_parent(element.kind, parent.kind));
                prop_assert_eq!(
                    element.category_depth(),
                    parent.category_depth().map(|d| d + 1)
                );
            }
        }
    }

    /// Types without text never receive a parent
    #[test]
    fn prop_textless_types_stay_out(elements in elements_strategy()) {
        let assigned = assign_hierarchy(elements, &list_ruleset());
        for element in assigned.iter().filter(|e| !e.kind.is_text_bearing()) {
            prop_assert!(element.parent_id().is_none());
        }
    }

    /// Order, ids and text are untouched
    #[test]
    fn prop_assignment_preserves_elements(elements in elements_strategy()) {
        let assigned = assign_hierarchy(elements.clone(), &list_ruleset());
        prop_assert_eq!(assigned.len(), elements.len());
        for (before, after) in elements.iter().zip(&assigned) {
            prop_assert_eq!(before.id(), after.id());
            prop_assert_eq!(before.kind, after.kind);
            prop_assert_eq!(&before.text, &after.text);
        }
    }

    /// The parent links form a forest: every ancestor chain ends at a root
    #[test]
    fn prop_outline_is_acyclic(elements in elements_strategy()) {
        let assigned = assign_hierarchy(elements, &list_ruleset());
        let outline = Outline::build(&assigned);

        for element in &assigned {
            let ancestors = outline.ancestors(element.id());
            prop_assert!(ancestors.len() < assigned.len().max(1));
            if let Some(top) = ancestors.last() {
                prop_assert!(top.parent_id().is_none());
            }
        }
    }

    #[test]
    fn prop_assignment_is_deterministic(elements in elements_strategy()) {
        let first = assign_hierarchy(elements.clone(), &list_ruleset());
        let second = assign_hierarchy(elements, &list_ruleset());
        prop_assert_eq!(first, second);
    }
}
