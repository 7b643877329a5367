//! Filter engine and gate properties

use proptest::prelude::*;

use exo_vault::catalog::{self, Category};
use exo_vault::filter::{filter, CategoryFilter, TierPartition};
use exo_vault::gate::{evaluate, GateInputs, GateState};
use exo_vault::leads::split_full_name;

fn category_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        Just(CategoryFilter::Only(Category::Sales)),
        Just(CategoryFilter::Only(Category::Operations)),
        Just(CategoryFilter::Only(Category::Hiring)),
        Just(CategoryFilter::Only(Category::Strategy)),
    ]
}

// Queries drawn partly from catalog vocabulary so matches actually occur
fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("AI".to_string()),
        Just("playbook".to_string()),
        Just("SYSTEM".to_string()),
        "[a-zA-Z ]{0,6}",
    ]
}

fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|id| it.any(|candidate| candidate == id))
}

proptest! {
    #[test]
    fn prop_filter_matches_text_and_category(q in query(), category in category_filter()) {
        let catalog = catalog::all();
        let result = filter(catalog, &q, category);
        let needle = q.to_lowercase();

        let expected: Vec<&str> = catalog
            .iter()
            .filter(|r| {
                (r.title.to_lowercase().contains(&needle) || r.description.to_lowercase().contains(&needle))
                    && category.matches(r)
            })
            .map(|r| r.id)
            .collect();
        let actual: Vec<&str> = result.iter().map(|r| r.id).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_partition_is_complete_and_ordered(q in query(), category in category_filter()) {
        let result = filter(catalog::all(), &q, category);
        let partition = TierPartition::split(&result);

        prop_assert_eq!(partition.len(), result.len());

        let all: Vec<&str> = result.iter().map(|r| r.id).collect();
        for section in [&partition.public, &partition.vault, &partition.elite] {
            let ids: Vec<&str> = section.iter().map(|r| r.id).collect();
            prop_assert!(is_subsequence(&ids, &all));
        }
    }

    #[test]
    fn prop_gate_evaluation_is_idempotent(name in "[A-Za-z]{1,12}") {
        let inputs = GateInputs { url_name: Some(&name), persisted_name: None };
        let first = evaluate(&inputs);
        let second = evaluate(&inputs);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.state, GateState::Unlocked { name: name.clone() });
    }

    #[test]
    fn prop_url_name_beats_persisted(url in "[A-Za-z]{1,12}", stored in "[A-Za-z]{1,12}") {
        let decision = evaluate(&GateInputs { url_name: Some(&url), persisted_name: Some(&stored) });
        prop_assert_eq!(decision.state, GateState::Unlocked { name: url });
    }

    #[test]
    fn prop_first_name_is_first_token(first in "[A-Za-z]{1,10}", rest in "( [A-Za-z]{1,10}){0,3}") {
        let full = format!("{}{}", first, rest);
        let (first_name, last_name) = split_full_name(&full);
        prop_assert_eq!(first_name, first);
        prop_assert_eq!(last_name, rest.trim().to_string());
    }
}

#[test]
fn test_empty_query_with_category_is_exact_subset() {
    for category in Category::ALL {
        let result = filter(catalog::all(), "", CategoryFilter::Only(category));
        let expected = catalog::all().iter().filter(|r| r.category == category).count();
        assert_eq!(result.len(), expected);
        assert!(result.iter().all(|r| r.category == category));
    }
}
