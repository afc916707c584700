//! Property-based tests over random operation sequences.
//!
//! A simple model (a set of ids) is updated alongside the real registry; after
//! every step the registry's membership must match the model, every member
//! must still be subscribed, and every non-member must be detached.


use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use custodia_registry::Resource;
use proptest::prelude::*;
use test_utils::{EventLog, MockRegistry, MockResource, sorted_ids};

#[derive(Clone, Debug)]
enum Op {
    Add { id: u8, initialize: bool },
    Remove { id: u8 },
    RemoveAndDispose { id: u8 },
    SelfDispose { id: u8 },
    Initialize { id: u8 },
}

fn arb_op() -> impl Strategy<Value = Op> {
    let id = 0u8..6;
    prop_oneof![
        (id.clone(), any::<bool>()).prop_map(|(id, initialize)| Op::Add { id, initialize }),
        id.clone().prop_map(|id| Op::Remove { id }),
        id.clone().prop_map(|id| Op::RemoveAndDispose { id }),
        id.clone().prop_map(|id| Op::SelfDispose { id }),
        id.prop_map(|id| Op::Initialize { id }),
    ]
}

fn key(id: u8) -> String {
    format!("r{id}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Membership, subscriptions, and event counts track a set model.
    #[test]
    fn prop_registry_matches_set_model(ops in prop::collection::vec(arb_op(), 1..40)) {
        let registry = MockRegistry::new();
        let log = EventLog::attach(&registry);
        let mut model = BTreeSet::new();
        let mut handles: HashMap<String, Arc<MockResource>> = HashMap::new();
        let mut expected_removed = 0;
        let mut expected_disposed = 0;

        for op in ops {
            match op {
                Op::Add { id, initialize } => {
                    let result = registry.add(MockResource::new(key(id)), initialize);
                    if model.insert(key(id)) {
                        let resource = result.expect("add of fresh id should succeed");
                        prop_assert_eq!(resource.is_initialized(), initialize);
                        handles.insert(key(id), resource);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Remove { id } => {
                    let removed = registry.remove(&key(id));
                    prop_assert_eq!(removed.is_some(), model.remove(&key(id)));
                    if removed.is_some() {
                        expected_removed += 1;
                    }
                }
                Op::RemoveAndDispose { id } => {
                    let found = registry
                        .remove_and_dispose(&key(id))
                        .expect("dispose should succeed");
                    prop_assert_eq!(found, model.remove(&key(id)));
                    if found {
                        expected_removed += 1;
                    }
                }
                Op::SelfDispose { id } => {
                    if model.remove(&key(id)) {
                        handles[&key(id)].dispose().expect("dispose should succeed");
                        expected_disposed += 1;
                    }
                }
                Op::Initialize { id } => {
                    prop_assert_eq!(
                        registry.initialize(&key(id)).is_ok(),
                        model.contains(&key(id))
                    );
                }
            }

            let expected: Vec<String> = model.iter().cloned().collect();
            prop_assert_eq!(sorted_ids(&registry), expected);
            for (id, resource) in &handles {
                prop_assert_eq!(resource.signals().is_attached(), model.contains(id));
            }
        }

        prop_assert_eq!(log.count("OnResourceRemoved"), expected_removed);
        prop_assert_eq!(log.count("OnResourceDisposed"), expected_disposed);

        registry.dispose().expect("teardown should succeed");
        prop_assert!(registry.is_empty());
        for resource in handles.values() {
            prop_assert!(resource.dispose_calls() <= 1);
        }
    }
}
