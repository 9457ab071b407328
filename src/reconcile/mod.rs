//! Reconciliation of one target locale against the source mapping.

use crate::document::EntryMap;

/// Result of reconciling one target against the source.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    /// Target entries after injecting missing source keys.
    pub entries: EntryMap,
    /// Keys copied from the source, in source enumeration order.
    pub added: Vec<String>,
    /// Keys present in the original target but absent from the source, in
    /// the target's original enumeration order.
    pub orphans: Vec<String>,
}

/// Inject missing source keys into a copy of `target` and collect orphans.
///
/// A key already present in the target is never overwritten, even when its
/// value differs from the source: an existing translation always wins. An
/// injected key carries the source value verbatim as a placeholder, with
/// no marker distinguishing it from a real translation.
///
/// Orphans are computed against the original target, before injection, and
/// are only reported; removing them is left to a human.
pub fn reconcile(source: &EntryMap, target: &EntryMap) -> ReconcileOutcome {
    let mut entries = target.clone();
    let mut added = Vec::new();

    for (key, value) in source {
        if !entries.contains_key(key) {
            entries.insert(key.clone(), value.clone());
            added.push(key.clone());
        }
    }

    let orphans = target
        .keys()
        .filter(|key| !source.contains_key(key.as_str()))
        .cloned()
        .collect();

    ReconcileOutcome {
        entries,
        added,
        orphans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Scalar;

    fn entries(pairs: &[(&str, &str)]) -> EntryMap {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), Scalar::from(*value)))
            .collect()
    }

    #[test]
    fn test_missing_keys_are_injected_with_source_value() {
        let source = entries(&[("a", "A"), ("b", "B")]);
        let target = entries(&[("b", "translated")]);

        let outcome = reconcile(&source, &target);

        assert_eq!(outcome.entries["a"], Scalar::from("A"));
        assert_eq!(outcome.added, ["a"]);
    }

    #[test]
    fn test_existing_translations_never_overwritten() {
        let source = entries(&[("b", "B")]);
        let target = entries(&[("b", "translated")]);

        let outcome = reconcile(&source, &target);

        assert_eq!(outcome.entries["b"], Scalar::from("translated"));
        assert!(outcome.added.is_empty());
    }

    #[test]
    fn test_result_is_superset_of_source_keys() {
        let source = entries(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let target = entries(&[("b", "translated"), ("z", "extra")]);

        let outcome = reconcile(&source, &target);

        for key in source.keys() {
            assert!(outcome.entries.contains_key(key.as_str()));
        }
    }

    #[test]
    fn test_orphans_match_original_target_order() {
        let source = entries(&[("a", "A")]);
        let target = entries(&[("z", "Z"), ("a", "translated"), ("m", "M")]);

        let outcome = reconcile(&source, &target);

        assert_eq!(outcome.orphans, ["z", "m"]);
    }

    #[test]
    fn test_orphans_stay_in_entries() {
        let source = entries(&[("a", "A")]);
        let target = entries(&[("z", "Z")]);

        let outcome = reconcile(&source, &target);

        assert_eq!(outcome.entries["z"], Scalar::from("Z"));
        assert_eq!(outcome.orphans, ["z"]);
    }

    #[test]
    fn test_empty_target_gets_every_source_key() {
        let source = entries(&[("b", "B"), ("a", "A")]);
        let target = EntryMap::new();

        let outcome = reconcile(&source, &target);

        assert_eq!(outcome.added, ["b", "a"]);
        assert!(outcome.orphans.is_empty());
        assert_eq!(outcome.entries.len(), 2);
    }

    #[test]
    fn test_identical_mappings_are_a_no_op() {
        let source = entries(&[("a", "A")]);

        let outcome = reconcile(&source, &source.clone());

        assert!(outcome.added.is_empty());
        assert!(outcome.orphans.is_empty());
        assert_eq!(outcome.entries, source);
    }
}
