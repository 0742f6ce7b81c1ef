//! Property tests, using `BTreeSet` as oracle.

use std::collections::BTreeSet;

use big_set::{BigSet, algorithm};
use proptest::prelude::*;

/// Maximum member for property tests.
///
/// Kept small enough that exhaustive membership checks are fast, yet spanning several words.
const MAX_MEMBER: u32 = 2_048;

fn arb_members() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..MAX_MEMBER, 0..128)
}

fn make_pair(members: &[u32]) -> (BigSet, BTreeSet<u32>) {
    let set = BigSet::from_members(members.iter().copied()).expect("non-negative");
    let oracle: BTreeSet<u32> = members.iter().copied().collect();

    (set, oracle)
}

#[track_caller]
fn assert_matches(set: &BigSet, oracle: &BTreeSet<u32>) {
    assert_eq!(oracle.len(), set.len());

    for n in 0..MAX_MEMBER {
        assert_eq!(oracle.contains(&n), set.contains(n), "contains({n})");
    }
}

proptest! {
    #[test]
    fn contains_matches_oracle(inserted in arb_members(), removed in arb_members()) {
        let (mut set, mut oracle) = make_pair(&inserted);

        for n in &removed {
            prop_assert_eq!(oracle.remove(n), set.remove(*n).expect("non-negative"));
        }

        assert_matches(&set, &oracle);
    }

    #[test]
    fn union_matches_oracle(a in arb_members(), b in arb_members()) {
        let ((s, s_oracle), (t, t_oracle)) = (make_pair(&a), make_pair(&b));

        let expected: BTreeSet<u32> = s_oracle.union(&t_oracle).copied().collect();

        assert_matches(&algorithm::union(&s, &t), &expected);
    }

    #[test]
    fn intersection_matches_oracle(a in arb_members(), b in arb_members()) {
        let ((s, s_oracle), (t, t_oracle)) = (make_pair(&a), make_pair(&b));

        let expected: BTreeSet<u32> = s_oracle.intersection(&t_oracle).copied().collect();

        assert_matches(&algorithm::intersection(&s, &t), &expected);
    }

    #[test]
    fn difference_matches_oracle(a in arb_members(), b in arb_members()) {
        let ((s, s_oracle), (t, t_oracle)) = (make_pair(&a), make_pair(&b));

        let expected: BTreeSet<u32> = s_oracle.difference(&t_oracle).copied().collect();

        assert_matches(&algorithm::difference(&s, &t), &expected);
    }

    #[test]
    fn symmetric_difference_matches_oracle(a in arb_members(), b in arb_members()) {
        let ((s, s_oracle), (t, t_oracle)) = (make_pair(&a), make_pair(&b));

        let expected: BTreeSet<u32> = s_oracle.symmetric_difference(&t_oracle).copied().collect();

        assert_matches(&algorithm::symmetric_difference(&s, &t), &expected);
    }

    #[test]
    fn predicates_match_oracle(a in arb_members(), b in arb_members()) {
        let ((s, s_oracle), (t, t_oracle)) = (make_pair(&a), make_pair(&b));

        prop_assert_eq!(s_oracle.is_subset(&t_oracle), s.is_subset(&t));
        prop_assert_eq!(s_oracle.is_superset(&t_oracle), s.is_superset(&t));
        prop_assert_eq!(s_oracle.is_disjoint(&t_oracle), s.is_disjoint(&t));
        prop_assert_eq!(s.is_subset(&t), t.is_superset(&s));
    }

    #[test]
    fn in_place_matches_pure(a in arb_members(), b in arb_members()) {
        let ((s, _), (t, _)) = (make_pair(&a), make_pair(&b));

        let mut union = s.clone();
        union |= &t;

        let mut intersection = s.clone();
        intersection &= &t;

        let mut difference = s.clone();
        difference -= &t;

        let mut symmetric = s.clone();
        symmetric ^= &t;

        prop_assert_eq!(algorithm::union(&s, &t), union);
        prop_assert_eq!(algorithm::intersection(&s, &t), intersection);
        prop_assert_eq!(algorithm::difference(&s, &t), difference);
        prop_assert_eq!(algorithm::symmetric_difference(&s, &t), symmetric);
    }

    #[test]
    fn idempotence(a in arb_members()) {
        let (s, _) = make_pair(&a);

        prop_assert_eq!(&s, &algorithm::union(&s, &s));
        prop_assert_eq!(&s, &algorithm::intersection(&s, &s));
        prop_assert_eq!(0, algorithm::symmetric_difference(&s, &s).len());
    }

    #[test]
    fn empty_identities(a in arb_members()) {
        let (s, _) = make_pair(&a);
        let empty = BigSet::new();

        prop_assert_eq!(&s, &algorithm::union(&s, &empty));
        prop_assert_eq!(0, algorithm::intersection(&s, &empty).len());
        prop_assert_eq!(&s, &algorithm::difference(&s, &empty));
    }
}
