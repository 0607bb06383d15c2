//! End-to-end exercise of the set API on a concrete scenario, plus randomized
//! checks of the algebraic identities.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use valset::Set;

fn s1() -> Set<&'static str, &'static str> {
    Set::from([
        ("apple", "red"),
        ("banana", "yellow"),
        ("cherry", "dark red"),
        ("brick", "red"),
    ])
}

fn s2() -> Set<&'static str, &'static str> {
    Set::from([("apple", "green"), ("banana", "brownish"), ("mango", "green-orange")])
}

#[test]
fn fruit_scenario() {
    let s1 = s1();
    let s2 = s2();

    let common = s1.intersection(&s2);
    assert_eq!(common.len(), 2);
    let mut elements = common.elements();
    elements.sort_unstable();
    assert_eq!(elements, vec!["apple", "banana"]);
    assert_eq!(common.get(&"apple"), Some(&"green"));
    assert_eq!(common.get(&"banana"), Some(&"brownish"));

    let rest = s1.difference(&s2);
    assert_eq!(rest, Set::from([("cherry", "dark red"), ("brick", "red")]));

    assert!(!s1.same_elements(&s2));
    assert!(common.is_subset(&s1));
}

#[test]
fn transform_pipeline() {
    let s1 = s1();

    let with_c = s1.filter(|elem, _| elem.contains('c'));
    assert!(with_c.same_elements(&Set::<&str>::from_iter(["cherry", "brick"])));

    let owned: Set<String, String> = s1
        .map_entries(|elem, value| (elem.to_string(), value.to_string()))
        .into_iter()
        .collect();
    let upper = owned.map(|elem, value| (elem.to_uppercase(), format!("color: {}", value.to_uppercase())));
    assert_eq!(upper.len(), 4);
    assert_eq!(upper.get("CHERRY"), Some(&"color: DARK RED".to_string()));

    let lengths = s1.map_entries(|elem, value| (elem.to_string(), value.len()));
    assert_eq!(lengths.len(), 4);
    assert_eq!(lengths["cherry"], 8);

    let mut lines = s1.map_to_vec(|elem, value| format!("{elem} is {value}"));
    lines.sort();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "apple is red");

    let red_count = s1.fold(0, |acc, _, value| if value.contains("red") { acc + 1 } else { acc });
    assert_eq!(red_count, 3);
}

#[test]
fn algebra_identities_on_random_sets() {
    let mut rng = SmallRng::seed_from_u64(982374892);

    for _ in 0..100 {
        let a: Set<u32, u32> = (0..rng.random_range(0..40))
            .map(|_| (rng.random_range(0..50), rng.random_range(0..1000)))
            .collect();
        let b: Set<u32, u32> = (0..rng.random_range(0..40))
            .map(|_| (rng.random_range(0..50), rng.random_range(0..1000)))
            .collect();

        let inter = a.intersection(&b);
        assert!(inter.len() <= a.len().min(b.len()));
        assert!(inter.keys().all(|e| a.contains(e) && b.contains(e)));
        assert!(inter.is_subset(&a) && inter.is_subset(&b));

        let union = a.union(&b);
        assert!(a.is_subset(&union) && b.is_subset(&union));
        assert!(union.keys().all(|e| a.contains(e) || b.contains(e)));

        let diff = a.difference(&b);
        assert!(diff.keys().all(|e| a.contains(e) && !b.contains(e)));
        assert!(a.keys().all(|e| diff.contains(e) || b.contains(e)));

        // symmetric difference is the union minus the intersection
        let sym = a.symmetric_difference(&b);
        assert!(sym.same_elements(&union.difference(&inter)));

        // and the union of the two one-sided differences
        assert!(sym.same_elements(&diff.union(&b.difference(&a))));

        assert!(a.clone().same_elements(&a));
        assert!(a.is_subset(&a));
    }
}

#[test]
fn mutating_a_copy_leaves_the_original_untouched() {
    let original = s1();
    let mut copy = original.clone();

    copy.insert("kiwi", "green");
    copy.remove(&"apple");
    copy.clear();

    assert_eq!(original, s1());
    assert!(copy.is_empty());

    let mut other = s2();
    let union = original.union(&other);
    other.clear();
    assert_eq!(union.len(), 5);
    assert_eq!(original, s1());
}
