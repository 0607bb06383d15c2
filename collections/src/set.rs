use hashbrown::{Equivalent, HashMap};
use itertools::Itertools;
use rand::Rng;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use thiserror::Error;

/// Error returned when a random element is requested from an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick a random element from an empty set")]
pub struct SetEmpty;

/// A set of elements with no associated values.
pub type LabelSet<T> = Set<T, ()>;

/// A collection of unique elements of type `T`, each associated with a value of type `V`.
///
/// The element is the identity of an entry: inserting an element that is already present
/// overwrites its value. Values play no role in membership, comparison or subset tests.
/// When only membership matters, use [`LabelSet`], which associates the unit type to
/// every element.
///
/// No ordering is defined among elements: two sets with the same elements are
/// interchangeable for all structural comparisons, and all iteration happens in an
/// unspecified order.
///
/// Set-algebra operations ([`union`](Set::union), [`intersection`](Set::intersection),
/// [`difference`](Set::difference), [`symmetric_difference`](Set::symmetric_difference))
/// and functional transforms ([`filter`](Set::filter), [`map`](Set::map), ...) leave
/// their operands untouched and return a new set.
#[derive(Clone)]
pub struct Set<T, V = ()> {
    entries: HashMap<T, V>,
}

impl<T, V> Set<T, V> {
    pub fn new() -> Set<T, V> {
        Set {
            entries: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Set<T, V> {
        Set {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Iterates over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &V)> + '_ {
        self.entries.iter()
    }

    /// Iterates over all elements, ignoring the values, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.keys()
    }

    /// Returns all elements (without values) as a freshly allocated vector, in no
    /// particular order. The result is an independent snapshot: changes to it do not
    /// interfere with the set. An empty set yields an empty vector.
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.keys().cloned().collect()
    }
}

impl<T: Eq + Hash, V> Set<T, V> {
    /// Inserts an element with an associated value.
    /// If the element was already present, its value is overwritten and the previous
    /// value is returned.
    pub fn insert(&mut self, element: T, value: V) -> Option<V> {
        self.entries.insert(element, value)
    }

    /// Inserts an element with the default value of `V`.
    /// Equivalent to [`insert`](Set::insert) for sets where only membership matters.
    pub fn insert_default(&mut self, element: T) -> Option<V>
    where
        V: Default,
    {
        self.entries.insert(element, V::default())
    }

    /// Removes an element, returning its value. Does nothing if the element is absent.
    pub fn remove<Q: Hash + Equivalent<T> + ?Sized>(&mut self, element: &Q) -> Option<V> {
        self.entries.remove(element)
    }

    /// Copies every entry of `other` into this set. On conflict, `other`'s value wins.
    /// `other` is left untouched.
    pub fn insert_all(&mut self, other: &Set<T, V>)
    where
        T: Clone,
        V: Clone,
    {
        for (elem, value) in other {
            self.entries.insert(elem.clone(), value.clone());
        }
    }

    /// Removes every element present in `other`, whatever value it carries there.
    /// `other` is left untouched.
    pub fn remove_all<W>(&mut self, other: &Set<T, W>) {
        for elem in other.keys() {
            self.entries.remove(elem);
        }
    }

    /// Membership test, ignoring the value: the element's value in this set may well
    /// differ from the value the caller associates with it.
    pub fn contains<Q: Hash + Equivalent<T> + ?Sized>(&self, element: &Q) -> bool {
        self.entries.contains_key(element)
    }

    /// Returns the value associated with the given element, if present.
    pub fn get<Q: Hash + Equivalent<T> + ?Sized>(&self, element: &Q) -> Option<&V> {
        self.entries.get(element)
    }

    /// Checks whether both sets contain exactly the same elements, ignoring the values.
    ///
    /// This is weaker than `==`, which also compares the associated values.
    pub fn same_elements<W>(&self, other: &Set<T, W>) -> bool {
        self.len() == other.len() && self.keys().all(|elem| other.contains(elem))
    }

    /// Checks whether every element of this set is in `other`, ignoring the values.
    /// The empty set is a subset of every set; no non-empty set is a subset of the
    /// empty set.
    pub fn is_subset<W>(&self, other: &Set<T, W>) -> bool {
        self.len() <= other.len() && self.keys().all(|elem| other.contains(elem))
    }

    /// Returns a new set with the elements present in both this set and `other`.
    /// The value of each common element is taken from `other`, not from this set.
    pub fn intersection(&self, other: &Set<T, V>) -> Set<T, V>
    where
        T: Clone,
        V: Clone,
    {
        let mut result = Set::with_capacity(self.len().min(other.len()));
        for (elem, value) in other {
            if self.contains(elem) {
                result.insert(elem.clone(), value.clone());
            }
        }
        result
    }

    /// Returns a new set with the elements of both this set and `other`.
    /// `other`'s entries are inserted after this set's, so on conflict `other`'s
    /// value wins.
    pub fn union(&self, other: &Set<T, V>) -> Set<T, V>
    where
        T: Clone,
        V: Clone,
    {
        let mut result = self.clone();
        result.insert_all(other);
        result
    }

    /// Returns a new set with the elements present in exactly one of the two sets
    /// (symmetric difference), each keeping its original value.
    pub fn symmetric_difference(&self, other: &Set<T, V>) -> Set<T, V>
    where
        T: Clone,
        V: Clone,
    {
        let mut result = Set::new();
        for (elem, value) in self {
            if !other.contains(elem) {
                result.insert(elem.clone(), value.clone());
            }
        }
        for (elem, value) in other {
            if !self.contains(elem) {
                result.insert(elem.clone(), value.clone());
            }
        }
        result
    }

    /// Returns a new set with the elements of this set that are not in `other`,
    /// keeping this set's values. The values carried by `other` are irrelevant.
    pub fn difference<W>(&self, other: &Set<T, W>) -> Set<T, V>
    where
        T: Clone,
        V: Clone,
    {
        let mut result = Set::new();
        for (elem, value) in self {
            if !other.contains(elem) {
                result.insert(elem.clone(), value.clone());
            }
        }
        result
    }

    /// Returns a new set with the entries for which the predicate holds.
    pub fn filter<F: FnMut(&T, &V) -> bool>(&self, mut predicate: F) -> Set<T, V>
    where
        T: Clone,
        V: Clone,
    {
        let mut result = Set::new();
        for (elem, value) in self {
            if predicate(elem, value) {
                result.insert(elem.clone(), value.clone());
            }
        }
        result
    }

    /// Returns a new set built by applying `f` to every entry and inserting the results.
    ///
    /// If `f` maps two distinct elements to the same element, the entry iterated last
    /// silently overwrites the earlier one. Since iteration order is unspecified, which
    /// value survives such a collision is not deterministic.
    pub fn map<F: FnMut(&T, &V) -> (T, V)>(&self, mut f: F) -> Set<T, V> {
        let mut result = Set::with_capacity(self.len());
        for (elem, value) in self {
            let (new_elem, new_value) = f(elem, value);
            result.insert(new_elem, new_value);
        }
        result
    }

    /// Applies `f` to every entry and collects the results into a plain map, possibly
    /// of a different key/value type pair. Key collisions behave as in [`map`](Set::map).
    pub fn map_entries<U: Eq + Hash, W, F: FnMut(&T, &V) -> (U, W)>(&self, mut f: F) -> HashMap<U, W> {
        let mut result = HashMap::with_capacity(self.len());
        for (elem, value) in self {
            let (new_key, new_value) = f(elem, value);
            result.insert(new_key, new_value);
        }
        result
    }

    /// Applies `f` to every entry and collects the results into a vector, one item per
    /// entry, in no particular order.
    pub fn map_to_vec<U, F: FnMut(&T, &V) -> U>(&self, mut f: F) -> Vec<U> {
        self.iter().map(|(elem, value)| f(elem, value)).collect()
    }

    /// Folds over all entries, in no particular order, starting from `init`.
    pub fn fold<A, F: FnMut(A, &T, &V) -> A>(&self, init: A, mut f: F) -> A {
        let mut acc = init;
        for (elem, value) in self {
            acc = f(acc, elem, value);
        }
        acc
    }

    /// Renders the set as `elem (value), ...`, in no particular order.
    /// The value-less rendering is provided by the `Display` implementation.
    pub fn to_string_with_values(&self) -> String
    where
        T: Display,
        V: Display,
    {
        self.iter().map(|(elem, value)| format!("{elem} ({value})")).join(", ")
    }

    /// Returns one uniformly-random entry, drawn with the thread-local generator of the
    /// `rand` crate (a cryptographically secure PRNG).
    ///
    /// Fails with [`SetEmpty`] if the set is empty.
    pub fn pick_random(&self) -> Result<(&T, &V), SetEmpty> {
        self.pick_random_with(&mut rand::rng())
    }

    /// Returns one uniformly-random entry, drawn with the given generator.
    ///
    /// A uniform index in `[0, len)` is drawn, then the (unordered) entry iteration is
    /// walked up to that index: O(n), as the backing map offers no indexed access.
    /// The draw is independent of the iteration order, so each element is selected with
    /// probability `1/len`. Fails with [`SetEmpty`] if the set is empty.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(&T, &V), SetEmpty> {
        if self.is_empty() {
            return Err(SetEmpty);
        }
        let index = rng.random_range(0..self.len());
        Ok(self.entries.iter().nth(index).unwrap())
    }
}

impl<T, V> Default for Set<T, V> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T: Debug, V: Debug> Debug for Set<T, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &self.entries)
    }
}

/// Renders the elements joined by `", "`, in no particular order, without the values.
/// An empty set renders as the empty string.
impl<T: Display, V> Display for Set<T, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entries.keys().join(", "))
    }
}

/// Entry-wise equality, including the associated values.
/// For the element-only comparison, see [`Set::same_elements`].
impl<T: Eq + Hash, V: PartialEq> PartialEq for Set<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
impl<T: Eq + Hash, V: Eq> Eq for Set<T, V> {}

impl<T: Eq + Hash, V> FromIterator<(T, V)> for Set<T, V> {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        Set {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Collects bare elements, associating the default value of `V` to each.
impl<T: Eq + Hash, V: Default> FromIterator<T> for Set<T, V> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().map(|elem| (elem, V::default())).collect()
    }
}

impl<T: Eq + Hash, V, const N: usize> From<[(T, V); N]> for Set<T, V> {
    fn from(entries: [(T, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<T: Eq + Hash, V> Extend<(T, V)> for Set<T, V> {
    fn extend<I: IntoIterator<Item = (T, V)>>(&mut self, iter: I) {
        self.entries.extend(iter)
    }
}

/// Extends with bare elements, associating the default value of `V` to each.
impl<T: Eq + Hash, V: Default> Extend<T> for Set<T, V> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(|elem| (elem, V::default())))
    }
}

impl<T, V> IntoIterator for Set<T, V> {
    type Item = (T, V);
    type IntoIter = hashbrown::hash_map::IntoIter<T, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T, V> IntoIterator for &'a Set<T, V> {
    type Item = (&'a T, &'a V);
    type IntoIter = hashbrown::hash_map::Iter<'a, T, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
