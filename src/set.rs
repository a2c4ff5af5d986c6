use std::collections::BTreeSet;

use crate::TreeSet;

/// The operations shared by ordered sets of unique elements.
///
/// This is deliberately small: it is what [`TreeSet`] promises, and it is also
/// implemented for the standard library's [`BTreeSet`] so the two can be
/// checked against each other.
pub trait OrderedSet<T>
where
    T: Ord,
{
    /// Inserts `element` unless an equal element is present. Returns whether the set changed.
    fn add(&mut self, element: T) -> bool;

    /// Returns `true` if an element equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Removes the element equal to `element`. Returns whether the set changed.
    fn remove(&mut self, element: &T) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements `e` with `min <= e < max` in ascending order.
    fn subset<'a>(&'a self, min: &T, max: &T) -> Vec<&'a T>;

    /// Returns every element in ascending order.
    fn to_vec_in_order(&self) -> Vec<&T>;
}

impl<T> OrderedSet<T> for TreeSet<T>
where
    T: Ord,
{
    fn add(&mut self, element: T) -> bool {
        TreeSet::add(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        TreeSet::contains(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        TreeSet::remove(self, element)
    }

    fn len(&self) -> usize {
        TreeSet::len(self)
    }

    fn subset<'a>(&'a self, min: &T, max: &T) -> Vec<&'a T> {
        TreeSet::subset(self, min, max)
    }

    fn to_vec_in_order(&self) -> Vec<&T> {
        TreeSet::to_vec_in_order(self)
    }
}

impl<T> OrderedSet<T> for BTreeSet<T>
where
    T: Ord,
{
    fn add(&mut self, element: T) -> bool {
        self.insert(element)
    }

    fn contains(&self, element: &T) -> bool {
        BTreeSet::contains(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        BTreeSet::remove(self, element)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn subset<'a>(&'a self, min: &T, max: &T) -> Vec<&'a T> {
        // `range` panics on an inverted or empty-exclusive interval.
        if min >= max {
            return Vec::new();
        }
        self.range(min..max).collect()
    }

    fn to_vec_in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }
}
