//! Ordered set
//!
//! `Set<T>` keeps its elements in insertion order and never holds two equal
//! elements at once. Uniqueness is decided by `PartialEq`, so elements only
//! need structural equality (no hashing or ordering), which lets the automata
//! store sets of states and the tests store sets of composite records alike.
//!
//! Equality between two sets ignores order: two sets are equal when they have
//! the same size and every element of one is contained in the other.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Serialize)]
#[serde(transparent)]
pub struct Set<T> {
    elements: Vec<T>,
}

impl<T: PartialEq> Set<T> {
    pub fn new() -> Self {
        Set {
            elements: Vec::new(),
        }
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    /// Adds the element if no equal element is present.
    ///
    /// Returns true if the element was inserted.
    pub fn add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Removes the element if present, keeping the order of the rest.
    ///
    /// Returns true if something was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(idx) => {
                self.elements.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Element at the given insertion position.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.elements.get(idx)
    }

    /// Order-independent equality: same size and mutual containment.
    pub fn equals(&self, rhs: &Set<T>) -> bool {
        self.len() == rhs.len() && self.iter().all(|e| rhs.contains(e))
    }
}

impl<T: PartialEq + Clone> Set<T> {
    /// Independent value copy of this set.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Elements of `self` followed by the elements of `rhs` not already present.
    pub fn union(&self, rhs: &Set<T>) -> Set<T> {
        let mut result = self.copy();
        for element in rhs.iter() {
            result.add(element.clone());
        }
        result
    }

    /// Elements of `self` that are also in `rhs`, in `self`'s order.
    pub fn intersect(&self, rhs: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|e| rhs.contains(e))
            .cloned()
            .collect()
    }

    /// Elements of `self` that are not in `rhs`, in `self`'s order.
    pub fn subtract(&self, rhs: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|e| !rhs.contains(e))
            .cloned()
            .collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: PartialEq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
