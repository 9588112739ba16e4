use std::cmp::Ordering;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, Sub};
use std::slice::Iter;
use serde::Serialize;
use serde::de::Deserialize;

/// A set backed by a sorted vector without duplicates. It is meant for sets of a handful of
/// elements, where a vector beats a tree or a hash table.
///
/// Every operation keeps the elements in ascending order, so two sets holding the same
/// elements are always stored identically and comparisons are elementwise.
///
/// Example:
/// ```
/// extern crate algorithm;
/// use algorithm::data_structure::SmallSet;
///
/// let a: SmallSet<i32> = vec![3, 1, 2, 1].into_iter().collect();
/// assert_eq!(a.elements(), &[1, 2, 3]);
/// let b = SmallSet::from_pair(5, 2);
/// assert_eq!((&a | &b).elements(), &[1, 2, 3, 5]);
/// assert_eq!((&a & &b).elements(), &[2]);
/// assert_eq!((&a - &b).elements(), &[1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<T>", from = "Vec<T>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Ord + Deserialize<'de>"))]
pub struct SmallSet<T: Ord> {
    elements: Vec<T>
}

impl<T: Ord> SmallSet<T> {
    pub fn new() -> SmallSet<T> {
        SmallSet { elements: Vec::new() }
    }

    pub fn from_elem(elem: T) -> SmallSet<T> {
        SmallSet { elements: vec![elem] }
    }

    pub fn from_pair(a: T, b: T) -> SmallSet<T> {
        let elements = match a.cmp(&b) {
            Ordering::Less => vec![a, b],
            Ordering::Greater => vec![b, a],
            Ordering::Equal => vec![a],
        };

        SmallSet { elements }
    }

    /// Build a set from an arbitrary iterator; `size_hint` only pre-allocates the storage.
    pub fn from_iter_with_hint<I: IntoIterator<Item=T>>(iter: I, size_hint: usize) -> SmallSet<T> {
        let mut elements = Vec::with_capacity(size_hint);
        elements.extend(iter);
        SmallSet::from(elements)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    pub fn iter(&self) -> Iter<T> {
        self.elements.iter()
    }

    pub fn front(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.elements.binary_search(elem).is_ok()
    }

    /// Position of `elem` in the ascending order, if present
    pub fn position(&self, elem: &T) -> Option<usize> {
        self.elements.binary_search(elem).ok()
    }

    /// Insert `elem`, return false if it was already present
    pub fn insert(&mut self, elem: T) -> bool {
        match self.elements.binary_search(&elem) {
            Ok(_) => false,
            Err(pos) => {
                self.elements.insert(pos, elem);
                true
            }
        }
    }

    /// Remove `elem`, return false if it was not present
    pub fn remove(&mut self, elem: &T) -> bool {
        match self.elements.binary_search(elem) {
            Ok(pos) => {
                self.elements.remove(pos);
                true
            },
            Err(_) => false
        }
    }

    pub fn is_subset_of(&self, other: &SmallSet<T>) -> bool {
        let mut j = 0;
        for elem in &self.elements {
            while j < other.elements.len() && other.elements[j] < *elem {
                j += 1;
            }
            if j == other.elements.len() || other.elements[j] != *elem {
                return false;
            }
            j += 1;
        }

        true
    }

    #[inline]
    pub fn is_superset_of(&self, other: &SmallSet<T>) -> bool {
        other.is_subset_of(self)
    }

    pub fn intersects(&self, other: &SmallSet<T>) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.elements.len() && j < other.elements.len() {
            match self.elements[i].cmp(&other.elements[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => return true,
            }
        }

        false
    }
}

impl<T: Ord + Clone> SmallSet<T> {
    pub fn union(&self, other: &SmallSet<T>) -> SmallSet<T> {
        let mut elements = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.elements.len() && j < other.elements.len() {
            match self.elements[i].cmp(&other.elements[j]) {
                Ordering::Less => {
                    elements.push(self.elements[i].clone());
                    i += 1;
                },
                Ordering::Greater => {
                    elements.push(other.elements[j].clone());
                    j += 1;
                },
                Ordering::Equal => {
                    elements.push(self.elements[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        elements.extend_from_slice(&self.elements[i..]);
        elements.extend_from_slice(&other.elements[j..]);

        SmallSet { elements }
    }

    pub fn intersection(&self, other: &SmallSet<T>) -> SmallSet<T> {
        let mut elements = Vec::with_capacity(self.len().min(other.len()));
        let (mut i, mut j) = (0, 0);
        while i < self.elements.len() && j < other.elements.len() {
            match self.elements[i].cmp(&other.elements[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    elements.push(self.elements[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }

        SmallSet { elements }
    }

    /// Elements of `self` which are not in `other`
    pub fn difference(&self, other: &SmallSet<T>) -> SmallSet<T> {
        let mut elements = Vec::with_capacity(self.len());
        let mut j = 0;
        for elem in &self.elements {
            while j < other.elements.len() && other.elements[j] < *elem {
                j += 1;
            }
            if j == other.elements.len() || other.elements[j] != *elem {
                elements.push(elem.clone());
            }
        }

        SmallSet { elements }
    }
}

impl<T: Ord> Default for SmallSet<T> {
    fn default() -> SmallSet<T> {
        SmallSet::new()
    }
}

impl<T: Ord> From<Vec<T>> for SmallSet<T> {
    fn from(mut elements: Vec<T>) -> SmallSet<T> {
        elements.sort();
        elements.dedup();
        SmallSet { elements }
    }
}

impl<T: Ord> Into<Vec<T>> for SmallSet<T> {
    fn into(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Ord> FromIterator<T> for SmallSet<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> SmallSet<T> {
        SmallSet::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T: Ord> IntoIterator for &'a SmallSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.elements.iter()
    }
}

impl<'a, 'b, T: Ord + Clone> BitOr<&'b SmallSet<T>> for &'a SmallSet<T> {
    type Output = SmallSet<T>;

    fn bitor(self, rhs: &'b SmallSet<T>) -> SmallSet<T> {
        self.union(rhs)
    }
}

impl<'a, 'b, T: Ord + Clone> BitAnd<&'b SmallSet<T>> for &'a SmallSet<T> {
    type Output = SmallSet<T>;

    fn bitand(self, rhs: &'b SmallSet<T>) -> SmallSet<T> {
        self.intersection(rhs)
    }
}

impl<'a, 'b, T: Ord + Clone> Sub<&'b SmallSet<T>> for &'a SmallSet<T> {
    type Output = SmallSet<T>;

    fn sub(self, rhs: &'b SmallSet<T>) -> SmallSet<T> {
        self.difference(rhs)
    }
}
