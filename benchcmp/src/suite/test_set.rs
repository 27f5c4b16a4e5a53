//!
//! The set of benchmark binary names.
//!

use std::collections::BTreeSet;

///
/// The set of benchmark binary names of a suite.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestSet {
    /// The binary names.
    names: BTreeSet<String>,
}

impl TestSet {
    ///
    /// Adds a binary name.
    ///
    pub fn insert(&mut self, name: String) -> bool {
        self.names.insert(name)
    }

    ///
    /// Whether the set contains `name`.
    ///
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    ///
    /// The number of binary names.
    ///
    pub fn len(&self) -> usize {
        self.names.len()
    }

    ///
    /// Whether the set has no names.
    ///
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    ///
    /// Returns the names present in both sets.
    ///
    pub fn intersect(&self, other: &Self) -> Self {
        self.names.intersection(&other.names).cloned().collect()
    }

    ///
    /// Returns the names in lexicographic order.
    ///
    pub fn sorted(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl FromIterator<String> for TestSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
