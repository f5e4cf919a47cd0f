use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// A counted set: equal values are kept as separate occurrences.
///
/// Distinct values iterate in first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<V: Eq + Hash> {
    counts: IndexMap<V, usize>,
    len: usize,
}

impl<V: Eq + Hash> Multiset<V> {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, value: V) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    /// Removes one occurrence of `value`. Returns false if there was none.
    pub fn remove_one(&mut self, value: &V) -> bool {
        let Some(count) = self.counts.get_mut(value) else {
            return false;
        };

        *count -= 1;
        if *count == 0 {
            self.counts.shift_remove(value);
        }
        self.len -= 1;
        true
    }

    pub fn count(&self, value: &V) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn contains(&self, value: &V) -> bool {
        self.counts.contains_key(value)
    }

    /// Total number of occurrences.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Every occurrence, duplicates repeated.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.counts
            .iter()
            .flat_map(|(value, count)| std::iter::repeat_n(value, *count))
    }

    pub fn iter_counts(&self) -> impl Iterator<Item = (&V, usize)> + '_ {
        self.counts.iter().map(|(value, count)| (value, *count))
    }
}

impl<V: Eq + Hash + Clone> Multiset<V> {
    pub fn to_vec(&self) -> Vec<V> {
        self.iter().cloned().collect()
    }
}

impl<V: Eq + Hash> Default for Multiset<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash> FromIterator<V> for Multiset<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<V: Eq + Hash + fmt::Display> fmt::Display for Multiset<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (value, count)) in self.iter_counts().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if count > 1 {
                write!(f, "{value} x{count}")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_counted() {
        let mut set = Multiset::new();
        set.insert("a");
        set.insert("a");
        set.insert("b");

        assert_eq!(set.len(), 3);
        assert_eq!(set.distinct_len(), 2);
        assert_eq!(set.count(&"a"), 2);
        assert_eq!(set.to_vec(), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_remove_one_takes_single_occurrence() {
        let mut set: Multiset<_> = ["a", "a"].into_iter().collect();

        assert!(set.remove_one(&"a"));
        assert_eq!(set.count(&"a"), 1);
        assert!(set.remove_one(&"a"));
        assert!(!set.contains(&"a"));
        assert!(set.is_empty());
        assert!(!set.remove_one(&"a"));
    }

    #[test]
    fn test_display() {
        let set: Multiset<_> = ["x", "y", "x"].into_iter().collect();
        assert_eq!(set.to_string(), "{x x2, y}");
        assert_eq!(Multiset::<&str>::new().to_string(), "{}");
    }
}
