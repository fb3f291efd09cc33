//! Set algebra between queries
//!
//! Membership is exact string equality. Every result is deduplicated and keeps
//! the first-seen order of its words.

use rustc_hash::FxHashSet;

use super::WordQuery;

impl WordQuery {
    /// Words of this query that also occur in `other`
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let theirs: FxHashSet<&str> = other.iter().collect();
        self.distinct_where(|word| theirs.contains(word))
    }

    /// Words occurring in either query
    ///
    /// This is a true union: this query's words come first, followed by the
    /// words only `other` has. Use [`except`](Self::except) for the
    /// difference.
    ///
    /// # Examples
    /// ```
    /// use word_query::query::WordQuery;
    ///
    /// let a: WordQuery = ["cat", "dog", "cat"].into_iter().collect();
    /// let b: WordQuery = ["dog", "emu"].into_iter().collect();
    /// assert_eq!(a.union(&b).to_vec(), vec!["cat", "dog", "emu"]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        Self {
            items: self
                .items
                .iter()
                .chain(&other.items)
                .filter(|word| seen.insert(word.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Words of this query that do not occur in `other`
    #[must_use]
    pub fn except(&self, other: &Self) -> Self {
        let theirs: FxHashSet<&str> = other.iter().collect();
        self.distinct_where(|word| !theirs.contains(word))
    }

    fn distinct_where<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        Self {
            items: self
                .items
                .iter()
                .filter(|word| keep(word.as_str()) && seen.insert(word.as_str()))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(words: &[&str]) -> WordQuery {
        words.iter().copied().collect()
    }

    #[test]
    fn intersect_dedupes_in_receiver_order() {
        let a = query(&["dog", "cat", "dog", "emu"]);
        let b = query(&["emu", "dog", "fox"]);

        assert_eq!(a.intersect(&b).to_vec(), vec!["dog", "emu"]);
    }

    #[test]
    fn intersect_with_self_is_distinct() {
        let s = query(&["b", "a", "b", "c", "a"]);
        assert_eq!(s.intersect(&s), s.distinct());
    }

    #[test]
    fn except_with_self_is_empty() {
        let s = query(&["b", "a", "b"]);
        assert!(s.except(&s).is_empty());
    }

    #[test]
    fn except_removes_other_words() {
        let a = query(&["cat", "dog", "cat", "emu"]);
        let b = query(&["dog"]);

        assert_eq!(a.except(&b).to_vec(), vec!["cat", "emu"]);
    }

    #[test]
    fn union_combines_both_sides() {
        let a = query(&["cat", "dog", "cat"]);
        let b = query(&["emu", "dog", "fox", "emu"]);

        assert_eq!(a.union(&b).to_vec(), vec!["cat", "dog", "emu", "fox"]);
    }

    #[test]
    fn union_with_empty() {
        let a = query(&["cat", "cat"]);
        let empty = WordQuery::default();

        assert_eq!(a.union(&empty).to_vec(), vec!["cat"]);
        assert_eq!(empty.union(&a).to_vec(), vec!["cat"]);
    }

    #[test]
    fn set_operations_are_case_sensitive() {
        let a = query(&["Cat", "cat"]);
        let b = query(&["cat"]);

        assert_eq!(a.intersect(&b).to_vec(), vec!["cat"]);
        assert_eq!(a.except(&b).to_vec(), vec!["Cat"]);
    }
}
