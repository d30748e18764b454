use std::collections::HashSet;

/// Fold a name into the form used for comparisons.
///
/// Shape files are authored on case-insensitive filesystems by many hands, so `mt_cwire`,
/// `MT_CWIRE` and `Mt_CWire` all name the same thing.
#[inline]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive exact comparison of two names.
#[inline]
pub fn names_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || fold_name(a) == fold_name(b)
}

/// A set of names matched case-insensitively.
///
/// Stores folded copies; the original spelling of inserted names is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    folded: HashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, returning `false` if an equivalent name was already present.
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        self.folded.insert(fold_name(name.as_ref()))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.folded.contains(&fold_name(name))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<S: AsRef<str>> Extend<S> for NameSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl From<&str> for NameSet {
    fn from(name: &str) -> Self {
        std::iter::once(name).collect()
    }
}

impl<const N: usize> From<[&str; N]> for NameSet {
    fn from(names: [&str; N]) -> Self {
        names.into_iter().collect()
    }
}
