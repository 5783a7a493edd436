// Tue Jan 13 2026 - Alex

use indexmap::IndexSet;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

pub const ENVIRONMENTS: [&str; 8] = [
    "dev",
    "development",
    "stage",
    "s3",
    "staging",
    "prod",
    "production",
    "test",
];

/// Insertion-ordered set of bucket name candidates.
///
/// Uniqueness is exact string equality, so `Acme` and `acme` are two
/// different candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    names: IndexSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_superset(&self, other: &CandidateSet) -> bool {
        other.names.is_subset(&self.names)
    }
}

impl Extend<String> for CandidateSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

/// Builds every permutation of `target` with the words in `words`.
///
/// Env-tagged names come first (word-major, then environment, then
/// template), followed by the six plain two-part joins per word. No naming
/// rules are checked here; invalid names simply fail the existence probe.
pub fn generate<S: AsRef<str>>(target: &str, words: &[S]) -> CandidateSet {
    let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    let mut set = CandidateSet::new();
    set.insert(target);

    for (word, env) in iproduct!(words.iter(), ENVIRONMENTS.iter()) {
        set.insert(format!("{}-{}-{}", target, word, env));
        set.insert(format!("{}-{}.{}", target, word, env));
        set.insert(format!("{}-{}{}", target, word, env));
        set.insert(format!("{}.{}-{}", target, word, env));
        set.insert(format!("{}.{}.{}", target, word, env));
    }

    for word in &words {
        set.insert(format!("{}.{}", target, word));
        set.insert(format!("{}-{}", target, word));
        set.insert(format!("{}{}", target, word));
        set.insert(format!("{}.{}", word, target));
        set.insert(format!("{}-{}", word, target));
        set.insert(format!("{}{}", word, target));
    }

    set
}
