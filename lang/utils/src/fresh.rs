//! Numeric-suffix freshening: `R`, `R1`, `R2`, ...

use std::collections::HashSet;

/// A set of names already in scope.
#[derive(Clone, Debug, Default)]
pub struct Fresh {
    taken: HashSet<String>,
}

impl Fresh {
    pub fn new<S: Into<String>>(taken: impl IntoIterator<Item = S>) -> Self {
        Self { taken: taken.into_iter().map(Into::into).collect() }
    }
    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }
    /// The first of `base`, `base1`, `base2`, ... that is not taken.
    pub fn name(&self, base: &str) -> String {
        let mut candidate = base.to_owned();
        let mut counter = 0usize;
        while self.is_taken(&candidate) {
            counter += 1;
            candidate = format!("{base}{counter}");
        }
        candidate
    }
    /// Like [`Fresh::name`] but also reserves the result.
    pub fn take(&mut self, base: &str) -> String {
        let name = self.name(base);
        self.taken.insert(name.clone());
        name
    }
}
