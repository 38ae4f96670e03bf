use ahash::AHashMap;

/// Occurrence counts that remember first-seen order.
///
/// Ranking sorts stably by count, so ties resolve to whichever key was seen
/// first and output is reproducible for identical input.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    index: AHashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tally whose keys exist up front with a zero count.
    pub fn seeded<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for key in keys {
            tally.record_n(key.as_ref(), 0);
        }
        tally
    }

    pub fn record(&mut self, key: &str) {
        self.record_n(key, 1);
    }

    pub fn record_n(&mut self, key: &str, n: u64) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                let key = key.to_owned();
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, n));
            }
        }
    }

    /// Bumps every existing key accepted by `matches`.
    pub(crate) fn record_matching(&mut self, mut matches: impl FnMut(&str) -> bool) {
        for (key, count) in &mut self.entries {
            if matches(key.as_str()) {
                *count += 1;
            }
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// The `n` highest counts, descending, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

// The index is derived from `entries`; comparing it would add nothing.
impl PartialEq for Tally {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Tally {}
