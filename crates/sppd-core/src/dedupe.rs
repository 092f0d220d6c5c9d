use std::collections::BTreeSet;

/// Tracks the trip numbers already emitted in one conversion run.
///
/// The first occurrence of a trip number is admitted; every later one, from
/// the same source or another, is a duplicate.
#[derive(Debug, Clone, Default)]
pub struct DuplicateGuard {
    seen: BTreeSet<String>,
}

impl DuplicateGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and remembers `trip_number` if it has not been seen.
    pub fn admit(&mut self, trip_number: &str) -> bool {
        if self.seen.contains(trip_number) {
            return false;
        }
        self.seen.insert(trip_number.to_string())
    }

    pub fn contains(&self, trip_number: &str) -> bool {
        self.seen.contains(trip_number)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
