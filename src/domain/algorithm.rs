//! Algorithm enum for selecting how candidate cells are evaluated.
//!
//! Both strategies run the same neighborhood-counting algorithm and
//! produce identical generations; they differ only in scheduling.

/// Available evaluation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Candidates evaluated one by one on the calling thread
    #[default]
    Sparse,
    /// Candidates evaluated across the rayon thread pool
    SparseParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
        }
    }

    /// Short description for the status panel
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Hash set, 3x3 candidates, serial",
            Algorithm::SparseParallel => "Hash set, 3x3 candidates, parallel",
        }
    }

    /// The algorithm after this one, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|a| *a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Sparse);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_next_cycles_through_all() {
        let start = Algorithm::default();
        let mut current = start;
        for _ in 0..Algorithm::all().len() {
            current = current.next();
        }
        assert_eq!(current, start);
        assert_ne!(start.next(), start);
    }
}
