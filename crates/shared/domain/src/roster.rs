use crate::candidate::Candidate;
use crate::error::DomainError;

/// The complete, self-contained state of the candidate roster at a point in
/// time.
///
/// A roster is an ordered collection of [`Candidate`] entries that never
/// contains two entries describing the same candidate (see
/// [`Candidate::is_same_candidate`]). It is a plain value: cloning it takes
/// a full snapshot, and mutating a clone never affects the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self { candidates: Vec::new() }
    }

    /// Builds a roster from an ordered list of candidates.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateCandidate`] if the list contains two
    /// entries describing the same candidate.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Result<Self, DomainError> {
        let mut roster = Self::new();
        for candidate in candidates {
            roster.add(candidate)?;
        }
        Ok(roster)
    }

    /// Appends a candidate to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateCandidate`] if the roster already
    /// holds an entry describing the same candidate.
    pub fn add(&mut self, candidate: Candidate) -> Result<(), DomainError> {
        if self.contains(&candidate) {
            return Err(DomainError::DuplicateCandidate {
                message: "Roster already contains an entry for this candidate".into(),
                context: Some(candidate.name().as_ref().to_owned().into()),
            });
        }
        self.candidates.push(candidate);
        Ok(())
    }

    /// Returns `true` if the roster holds an entry describing the same
    /// candidate as the given one.
    #[must_use]
    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.candidates.iter().any(|existing| existing.is_same_candidate(candidate))
    }

    /// The candidates in roster order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
