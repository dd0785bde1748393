//! Quiz candidate filtering and random selection.
//!
//! The service keeps no quiz session: the caller resends every id it has
//! already seen, and the next question is drawn uniformly from whatever
//! remains in the requested category.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

/// Category id that means "any category".
pub const ANY_CATEGORY: DbId = 0;

/// Filter describing the quiz candidate set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFilter {
    /// Question ids the caller has already seen.
    pub exclude: Vec<DbId>,
    /// Category restriction; `None` means every category.
    pub category: Option<DbId>,
}

impl QuizFilter {
    /// Build a filter from the raw request values.
    ///
    /// A category id of [`ANY_CATEGORY`] lifts the category restriction.
    pub fn new(previous_questions: Vec<DbId>, category_id: Option<DbId>) -> Self {
        Self {
            exclude: previous_questions,
            category: category_id.filter(|&id| id != ANY_CATEGORY),
        }
    }

    /// Whether a question with the given id and category is a candidate.
    pub fn matches(&self, id: DbId, category: DbId) -> bool {
        !self.exclude.contains(&id) && self.category.map_or(true, |c| c == category)
    }
}

/// Pick one candidate uniformly at random.
///
/// Returns `None` when the candidate set is empty.
pub fn choose_question<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
