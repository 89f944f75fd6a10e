use crate::types::RejectedValue;
use core::fmt::{self, Display};

/// Raised when two error trees about different subjects are combined.
///
/// This is a programmer error, never a validation outcome: it means a rule set merged
/// reports about unrelated values, typically reports produced for two different subjects
/// and then merged by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MismatchedSubject {
    pub left: RejectedValue,
    pub right: RejectedValue,
}

impl MismatchedSubject {
    #[inline]
    pub fn new(left: RejectedValue, right: RejectedValue) -> Self {
        Self { left, right }
    }
}

impl Display for MismatchedSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot combine error trees of different subjects ({}, {})",
            self.left, self.right
        )
    }
}

impl core::error::Error for MismatchedSubject {}
