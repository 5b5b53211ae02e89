//! Submission gate status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What is still missing before a form may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionChecklist {
    pub answered: usize,
    pub total: usize,
    pub has_reflection: bool,
    pub has_email: bool,
    pub has_consent: bool,
}

impl SubmissionChecklist {
    pub fn all_answered(&self) -> bool {
        self.answered == self.total
    }

    /// True when every condition of the submission gate holds.
    pub fn is_complete(&self) -> bool {
        self.all_answered() && self.has_reflection && self.has_email && self.has_consent
    }
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        "✗"
    }
}

impl fmt::Display for SubmissionChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Complete Assessment ({}/{} questions, {} reflection, {} email, {} consent)",
            self.answered,
            self.total,
            mark(self.has_reflection),
            mark(self.has_email),
            mark(self.has_consent)
        )
    }
}
