//! Identifiers for questions and choices.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of a [`Question`](super::Question), unique within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identifier of a [`Choice`](super::Choice) within its owning question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(u64);

impl ChoiceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChoiceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Monotonic source of question ids.
///
/// Safe to share between threads: every call to [`next_id`](Self::next_id)
/// hands out a distinct value. Values are never reused.
#[derive(Debug)]
pub struct QuestionIds {
    next: AtomicU64,
}

static PROCESS_IDS: QuestionIds = QuestionIds::new();

impl QuestionIds {
    /// A fresh sequence whose first id is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// The sequence shared by every question built without an explicit one.
    pub fn process() -> &'static QuestionIds {
        &PROCESS_IDS
    }

    pub fn next_id(&self) -> QuestionId {
        QuestionId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for QuestionIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-question counter for choice ids. Only ever moves forward.
#[derive(Debug)]
pub(crate) struct ChoiceIds {
    next: u64,
}

impl ChoiceIds {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn next_id(&mut self) -> ChoiceId {
        let id = ChoiceId(self.next);
        self.next += 1;
        id
    }
}
