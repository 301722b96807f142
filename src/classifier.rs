//! Keyword heuristics that pick a model and effort level for a task.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::consts::{ECONOMY_MODEL, HIGH_CAPABILITY_MODEL};

/// Words that suggest the task needs a stronger model.
const COMPLEX_INDICATORS: &[&str] = &[
    "architecture",
    "design",
    "refactor",
    "review",
    "analyze",
    "optimize",
    "debug",
    "complex",
    "performance",
    "security",
];

/// Words that suggest a small, mechanical change.
const SIMPLE_INDICATORS: &[&str] = &[
    "typo",
    "fix",
    "update",
    "simple",
    "minor",
    "quick",
    "documentation",
    "comment",
    "readme",
    "format",
];

/// How much reasoning budget the worker should spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Thinking {
    Off,
    Minimal,
    Low,
    Medium,
    High,
    #[value(name = "xhigh")]
    XHigh,
}

impl Thinking {
    pub fn as_str(self) -> &'static str {
        match self {
            Thinking::Off => "off",
            Thinking::Minimal => "minimal",
            Thinking::Low => "low",
            Thinking::Medium => "medium",
            Thinking::High => "high",
            Thinking::XHigh => "xhigh",
        }
    }
}

impl fmt::Display for Thinking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The model/effort pair a worker is spawned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub model: &'static str,
    pub thinking: Thinking,
}

impl Profile {
    pub const COMPLEX: Profile = Profile {
        model: HIGH_CAPABILITY_MODEL,
        thinking: Thinking::High,
    };
    pub const SIMPLE: Profile = Profile {
        model: ECONOMY_MODEL,
        thinking: Thinking::Low,
    };
    pub const DEFAULT: Profile = Profile {
        model: ECONOMY_MODEL,
        thinking: Thinking::Medium,
    };
}

/// Pick a profile for a task description.
///
/// Matching is case-insensitive substring search. Complexity wins when both
/// keyword sets match.
pub fn classify(description: &str) -> Profile {
    let lower = description.to_lowercase();
    let matches = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if matches(COMPLEX_INDICATORS) {
        Profile::COMPLEX
    } else if matches(SIMPLE_INDICATORS) {
        Profile::SIMPLE
    } else {
        Profile::DEFAULT
    }
}
