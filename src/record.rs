//! The flat result record exchanged with workers.
//!
//! Workers write it as `result.json`; the bridge synthesizes one on every
//! failure path. Keys the bridge doesn't know about are kept in their
//! original order and passed through untouched.

use serde::Serialize;
use serde_json::{Map, Value};

pub const STATUS: &str = "status";
pub const MESSAGE: &str = "message";
pub const MODEL: &str = "model";
pub const THINKING: &str = "thinking";
pub const OUTPUT: &str = "output";
pub const ERROR: &str = "error";
pub const DISCORD_MESSAGE: &str = "discord_message";
pub const SUCCESS: &str = "success";

/// Worker status as reported in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Completed,
    Partial,
    Failed,
    Error,
    Timeout,
    Unrecognized,
}

impl Status {
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => Status::Success,
            "completed" => Status::Completed,
            "partial" => Status::Partial,
            "failed" => Status::Failed,
            "error" => Status::Error,
            "timeout" => Status::Timeout,
            _ => Status::Unrecognized,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Status::Success | Status::Completed => "✅",
            Status::Partial => "⚠️",
            Status::Failed | Status::Error => "❌",
            Status::Timeout => "⏱️",
            Status::Unrecognized => "❓",
        }
    }

    /// Only `success` and `completed` count. Synonyms don't.
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success | Status::Completed)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failed | Status::Error)
    }
}

/// A JSON object with a few well-known keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultRecord(Map<String, Value>);

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record carrying only an `error` field.
    pub fn error(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::new().with(ERROR, message)
    }

    /// Parse a worker artifact. Anything but a JSON object is rejected.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self(map)),
            other => anyhow::bail!("result is not a JSON object: {other}"),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Display text for a field. Null counts as missing; non-strings render
    /// as compact JSON.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Raw status text, `"unknown"` when absent.
    pub fn status_text(&self) -> String {
        self.text(STATUS).unwrap_or_else(|| "unknown".to_string())
    }

    pub fn status(&self) -> Status {
        match self.0.get(STATUS) {
            Some(Value::String(s)) => Status::parse(s),
            _ => Status::Unrecognized,
        }
    }

    /// The bridge-owned `success` flag. False until it has been set.
    pub fn succeeded(&self) -> bool {
        self.0.get(SUCCESS).and_then(Value::as_bool).unwrap_or(false)
    }
}

impl From<Map<String, Value>> for ResultRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
