use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize, Debug)]
pub struct MessageObj {
    pub usage: Option<Map<String, Value>>,
}

#[derive(Deserialize, Debug)]
pub struct TranscriptLine {
    pub r#type: Option<String>,
    pub message: Option<MessageObj>,
}

impl TranscriptLine {
    /// Usage attached to an assistant turn, if this line carries one.
    pub fn assistant_usage(&self) -> Option<MessageUsage> {
        if self.r#type.as_deref() != Some("assistant") {
            return None;
        }
        let usage = self.message.as_ref()?.usage.as_ref()?;
        Some(MessageUsage::from_map(usage))
    }
}

/// Token breakdown of a single assistant turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MessageUsage {
    pub input_tokens: i64,
    pub cache_creation_input_tokens: i64,
    pub cache_read_input_tokens: i64,
    pub output_tokens: i64,
}

impl MessageUsage {
    // Non-numeric or missing counters count as zero. Fractions truncate toward
    // zero and values outside i64 saturate.
    fn from_map(usage: &Map<String, Value>) -> Self {
        let count = |key: &str| usage.get(key).map(counter_value).unwrap_or(0);
        Self {
            input_tokens: count("input_tokens"),
            cache_creation_input_tokens: count("cache_creation_input_tokens"),
            cache_read_input_tokens: count("cache_read_input_tokens"),
            output_tokens: count("output_tokens"),
        }
    }

    pub fn total(&self) -> i64 {
        self.input_tokens
            .saturating_add(self.cache_creation_input_tokens)
            .saturating_add(self.cache_read_input_tokens)
            .saturating_add(self.output_tokens)
    }
}

fn counter_value(v: &Value) -> i64 {
    if let Some(n) = v.as_i64() {
        return n;
    }
    if v.as_u64().is_some() {
        return i64::MAX;
    }
    v.as_f64().map(|f| f as i64).unwrap_or(0)
}
