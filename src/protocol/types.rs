use serde::Deserialize;
use serde_json::Value;

/// One `data:` payload from a chat-completion event stream.
///
/// Every field defaults so that control payloads (role announcements,
/// usage reports, finish markers) deserialize cleanly instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkPayload {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(flatten)]
    _extra: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub delta: Option<ChoiceDelta>,
    #[serde(default, rename = "finish_reason")]
    _finish_reason: Option<String>,
    #[serde(flatten)]
    _extra: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceDelta {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "role")]
    _role: Option<String>,
    #[serde(flatten)]
    _extra: Value,
}

impl ChunkPayload {
    /// The incremental text fragment carried by this payload, if any.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.as_ref())
            .and_then(|d| d.content.as_deref())
    }
}
