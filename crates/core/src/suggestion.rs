use serde::Serialize;

/// One candidate replacement for the user's whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Full text that replaces the input if this suggestion is picked.
    pub completed_text: String,
    /// Display hint.
    pub hint: String,
    /// Description shown alongside the hint.
    pub description: String,
}

impl Suggestion {
    /// Build a suggestion from its three parts.
    pub fn new(
        completed_text: impl Into<String>,
        hint: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            completed_text: completed_text.into(),
            hint: hint.into(),
            description: description.into(),
        }
    }
}
