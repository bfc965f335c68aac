use std::fmt;

/// All errors produced at the editor's external boundaries.
///
/// The generators themselves never fail on malformed data — they degrade to
/// empty output. Errors exist only where the editor talks to the outside
/// world: the styling assistant, the preset store, and state JSON on disk.
#[derive(Debug)]
pub struct EditorError {
    pub kind: ErrorKind,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The natural-language styling service failed (network, non-2xx, bad JSON).
    Assist(String),
    /// The preset backend rejected a list/create/delete call.
    PresetStore(String),
    /// State or patch JSON could not be parsed.
    InvalidState(String),
    /// General message.
    Message(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Assist(msg) => write!(f, "styling assistant failed: {msg}"),
            ErrorKind::PresetStore(msg) => write!(f, "preset store error: {msg}"),
            ErrorKind::InvalidState(msg) => write!(f, "invalid state document: {msg}"),
            ErrorKind::Message(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EditorError {}

pub type Result<T> = std::result::Result<T, EditorError>;

/// Shorthand constructors.
impl EditorError {
    pub fn assist(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Assist(msg.into()),
        }
    }

    pub fn preset(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::PresetStore(msg.into()),
        }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidState(msg.into()),
        }
    }

    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Message(msg.into()),
        }
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_state(err.to_string())
    }
}
