//! Saved style presets.
//!
//! The backing store is an external collaborator: the core only needs CRUD
//! over opaque records whose `state_json` round-trips through JSON
//! verbatim. No schema migration lives here.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::session::EditorSession;
use crate::state::StyleState;

/// One stored preset, shaped like the backend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub state_json: StyleState,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Default for PresetRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: None,
            category: "custom".into(),
            state_json: StyleState::default(),
            is_public: true,
            tags: Vec::new(),
            created_at: String::new(),
        }
    }
}

/// CRUD surface of the preset backend.
pub trait PresetStore {
    fn list(&self) -> Result<Vec<PresetRecord>>;
    /// Store a record, returning its id (assigned by the store when the
    /// record arrives without one).
    fn create(&mut self, record: PresetRecord) -> Result<String>;
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Load a preset into the session: a full state replacement, never an
/// aliased reference to the stored record.
pub fn load_preset(session: &mut EditorSession, record: &PresetRecord) {
    session.replace_state(record.state_json.clone());
}

/// In-memory store, used by tests and the dev server.
#[derive(Debug, Default)]
pub struct MemoryPresetStore {
    records: Vec<PresetRecord>,
    next_id: u64,
}

impl MemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresetStore for MemoryPresetStore {
    fn list(&self) -> Result<Vec<PresetRecord>> {
        Ok(self.records.clone())
    }

    fn create(&mut self, mut record: PresetRecord) -> Result<String> {
        if record.id.is_empty() {
            self.next_id += 1;
            record.id = format!("preset-{}", self.next_id);
        }
        let id = record.id.clone();
        self.records.push(record);
        Ok(id)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(EditorError::preset(format!("no preset with id '{id}'")));
        }
        Ok(())
    }
}
