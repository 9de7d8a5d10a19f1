//! File-registry records shared between the file manager collaborator and the desktop icon layer.
//!
//! The registry itself is owned outside the shell. The desktop only keeps copies of the records it
//! shows and refers to them by id, so unknown fields are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// Coarse content type of a registry item.
pub enum FileKind {
    /// Directory-like container.
    Folder,
    /// Raster or vector image.
    Image,
    /// Video clip.
    Video,
    /// Audio track.
    Audio,
    /// Text or office document.
    Document,
    /// Anything else, including kinds this build does not know about.
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One item of the external file registry.
pub struct FileRecord {
    /// Stable registry id.
    pub id: String,
    /// Display name, including extension.
    pub name: String,
    /// Content type.
    #[serde(rename = "type", default)]
    pub kind: FileKind,
    /// Registry-owned fields the shell does not interpret (size, content, preview, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileRecord {
    /// Builds a record with no extra registry fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FileKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_fields_survive_a_save() {
        let raw = json!({
            "id": "f1",
            "name": "notes.txt",
            "type": "document",
            "size": 128,
            "content": "hello"
        });

        let record: FileRecord = serde_json::from_value(raw.clone()).expect("decode");
        assert_eq!(record.kind, FileKind::Document);
        assert_eq!(record.extra.get("size"), Some(&json!(128)));
        assert_eq!(serde_json::to_value(&record).expect("encode"), raw);
    }

    #[test]
    fn unrecognized_type_decodes_as_other() {
        let record: FileRecord =
            serde_json::from_value(json!({ "id": "x", "name": "x.bin", "type": "archive" }))
                .expect("decode");
        assert_eq!(record.kind, FileKind::Other);
    }

    #[test]
    fn missing_type_defaults_to_other() {
        let record: FileRecord =
            serde_json::from_value(json!({ "id": "x", "name": "x" })).expect("decode");
        assert_eq!(record.kind, FileKind::Other);
    }
}
