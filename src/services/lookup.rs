use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::split::file_stem;
use crate::error::Result;

/// Reads the pre-split record for `id` from `dir`. An unknown id yields an
/// empty object rather than an error.
pub fn read_entry(dir: &Path, id: &str) -> Result<Value> {
    let Some(stem) = file_stem(id) else {
        return Ok(empty());
    };

    let path = dir.join(format!("{stem}.json"));
    match fs::read_to_string(&path) {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(id, "no record");
            Ok(empty())
        }
        Err(e) => Err(e.into()),
    }
}

fn empty() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;
    use serde_json::json;

    #[test]
    fn returns_stored_record() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bomb..nn.1.json"),
            r#"{"lemgram":"bomb..nn.1","wd_lexical_category":"Q1084"}"#,
        )
        .unwrap();

        let value = read_entry(dir.path(), "bomb..nn.1").unwrap();
        assert_eq!(value, json!({"lemgram": "bomb..nn.1", "wd_lexical_category": "Q1084"}));
    }

    #[test]
    fn unknown_id_is_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_entry(dir.path(), "nothing..nn.1").unwrap(), json!({}));
        assert_eq!(read_entry(dir.path(), "..").unwrap(), json!({}));
    }

    #[test]
    fn corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad..nn.1.json"), "{not json").unwrap();
        assert!(matches!(
            read_entry(dir.path(), "bad..nn.1").unwrap_err(),
            LexiconError::Json(_)
        ));
    }
}
