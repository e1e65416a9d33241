//! Line-delimited JSON commands: `{"id", "cmd", "payload"}` in, one
//! `{"id", "status", ...}` object out.

use std::path::Path;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{LexiconError, Result};
use crate::model::category::lexical_category;
use crate::model::config::ConvertConfig;
use crate::services::{config, encoding, lookup, pipeline, resource, split};

mod command;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn get_str<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn require_str<'a>(payload: &'a Value, key: &str) -> Result<&'a str> {
    match get_str(payload, key) {
        "" => Err(LexiconError::Request(format!("payload.{key} is required"))),
        s => Ok(s),
    }
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

/// `payload.config_path` names a config file; otherwise the payload itself
/// is the config.
fn convert_config(payload: &Value) -> Result<ConvertConfig> {
    let path = get_str(payload, "config_path");
    if !path.is_empty() {
        return config::load(Path::new(path));
    }
    if payload.is_null() {
        return Ok(ConvertConfig::default());
    }
    serde_json::from_value(payload.clone())
        .map_err(|e| LexiconError::Request(format!("invalid payload: {e}")))
}

fn dispatch(cmd: Command, payload: &Value) -> Result<Value> {
    match cmd {
        Command::Ping => Ok(json!({ "message": "lmf-core alive" })),

        Command::Convert => {
            let cfg = convert_config(payload)?;
            let report = pipeline::convert(&cfg)?;
            Ok(json!({ "report": report }))
        }

        Command::Stats => {
            let path = require_str(payload, "path")?;
            let res = resource::load(Path::new(path))?;
            Ok(json!({
                "stats": res.stats(),
                "unique": res.verify_unique(),
                "duplicates": res.duplicate_sense_ids(),
            }))
        }

        Command::Split => {
            let lines = require_str(payload, "lines")?;
            let dir = require_str(payload, "dir")?;
            let report = split::split_lines(Path::new(lines), Path::new(dir))?;
            Ok(json!({ "report": report }))
        }

        Command::LemgramGet => {
            let dir = require_str(payload, "dir")?;
            let id = require_str(payload, "id")?;
            Ok(json!({ "entry": lookup::read_entry(Path::new(dir), id)? }))
        }

        Command::CategoryLookup => {
            let pos = get_str(payload, "pos");
            Ok(json!({ "pos": pos, "category": lexical_category(pos)? }))
        }

        Command::DetectEncoding => {
            let path = require_str(payload, "path")?;
            let result = encoding::detect_from_file(Path::new(path))?;
            Ok(serde_json::to_value(result)?)
        }

        Command::Unknown => Err(LexiconError::Request("unknown command".into())),
    }
}

pub fn handle(input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    debug!(cmd = cmd_str, "request");

    match dispatch(Command::from(cmd_str), payload) {
        Ok(body) => ok(id, body),
        Err(e) => err(id, e.to_string()),
    }
}
