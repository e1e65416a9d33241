use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::entry::LexicalEntry;

/// Bytes escaped in file stems. `%` itself is escaped so the mapping stays
/// reversible; non-ASCII is always escaped by `utf8_percent_encode`.
const FILE_STEM: &AsciiSet = &CONTROLS.add(b'%').add(b'/').add(b'\\');

#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub written: usize,
    pub overwritten: usize,
    pub skipped: usize,
}

/// File stem used for an entry id (a lemgram), percent-encoded so distinct
/// ids never share a file. Ids that would name `.`/`..` or nothing map to
/// `None`.
pub fn file_stem(id: &str) -> Option<String> {
    match id {
        "" | "." | ".." => None,
        _ => Some(utf8_percent_encode(id, FILE_STEM).to_string()),
    }
}

/// Rebuilds `dir` with one `<lemgram>.json` per line of `lines_path`. A later
/// line with the same lemgram replaces the earlier file. The new set is
/// built next to `dir` and only swapped in once every line was written.
pub fn split_lines(lines_path: &Path, dir: &Path) -> Result<SplitReport> {
    let data = fs::read_to_string(lines_path)?;

    let staging = staging_path(dir);
    remove_dir_if_present(&staging)?;
    fs::create_dir_all(&staging)?;

    let report = match write_entries(&data, &staging) {
        Ok(report) => report,
        Err(e) => {
            let _ = fs::remove_dir_all(&staging);
            return Err(e);
        }
    };

    remove_dir_if_present(dir)?;
    fs::rename(&staging, dir)?;

    if report.overwritten > 0 {
        warn!(overwritten = report.overwritten, "some lemgrams occurred more than once");
    }
    info!(written = report.written, "split into {}", dir.display());

    Ok(report)
}

fn write_entries(data: &str, dir: &Path) -> Result<SplitReport> {
    let mut report = SplitReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let entry: LexicalEntry = serde_json::from_str(line)?;

        let Some(stem) = file_stem(&entry.lemgram) else {
            warn!(lemgram = %entry.lemgram, "lemgram is not usable as a file name, skipping");
            report.skipped += 1;
            continue;
        };

        let bytes = serde_json::to_vec(&entry)?;
        fs::write(dir.join(format!("{stem}.json")), bytes)?;

        if seen.insert(stem) {
            report.written += 1;
        } else {
            report.overwritten += 1;
        }
    }

    Ok(report)
}

fn remove_dir_if_present(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => debug!("removed {}", dir.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn staging_path(dir: &Path) -> PathBuf {
    let mut p = dir.to_path_buf();
    let name = match dir.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "split".to_string(),
    };
    p.set_file_name(format!("{name}.tmp"));
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resource::tests::entry;

    fn write_lines(path: &Path, entries: &[LexicalEntry]) {
        let text: String = entries
            .iter()
            .map(|e| serde_json::to_string(e).unwrap() + "\n")
            .collect();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn file_stems() {
        assert_eq!(file_stem("a-bomb..nn.1").as_deref(), Some("a-bomb..nn.1"));
        assert_eq!(file_stem("i dag..ab.1").as_deref(), Some("i dag..ab.1"));
        assert_eq!(file_stem("1/2..nl.1").as_deref(), Some("1%2F2..nl.1"));
        assert_eq!(file_stem("1_2..nl.1").as_deref(), Some("1_2..nl.1"));
        assert_eq!(file_stem("50%..nn.1").as_deref(), Some("50%25..nn.1"));
        assert_eq!(file_stem("sjö..nn.1").as_deref(), Some("sj%C3%B6..nn.1"));
        assert_eq!(file_stem("../etc").as_deref(), Some("..%2Fetc"));
        assert_ne!(file_stem(" x"), file_stem("x"));
        assert_eq!(file_stem(".."), None);
        assert_eq!(file_stem(""), None);
    }

    #[test]
    fn splits_into_per_lemgram_files() {
        let dir = tempfile::tempdir().unwrap();
        let lines = dir.path().join("lex.jsonl");
        let out = dir.path().join("v1");
        let a = entry("a-bomb..nn.1", &[("a-bomb..1", 1)]);
        let b = entry("bomba..vb.1", &[("bomba..1", 0)]);
        write_lines(&lines, &[a.clone(), b]);

        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.json"), "{}").unwrap();

        let report = split_lines(&lines, &out).unwrap();
        assert_eq!(report, SplitReport { written: 2, overwritten: 0, skipped: 0 });
        assert!(!out.join("stale.json").exists());

        let data = fs::read_to_string(out.join("a-bomb..nn.1.json")).unwrap();
        let back: LexicalEntry = serde_json::from_str(&data).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn later_duplicate_lemgram_wins() {
        let dir = tempfile::tempdir().unwrap();
        let lines = dir.path().join("lex.jsonl");
        let out = dir.path().join("v1");
        let first = entry("x..nn.1", &[("x..1", 0)]);
        let second = entry("x..nn.1", &[("x..2", 0)]);
        write_lines(&lines, &[first, second.clone()]);

        let report = split_lines(&lines, &out).unwrap();
        assert_eq!(report.written, 1);
        assert_eq!(report.overwritten, 1);

        let data = fs::read_to_string(out.join("x..nn.1.json")).unwrap();
        let back: LexicalEntry = serde_json::from_str(&data).unwrap();
        assert_eq!(back, second);
    }

    #[test]
    fn failed_split_keeps_previous_files() {
        let dir = tempfile::tempdir().unwrap();
        let lines = dir.path().join("lex.jsonl");
        let out = dir.path().join("v1");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("keep..nn.1.json"), "{}").unwrap();

        let good = serde_json::to_string(&entry("a..nn.1", &[("a..1", 0)])).unwrap();
        fs::write(&lines, format!("{good}\n{{not json\n")).unwrap();

        assert!(split_lines(&lines, &out).is_err());

        let names: Vec<String> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["keep..nn.1.json".to_string()]);
        assert!(!staging_path(&out).exists());
    }

    #[test]
    fn slash_and_underscore_lemgrams_stay_apart() {
        let dir = tempfile::tempdir().unwrap();
        let lines = dir.path().join("lex.jsonl");
        let out = dir.path().join("v1");
        let slash = entry("1/2..nl.1", &[("1/2..1", 0)]);
        let underscore = entry("1_2..nl.1", &[("1_2..1", 0)]);
        write_lines(&lines, &[slash, underscore]);

        let report = split_lines(&lines, &out).unwrap();
        assert_eq!(report, SplitReport { written: 2, overwritten: 0, skipped: 0 });

        let a = crate::services::lookup::read_entry(&out, "1/2..nl.1").unwrap();
        let b = crate::services::lookup::read_entry(&out, "1_2..nl.1").unwrap();
        assert_eq!(a["lemgram"], "1/2..nl.1");
        assert_eq!(b["lemgram"], "1_2..nl.1");
    }
}
