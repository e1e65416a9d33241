use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::error::{LexiconError, Result};
use crate::model::resource::LexicalResource;

const FORMS_HEADER: [&str; 3] = ["writtenForm", "lexical_category", "lemgram"];
const SENSES_HEADER: [&str; 3] = ["writtenForm", "lexical_category", "sense_id"];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub forms_rows: usize,
    pub senses_rows: usize,
}

/// Writes one JSON record per entry. Refuses to write anything when two
/// senses share an id.
pub fn write_lines(resource: &LexicalResource, path: &Path) -> Result<usize> {
    if !resource.verify_unique() {
        let duplicates = resource.duplicate_sense_ids();
        error!(count = duplicates.len(), "sense ids are not unique, not writing {}", path.display());
        return Err(LexiconError::DuplicateIdentifier { duplicates });
    }

    write_atomic(path, |file| {
        let mut out = BufWriter::new(file);
        for entry in resource.entries() {
            serde_json::to_writer(&mut out, entry)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    })?;

    info!(lines = resource.count_entries(), "wrote {}", path.display());
    Ok(resource.count_entries())
}

/// Writes the two flattened CSV views: one row per (entry, form) and one
/// row per (entry, form, sense).
pub fn write_tables(
    resource: &LexicalResource,
    forms_path: &Path,
    senses_path: &Path,
) -> Result<TableCounts> {
    let mut forms_rows = 0usize;
    write_atomic(forms_path, |file| {
        let mut out = csv::Writer::from_writer(file);
        out.write_record(FORMS_HEADER)?;
        for entry in resource.entries() {
            for form in &entry.lemma.form_representations {
                out.write_record([
                    form.written_form.as_str(),
                    entry.wd_lexical_category.as_str(),
                    form.lemgram.as_str(),
                ])?;
                forms_rows += 1;
            }
        }
        out.flush()?;
        Ok(())
    })?;

    let mut senses_rows = 0usize;
    write_atomic(senses_path, |file| {
        let mut out = csv::Writer::from_writer(file);
        out.write_record(SENSES_HEADER)?;
        for entry in resource.entries() {
            for form in &entry.lemma.form_representations {
                for sense in &entry.senses {
                    out.write_record([
                        form.written_form.as_str(),
                        entry.wd_lexical_category.as_str(),
                        sense.id.as_str(),
                    ])?;
                    senses_rows += 1;
                }
            }
        }
        out.flush()?;
        Ok(())
    })?;

    info!(forms_rows, senses_rows, "wrote tables");
    Ok(TableCounts {
        forms_rows,
        senses_rows,
    })
}

/// Writes through a sibling `.tmp` file and renames it over `path`, so a
/// failed write never leaves a truncated output behind.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(&tmp)?;
    if let Err(e) = write(file) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "out".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
