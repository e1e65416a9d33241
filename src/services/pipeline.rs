use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::model::config::ConvertConfig;
use crate::model::resource::ResourceStats;
use crate::services::{
    export::{self, TableCounts},
    resource,
    split::{self, SplitReport},
};

#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub source_sha256: String,
    pub stats: ResourceStats,
    pub lines_written: usize,
    pub tables: TableCounts,
    pub split: Option<SplitReport>,
}

/// Source document → JSONL → CSV tables → (optionally) per-lemgram files.
/// Any error stops the run before the next output is touched.
pub fn convert(cfg: &ConvertConfig) -> Result<ConversionReport> {
    let loaded = resource::load_source(Path::new(&cfg.source))?;
    let res = &loaded.resource;

    let stats = res.stats();
    info!(
        entries = stats.entries,
        senses = stats.senses,
        unique_senses = stats.unique_senses,
        sense_relations = stats.sense_relations,
        avg_relations = stats.avg_sense_relations_per_sense,
        "parsed lexicon"
    );

    let lines_written = export::write_lines(res, Path::new(&cfg.lines))?;
    let tables = export::write_tables(
        res,
        Path::new(&cfg.forms_table),
        Path::new(&cfg.senses_table),
    )?;

    let split = if cfg.split {
        Some(split::split_lines(Path::new(&cfg.lines), Path::new(&cfg.split_dir))?)
    } else {
        None
    };

    Ok(ConversionReport {
        source_sha256: loaded.source_sha256,
        stats,
        lines_written,
        tables,
        split,
    })
}
