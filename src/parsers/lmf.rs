//! LMF `LexicalResource` documents → records.
//!
//! Each parser reads only its own element subtree. Missing document-level
//! fields abort the parse; an entry whose lemma has no lemgram or part of
//! speech is skipped with a warning and its siblings are still parsed.

use std::fmt;

use rand::{thread_rng, Rng};
use tracing::warn;

use super::feats::FeatMap;
use super::xml::{self, Element};
use crate::error::{LexiconError, Result};
use crate::model::category::lexical_category;
use crate::model::entry::{FormRepresentation, Lemma, LexicalEntry, Sense, SenseRelation};
use crate::model::resource::{GlobalInformation, LexicalResource, Lexicon};

const ENTRY_ID_LEN: usize = 6;

/// Outcome of parsing an element that is allowed to be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    Kept(T),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoLemma,
    NoLemgram,
    NoPartOfSpeech,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::NoLemma => "no <Lemma>",
            SkipReason::NoLemgram => "no lemgram feat in <Lemma>",
            SkipReason::NoPartOfSpeech => "no partOfSpeech feat in <Lemma>",
        };
        f.write_str(s)
    }
}

pub fn parse_form_representation(el: &Element) -> Result<FormRepresentation> {
    let feats = FeatMap::from_element(el)?;
    Ok(FormRepresentation {
        written_form: feats.require("writtenForm")?.to_string(),
        part_of_speech: feats.require("partOfSpeech")?.to_string(),
        lemgram: feats.require("lemgram")?.to_string(),
        paradigm: feats.require("paradigm")?.to_string(),
    })
}

pub fn parse_lemma(el: &Element) -> Result<Lemma> {
    let form_representations = el
        .descendants_named("FormRepresentation")
        .into_iter()
        .map(parse_form_representation)
        .collect::<Result<Vec<_>>>()?;

    if form_representations.is_empty() {
        warn!("lemma without form representations: {}", summarize(el));
    }

    Ok(Lemma {
        form_representations,
    })
}

pub fn parse_sense_relation(el: &Element) -> Result<SenseRelation> {
    let targets = el.require_attr("targets")?.to_string();
    let feats = FeatMap::from_element(el)?;
    Ok(SenseRelation {
        targets,
        label: feats.require("label")?.to_string(),
    })
}

pub fn parse_sense(el: &Element) -> Result<Sense> {
    let id = el.require_attr("id")?.to_string();
    let sense_relations = el
        .descendants_named("SenseRelation")
        .into_iter()
        .map(parse_sense_relation)
        .collect::<Result<Vec<_>>>()?;

    Ok(Sense {
        id,
        sense_relations,
    })
}

pub fn parse_lexical_entry(el: &Element) -> Result<Parsed<LexicalEntry>> {
    let Some(lemma_el) = el.find_descendant("Lemma") else {
        return Ok(Parsed::Skipped(SkipReason::NoLemma));
    };

    // Root entries carry senses but an empty <Lemma/>.
    let Some(lemgram) = feat_value(lemma_el, "lemgram")? else {
        return Ok(Parsed::Skipped(SkipReason::NoLemgram));
    };

    let Some(part_of_speech) = feat_value(lemma_el, "partOfSpeech")? else {
        return Ok(Parsed::Skipped(SkipReason::NoPartOfSpeech));
    };

    let lemma = parse_lemma(lemma_el)?;
    let senses = el
        .descendants_named("Sense")
        .into_iter()
        .map(parse_sense)
        .collect::<Result<Vec<_>>>()?;
    let wd_lexical_category = lexical_category(part_of_speech)?.to_string();

    Ok(Parsed::Kept(LexicalEntry {
        lemma,
        senses,
        lemgram: lemgram.to_string(),
        entry_id: new_entry_id(),
        part_of_speech: part_of_speech.to_string(),
        wd_lexical_category,
    }))
}

pub fn parse_lexicon(el: &Element) -> Result<Lexicon> {
    let feats = FeatMap::from_element(el)?;
    let language = feats.require("language")?.to_string();

    let mut entries = Vec::new();
    for entry_el in el.descendants_named("LexicalEntry") {
        match parse_lexical_entry(entry_el)? {
            Parsed::Kept(entry) => entries.push(entry),
            Parsed::Skipped(reason) => {
                warn!(%reason, "ignoring entry: {}", summarize(entry_el));
            }
        }
    }

    Ok(Lexicon { language, entries })
}

pub fn parse_global_information(el: &Element) -> Result<GlobalInformation> {
    let feats = FeatMap::from_element(el)?;
    Ok(GlobalInformation {
        language_coding: feats.require("languageCoding")?.to_string(),
    })
}

pub fn parse_lexical_resource(el: &Element) -> Result<LexicalResource> {
    let dtd_version = el.require_attr("dtdVersion")?.to_string();

    let global_el = el
        .find_descendant("GlobalInformation")
        .ok_or_else(|| LexiconError::missing_element("GlobalInformation"))?;
    let lexicon_el = el
        .find_descendant("Lexicon")
        .ok_or_else(|| LexiconError::missing_element("Lexicon"))?;

    Ok(LexicalResource {
        dtd_version,
        global_information: parse_global_information(global_el)?,
        lexicon: parse_lexicon(lexicon_el)?,
    })
}

/// Parses a whole document held in memory.
pub fn parse_document(text: &str) -> Result<LexicalResource> {
    let root = xml::parse_document(text)?;
    let resource_el = root
        .find_self_or_descendant("LexicalResource")
        .ok_or(LexiconError::RootNotFound)?;
    parse_lexical_resource(resource_el)
}

/// `val` of the first `<feat att="{att}">` anywhere under `el`.
fn feat_value<'a>(el: &'a Element, att: &str) -> Result<Option<&'a str>> {
    match el.find_feat(att) {
        Some(feat) => feat.require_attr("val").map(Some),
        None => Ok(None),
    }
}

fn new_entry_id() -> String {
    let mut rng = thread_rng();
    (0..ENTRY_ID_LEN)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
        .collect()
}

/// Short description of an element for log lines.
fn summarize(el: &Element) -> String {
    let senses: Vec<&str> = el
        .descendants_named("Sense")
        .into_iter()
        .filter_map(|s| s.attr("id"))
        .collect();
    if senses.is_empty() {
        format!("<{}> with {} children", el.name, el.children.len())
    } else {
        format!("<{}> senses=[{}]", el.name, senses.join(", "))
    }
}
