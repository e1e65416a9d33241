use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::entry::LexicalEntry;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub language: String,

    #[serde(default)]
    pub entries: Vec<LexicalEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalInformation {
    pub language_coding: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LexicalResource {
    pub dtd_version: String,
    pub global_information: GlobalInformation,
    pub lexicon: Lexicon,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResourceStats {
    pub entries: usize,
    pub senses: usize,
    pub unique_senses: usize,
    pub sense_relations: usize,
    pub avg_sense_relations_per_sense: f64,
}

impl LexicalResource {
    pub fn entries(&self) -> &[LexicalEntry] {
        &self.lexicon.entries
    }

    fn sense_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries()
            .iter()
            .flat_map(|e| e.senses.iter())
            .map(|s| s.id.as_str())
    }

    pub fn count_entries(&self) -> usize {
        self.entries().len()
    }

    pub fn count_senses(&self) -> usize {
        self.sense_ids().count()
    }

    pub fn count_unique_senses(&self) -> usize {
        self.sense_ids().collect::<HashSet<_>>().len()
    }

    pub fn count_sense_relations(&self) -> usize {
        self.entries().iter().map(LexicalEntry::sense_relation_count).sum()
    }

    /// Zero when the lexicon has no senses at all.
    pub fn avg_sense_relations_per_sense(&self) -> f64 {
        let senses = self.count_senses();
        if senses == 0 {
            return 0.0;
        }
        self.count_sense_relations() as f64 / senses as f64
    }

    /// Sense ids occurring more than once across the whole lexicon, sorted.
    pub fn duplicate_sense_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = BTreeSet::new();
        for id in self.sense_ids() {
            if !seen.insert(id) {
                dupes.insert(id);
            }
        }
        dupes.into_iter().map(str::to_string).collect()
    }

    pub fn verify_unique(&self) -> bool {
        self.count_senses() == self.count_unique_senses()
    }

    pub fn stats(&self) -> ResourceStats {
        ResourceStats {
            entries: self.count_entries(),
            senses: self.count_senses(),
            unique_senses: self.count_unique_senses(),
            sense_relations: self.count_sense_relations(),
            avg_sense_relations_per_sense: self.avg_sense_relations_per_sense(),
        }
    }
}
