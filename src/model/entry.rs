use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormRepresentation {
    pub written_form: String,
    pub part_of_speech: String,
    pub lemgram: String,
    pub paradigm: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Lemma {
    #[serde(default)]
    pub form_representations: Vec<FormRepresentation>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SenseRelation {
    pub targets: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Sense {
    pub id: String,

    #[serde(default)]
    pub sense_relations: Vec<SenseRelation>,
}

/// One retained `<LexicalEntry>`. This is also the shape of a JSONL line and
/// of a per-lemgram lookup file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub lemma: Lemma,

    #[serde(default)]
    pub senses: Vec<Sense>,

    pub lemgram: String,

    pub entry_id: String,

    pub part_of_speech: String,

    #[serde(default)]
    pub wd_lexical_category: String,
}

impl LexicalEntry {
    pub fn sense_relation_count(&self) -> usize {
        self.senses.iter().map(|s| s.sense_relations.len()).sum()
    }
}
