use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "data/saldo.xml".to_string()
}

fn default_lines() -> String {
    "data/lexsaldo_v1.jsonl".to_string()
}

fn default_forms_table() -> String {
    "data/lexsaldo_forms.csv".to_string()
}

fn default_senses_table() -> String {
    "data/lexsaldo_senses.csv".to_string()
}

fn default_split_dir() -> String {
    "data/v1".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    #[serde(default = "default_source", alias = "xml")]
    pub source: String,

    #[serde(default = "default_lines", alias = "jsonl")]
    pub lines: String,

    #[serde(default = "default_forms_table")]
    pub forms_table: String,

    #[serde(default = "default_senses_table")]
    pub senses_table: String,

    #[serde(default = "default_split_dir")]
    pub split_dir: String,

    /// Also write one `<lemgram>.json` per entry into `split_dir`.
    #[serde(default)]
    pub split: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            source: default_source(),
            lines: default_lines(),
            forms_table: default_forms_table(),
            senses_table: default_senses_table(),
            split_dir: default_split_dir(),
            split: false,
        }
    }
}
