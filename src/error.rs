/// Result alias used across the crate.
pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A required XML attribute is absent on an element.
    #[error("<{element}> is missing attribute `{attribute}`")]
    MissingAttribute { element: String, attribute: String },

    /// A required `feat` (att/val pair) is absent under an element.
    #[error("<{element}> is missing feat `{field}`")]
    MissingField { element: String, field: String },

    #[error("required element <{element}> not found")]
    MissingElement { element: String },

    #[error("no <LexicalResource> root element found")]
    RootNotFound,

    #[error("no lexical category mapped for part of speech `{0}`")]
    UnmappedCategory(String),

    #[error("duplicate sense identifiers: {}", .duplicates.join(", "))]
    DuplicateIdentifier { duplicates: Vec<String> },

    #[error("config: {0}")]
    Config(String),

    /// A protocol request that cannot be served as given.
    #[error("{0}")]
    Request(String),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl LexiconError {
    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        LexiconError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub(crate) fn missing_field(element: &str, field: &str) -> Self {
        LexiconError::MissingField {
            element: element.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn missing_element(element: &str) -> Self {
        LexiconError::MissingElement {
            element: element.to_string(),
        }
    }
}
