use std::collections::HashMap;

use super::xml::Element;
use crate::error::{LexiconError, Result};

/// `att` → `val` for the direct `<feat>` children of one element.
#[derive(Debug, Clone, Default)]
pub struct FeatMap {
    element: String,
    values: HashMap<String, String>,
}

impl FeatMap {
    /// Collects the direct `feat` children of `el`. Each must carry both
    /// `att` and `val`; a repeated `att` keeps the last value.
    pub fn from_element(el: &Element) -> Result<Self> {
        let mut values = HashMap::new();

        for feat in el.children_named("feat") {
            let att = feat.require_attr("att")?;
            let val = feat.require_attr("val")?;
            values.insert(att.to_string(), val.to_string());
        }

        Ok(FeatMap {
            element: el.name.clone(),
            values,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| LexiconError::missing_field(&self.element, key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::xml::parse_document;

    #[test]
    fn collects_direct_feats_only() {
        let el = parse_document(
            r#"<Lexicon>
                 <feat att="language" val="swe"/>
                 <LexicalEntry><feat att="nested" val="x"/></LexicalEntry>
               </Lexicon>"#,
        )
        .unwrap();
        let feats = FeatMap::from_element(&el).unwrap();
        assert_eq!(feats.len(), 1);
        assert_eq!(feats.get("language"), Some("swe"));
        assert_eq!(feats.get("nested"), None);
    }

    #[test]
    fn last_duplicate_wins() {
        let el = parse_document(
            r#"<x><feat att="label" val="a"/><feat att="label" val="b"/></x>"#,
        )
        .unwrap();
        let feats = FeatMap::from_element(&el).unwrap();
        assert_eq!(feats.require("label").unwrap(), "b");
    }

    #[test]
    fn feat_without_val_is_rejected() {
        let el = parse_document(r#"<x><feat att="label"/></x>"#).unwrap();
        let err = FeatMap::from_element(&el).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::MissingAttribute { ref element, ref attribute }
                if element == "feat" && attribute == "val"
        ));
    }

    #[test]
    fn require_reports_missing_field() {
        let el = parse_document(r#"<GlobalInformation/>"#).unwrap();
        let feats = FeatMap::from_element(&el).unwrap();
        assert!(feats.is_empty());
        let err = feats.require("languageCoding").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::MissingField { ref element, ref field }
                if element == "GlobalInformation" && field == "languageCoding"
        ));
    }
}
