//! Owned in-memory element tree.
//!
//! The whole document is held in memory; text nodes are dropped because the
//! lexicon format carries all of its data in attributes.

use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{LexiconError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`Element::attr`] but fails with `MissingAttribute`.
    pub fn require_attr(&self, key: &str) -> Result<&str> {
        self.attr(key)
            .ok_or_else(|| LexiconError::missing_attribute(&self.name, key))
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// All descendants (not including `self`) with the given name, in
    /// document order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        collect_named(self, name, &mut out);
        out
    }

    pub fn find_descendant<'a>(&'a self, name: &str) -> Option<&'a Element> {
        self.children.iter().find_map(|c| {
            if c.name == name {
                Some(c)
            } else {
                c.find_descendant(name)
            }
        })
    }

    /// The element itself if it has the given name, otherwise its first
    /// matching descendant.
    pub fn find_self_or_descendant<'a>(&'a self, name: &str) -> Option<&'a Element> {
        if self.name == name {
            Some(self)
        } else {
            self.find_descendant(name)
        }
    }

    /// First descendant `<feat att="{att}">` anywhere under this element.
    pub fn find_feat<'a>(&'a self, att: &str) -> Option<&'a Element> {
        self.children.iter().find_map(|c| {
            if c.name == "feat" && c.attr("att") == Some(att) {
                Some(c)
            } else {
                c.find_feat(att)
            }
        })
    }
}

fn collect_named<'a>(el: &'a Element, name: &str, out: &mut Vec<&'a Element>) {
    for child in &el.children {
        if child.name == name {
            out.push(child);
        }
        collect_named(child, name, out);
    }
}

/// Reads a full document into an element tree and returns its root.
pub fn parse_document(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Element::from_start(&start)?),
            Event::Empty(start) => {
                let el = Element::from_start(&start)?;
                attach(&mut stack, &mut root, el);
            }
            Event::End(_) => {
                if let Some(el) = stack.pop() {
                    attach(&mut stack, &mut root, el);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(open.name)).into());
    }

    root.ok_or(LexiconError::RootNotFound)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None => {
            if root.is_none() {
                *root = Some(el);
            }
        }
    }
}
