use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct EncodingCandidate {
    pub name: String,
    pub confidence: f32,
}

#[derive(Debug, Serialize)]
pub struct EncodingDetectionResult {
    pub best: String,
    pub confidence: f32,
    pub candidates: Vec<EncodingCandidate>,
}

/// Source document text after decoding.
#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
    pub had_errors: bool,
}

/// Decodes raw document bytes. A BOM wins; valid UTF-8 is taken as is;
/// anything else goes through detection.
pub fn decode(bytes: &[u8]) -> DecodedText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return finish(text, encoding, had_errors);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_string(),
            encoding: UTF_8,
            had_errors: false,
        };
    }

    let encoding = guess(bytes);
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    finish(text, encoding, had_errors)
}

fn finish(text: Cow<'_, str>, encoding: &'static Encoding, had_errors: bool) -> DecodedText {
    if had_errors {
        warn!(encoding = encoding.name(), "source decoded with replacement characters");
    } else {
        debug!(encoding = encoding.name(), "source decoded");
    }
    DecodedText {
        text: text.into_owned(),
        encoding,
        had_errors,
    }
}

fn guess(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

pub fn detect_from_file(path: &Path) -> Result<EncodingDetectionResult> {
    let bytes = fs::read(path)?;

    if let Some((encoding, _)) = Encoding::for_bom(&bytes) {
        let best = encoding.name().to_lowercase();
        return Ok(EncodingDetectionResult {
            best: best.clone(),
            confidence: 0.99,
            candidates: vec![EncodingCandidate {
                name: best,
                confidence: 0.99,
            }],
        });
    }

    let encoding = guess(&bytes);
    let best = encoding.name().to_lowercase();
    let confidence = estimate_confidence(&bytes, encoding);

    let mut candidates = vec![EncodingCandidate {
        name: best.clone(),
        confidence,
    }];

    // Lexicon dumps are nearly always UTF-8 or Latin-1 family.
    if best == "windows-1252" {
        candidates.push(EncodingCandidate {
            name: "iso-8859-1".into(),
            confidence: (confidence - 0.05).max(0.0),
        });
    } else if best != "utf-8" {
        candidates.push(EncodingCandidate {
            name: "utf-8".into(),
            confidence: (confidence - 0.20).max(0.0),
        });
    }

    Ok(EncodingDetectionResult {
        best,
        confidence,
        candidates,
    })
}

fn estimate_confidence(bytes: &[u8], encoding: &'static Encoding) -> f32 {
    let (text, _, had_errors) = encoding.decode(bytes);

    if had_errors {
        return 0.35;
    }

    let len = text.len();
    if len < 64 {
        0.55
    } else if len < 512 {
        0.70
    } else if len < 4096 {
        0.82
    } else {
        0.90
    }
}
