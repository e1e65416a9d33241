use std::fs;
use std::path::Path;

use tracing::info;

use super::{encoding, fingerprint};
use crate::error::Result;
use crate::model::resource::LexicalResource;
use crate::parsers::lmf;

/// A parsed document together with the digest of the bytes it came from.
#[derive(Debug)]
pub struct LoadedResource {
    pub resource: LexicalResource,
    pub source_sha256: String,
}

pub fn load(path: &Path) -> Result<LexicalResource> {
    Ok(load_source(path)?.resource)
}

pub fn load_source(path: &Path) -> Result<LoadedResource> {
    let bytes = fs::read(path)?;
    let source_sha256 = fingerprint::sha256_hex(&bytes);
    let decoded = encoding::decode(&bytes);

    let resource = lmf::parse_document(&decoded.text)?;

    info!(
        path = %path.display(),
        encoding = decoded.encoding.name(),
        entries = resource.count_entries(),
        "lexical resource loaded"
    );

    Ok(LoadedResource {
        resource,
        source_sha256,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::LexiconError;
    use std::io::Write;

    pub(crate) const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- $Id: saldo.xml $ -->
<LexicalResource dtdVersion="16">
  <GlobalInformation>
    <feat att="languageCoding" val="ISO 639-3" />
  </GlobalInformation>
  <Lexicon>
    <feat att="language" val="swe" />
    <LexicalEntry>
      <Lemma />
      <Sense id="PRIM..1" />
    </LexicalEntry>
    <LexicalEntry>
      <Lemma>
        <FormRepresentation>
          <feat att="writtenForm" val="a-bomb" />
          <feat att="partOfSpeech" val="nn" />
          <feat att="lemgram" val="a-bomb..nn.1" />
          <feat att="paradigm" val="nn_3u_salong" />
        </FormRepresentation>
        <FormRepresentation>
          <feat att="writtenForm" val="A-bomb" />
          <feat att="partOfSpeech" val="nn" />
          <feat att="lemgram" val="A-bomb..nn.1" />
          <feat att="paradigm" val="nn_3u_salong" />
        </FormRepresentation>
      </Lemma>
      <Sense id="A-bomb..1">
        <SenseRelation targets="atombomb..1">
          <feat att="label" val="primary" />
        </SenseRelation>
      </Sense>
    </LexicalEntry>
    <LexicalEntry>
      <Lemma>
        <FormRepresentation>
          <feat att="writtenForm" val="bomba" />
          <feat att="partOfSpeech" val="vb" />
          <feat att="lemgram" val="bomba..vb.1" />
          <feat att="paradigm" val="vb_1a_laga" />
        </FormRepresentation>
      </Lemma>
      <Sense id="bomba..1" />
      <Sense id="bomba..2" />
    </LexicalEntry>
  </Lexicon>
</LexicalResource>
"#;

    pub(crate) fn write_sample(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("saldo.xml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_sample_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), SAMPLE);

        let loaded = load_source(&path).unwrap();
        assert_eq!(loaded.source_sha256, fingerprint::sha256_hex(SAMPLE.as_bytes()));

        let res = loaded.resource;
        assert_eq!(res.count_entries(), 2);
        assert_eq!(res.count_senses(), 3);
        assert_eq!(res.count_sense_relations(), 1);
        assert_eq!(res.entries()[0].lemma.form_representations.len(), 2);
        assert_eq!(res.entries()[1].wd_lexical_category, "Q24905");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.xml")).unwrap_err();
        assert!(matches!(err, LexiconError::Io(_)));
    }
}
