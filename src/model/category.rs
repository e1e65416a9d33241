//! Part-of-speech code → Wikidata lexical category.
//!
//! Codes follow the SUC/SALDO tag set:
//! <https://spraakbanken.gu.se/parole/Docs/SUC2.0-manual.pdf>

use crate::error::{LexiconError, Result};

pub const LEXICAL_CATEGORIES: &[(&str, &str)] = &[
    ("abbrev", "Q102786"),  // abbreviation
    ("jj", "Q34698"),       // adjective
    ("rg", "Q163875"),      // cardinal number
    ("prefix", "Q134830"),  // prefix
    ("article", "Q103184"), // article
    ("suffix", "Q102047"),  // suffix
    ("hp", "Q1050744"),     // relative pronoun
    ("ps", "Q1502460"),     // possessive pronoun
    ("nn", "Q1084"),        // noun
    ("av", "Q34698"),       // adjective
    ("vb", "Q24905"),       // verb
    ("pm", "Q147276"),      // proper noun
    ("ab", "Q192420"),      // adverb
    ("in", "Q198061"),      // interjection
    ("pp", "Q168713"),      // preposition
    ("nl", "Q13164"),       // numeral
    ("pn", "Q149667"),      // pronoun
    ("sn", "Q107715"),      // subjunction
    ("kn", "Q11376"),       // conjunction
    ("al", "Q7247"),        // article
    ("ie", "Q213443"),      // infinitive particle
    ("mxc", "Q4115189"),    // multiword prefix
    ("sxc", "Q59019669"),   // prefix
    ("abh", "Q15563735"),   // adverb suffix
    ("avh", "Q5307395"),    // adjective suffix
    ("nnh", "Q4961746"),    // noun suffix
    ("nnm", "Q724908"),     // multiword noun
    ("nna", "Q1077132"),    // noun, abbreviation
    ("avm", "Q729"),        // multiword adjective
    ("ava", "Q25132092"),   // adjective, abbreviation
    ("vbm", "Q181714"),     // multiword verb
    ("vba", "Q4231319"),    // verb, abbreviation
    ("pmm", "Q188627"),     // multiword proper noun
    ("pma", "Q24888353"),   // proper noun, abbreviation
    ("abm", "Q6734441"),    // multiword adverb
    ("aba", "Q40482579"),   // adverb, abbreviation
    ("pnm", "Q10828648"),   // multiword pronoun
    ("inm", "Q69556741"),   // multiword interjection
    ("ppm", "Q30840955"),   // multiword preposition
    ("ppa", "Q32736580"),   // preposition, abbreviation
    ("nlm", "Q22069880"),   // multiword numeral
    ("knm", "Q69559303"),   // multiword conjunction
    ("snm", "Q69559308"),   // multiword subjunction
    ("kna", "Q69559304"),   // conjunction, abbreviation
    ("ssm", "Q69559307"),   // multiword, clause
];

/// Maps a part-of-speech code to its category id. An empty code maps to an
/// empty id; any other unknown code is an error.
pub fn lexical_category(pos: &str) -> Result<&'static str> {
    if pos.is_empty() {
        return Ok("");
    }

    LEXICAL_CATEGORIES
        .iter()
        .find(|(code, _)| *code == pos)
        .map(|(_, qid)| *qid)
        .ok_or_else(|| LexiconError::UnmappedCategory(pos.to_string()))
}
