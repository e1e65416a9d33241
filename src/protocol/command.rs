#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Convert,
    Stats,
    Split,
    LemgramGet,
    CategoryLookup,
    DetectEncoding,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "lexicon.convert" => Command::Convert,
            "lexicon.stats" => Command::Stats,
            "lexicon.split" => Command::Split,
            "lemgram.get" => Command::LemgramGet,
            "category.lookup" => Command::CategoryLookup,
            "encoding.detect" => Command::DetectEncoding,
            _ => Command::Unknown,
        }
    }
}
