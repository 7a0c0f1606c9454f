use once_cell::sync::Lazy;
use regex::Regex;

// @module: Header table parser
//
// The first `<!--multilang vN xx:file ...-->` directive declares the ordered
// set of output languages. The first pair is the main language, the one the
// source document itself is written in.

// matches: cap[1]: the space-separated code:filename pairs
static MULTILANG_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!--multilang v[0-9]+\s+(.+?)-->").unwrap()
});

// matches: cap[1]: 2-letter code, cap[2]: output file name (.md or .html)
static LANG_PAIR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z]{2}):(\S+\.(?:md|html))").unwrap()
});

/// One declared language and its output file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    /// 2-letter language code
    pub code: String,
    /// Output file name declared for the language
    pub file_name: String,
}

/// Ordered mapping of declared language codes to output file names.
///
/// Derived once per document and never mutated. Codes are unique; a repeated
/// code keeps its first position but takes the last declared file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderTable {
    entries: Vec<HeaderEntry>,
}

impl HeaderTable {
    /// Extract the header table from the first multilang header directive in
    /// the document. A document without one yields an empty table.
    pub fn parse(document: &str) -> Self {
        let mut entries: Vec<HeaderEntry> = Vec::new();
        if let Some(caps) = MULTILANG_HEADER_REGEX.captures(document) {
            for pair in LANG_PAIR_REGEX.captures_iter(&caps[1]) {
                let code = pair[1].to_string();
                let file_name = pair[2].to_string();
                match entries.iter_mut().find(|e| e.code == code) {
                    Some(existing) => existing.file_name = file_name,
                    None => entries.push(HeaderEntry { code, file_name }),
                }
            }
        }
        HeaderTable { entries }
    }

    /// The main language (first declared), if any language was declared
    pub fn main(&self) -> Option<&str> {
        self.entries.first().map(|e| e.code.as_str())
    }

    /// The last declared language
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|e| e.code.as_str())
    }

    /// Whether `code` is declared in the table
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// The declared output file name for `code`
    pub fn file_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.file_name.as_str())
    }

    /// Declared language codes in header order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    /// All entries in header order
    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    /// Whether no language was declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declared languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
