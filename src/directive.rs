use once_cell::sync::Lazy;
use regex::Regex;

// @module: Shared grammar for multilang tag markers
//
// Every component that looks at a raw line goes through this module, so the
// segmenter and the validators cannot disagree on what counts as a directive.

// matches: cap[1]: opening bracket, cap[2]: payload, cap[3]: closing bracket
static LANG_SECTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([<\[])!--lang:(.*?)--([>\]])").unwrap()
});

// header-level directive, the closer may be repeated
static HEADER_DIRECTIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<!--multilang (.+?)(?:-->)+").unwrap()
});

// loose lang clause, flags markers that failed the real grammar
static LOOSE_LANG_CLAUSE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--lang:(.*)--").unwrap()
});

/// Payload of the header-level buttons directive
pub const BUTTONS_PAYLOAD: &str = "buttons";

/// Bracket variant used by a lang-section marker.
///
/// `<...>` is the properly balanced form; `[...]` opens or closes without
/// matching discipline and is used by authors to flag an anomaly. The parser
/// accepts either; only the validator gives the choice meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `<` / `>`
    Angle,
    /// `[` / `]`
    Square,
}

impl Bracket {
    fn from_match(s: &str) -> Self {
        match s {
            "<" | ">" => Bracket::Angle,
            _ => Bracket::Square,
        }
    }
}

/// Which languages a directive selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveScope {
    /// `lang:*` — content for every output language
    All,
    /// Explicit comma-separated language codes
    Langs(Vec<String>),
}

/// A parsed lang-section marker occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangDirective {
    /// Opening bracket variant
    pub open: Bracket,
    /// Raw payload between `!--lang:` and the first `--`
    pub payload: String,
    /// Closing bracket variant
    pub close: Bracket,
    /// 1-based line number the marker was found on
    pub line: usize,
}

impl LangDirective {
    /// Parse a lang-section marker anywhere on `text`, recording `line`
    /// (1-based) as its position. Returns `None` if the grammar does not
    /// match; malformed markers fall through to ordinary text handling.
    pub fn parse(text: &str, line: usize) -> Option<Self> {
        let caps = LANG_SECTION_REGEX.captures(text)?;
        Some(LangDirective {
            open: Bracket::from_match(&caps[1]),
            payload: caps[2].to_string(),
            close: Bracket::from_match(&caps[3]),
            line,
        })
    }

    /// Whether this is the wildcard `lang:*` directive
    pub fn is_wildcard(&self) -> bool {
        self.payload == "*"
    }

    /// The scope this directive opens
    pub fn scope(&self) -> DirectiveScope {
        if self.is_wildcard() {
            DirectiveScope::All
        } else {
            DirectiveScope::Langs(
                self.payload.split(',').map(|s| s.to_string()).collect(),
            )
        }
    }
}

impl DirectiveScope {
    /// Whether `lang` is selected by this scope
    pub fn includes(&self, lang: &str) -> bool {
        match self {
            DirectiveScope::All => true,
            DirectiveScope::Langs(codes) => codes.iter().any(|c| c == lang),
        }
    }
}

/// Right-trim the trailing whitespace the scanners ignore (spaces, tabs, CR)
pub fn rtrim(line: &str) -> &str {
    line.trim_end_matches([' ', '\t', '\r'])
}

/// Whether a (right-trimmed) line is a code-fence marker. Fence lines toggle
/// fence state but are otherwise ordinary text.
pub fn is_fence_marker(line: &str) -> bool {
    rtrim(line).trim_start().starts_with("```")
}

/// Payload of a header-level `<!--multilang ...-->` directive at the start
/// of `line`, if any. `None` for lang-section markers and ordinary text.
pub fn header_directive_payload(line: &str) -> Option<&str> {
    HEADER_DIRECTIVE_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `line` opens the buttons block
pub fn is_buttons_directive(line: &str) -> bool {
    header_directive_payload(line) == Some(BUTTONS_PAYLOAD)
}

/// Whether a text line carries a lang-clause-looking substring even though
/// the real grammar did not match (missing or malformed brackets)
pub fn contains_loose_lang_clause(line: &str) -> bool {
    LOOSE_LANG_CLAUSE_REGEX.is_match(line)
}
