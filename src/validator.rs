/*!
 * Structural validators for the tagging discipline.
 *
 * Both validators re-scan the raw document independently of the segmenter
 * (sharing only the directive grammar) and emit advisory warnings. Warnings
 * never block rendering.
 */

use log::debug;
use thiserror::Error;

use crate::buttons::generate_buttons;
use crate::directive::{self, Bracket, LangDirective};
use crate::header::HeaderTable;
use crate::lang_resource::LangRegistry;

/// The kinds of structural warnings the validators emit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarningKind {
    /// A section opened with `[` before any section started
    #[error("unbalanced start \"[\"")]
    UnbalancedStart,

    /// A header-declared language had no section before a checkpoint (or the
    /// end of the document)
    #[error("missing section for lang {0}")]
    MissingSection(String),

    /// `lang:*` must follow another wildcard or the last declared language
    #[error("lang:* must be after other lang:* or after last lang section ({0})")]
    MisplacedWildcard(String),

    /// `lang:*` must close with `>`
    #[error("lang:* must end with \">\"")]
    WildcardNotClosed,

    /// The main language's section must close with `>`
    #[error("main lang must end with \">\" (lang:{0})")]
    MainLangNotClosed(String),

    /// The last declared language opened with `<` but did not close with `>`
    #[error("unbalanced \"<\"")]
    UnbalancedAngle,

    /// A directive names a language the header does not declare
    #[error("lang:{0} not included in the header")]
    LangNotInHeader(String),

    /// A text line carries a lang clause that failed the marker grammar
    #[error("lang clause must not be included in text line")]
    LangClauseInText,

    /// A buttons directive inside a non-main, non-wildcard language region
    #[error("button section must be in main language or in all languages")]
    ButtonsInWrongSection,

    /// An existing buttons block line differs from the regenerated one
    #[error("button section does not match. Expected:\n{0}\n")]
    ButtonsMismatch(String),
}

/// A structural warning: advisory only, tied to a 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// 1-based line number (one past the last line for end-of-document
    /// coverage warnings)
    pub line: usize,
    /// What went wrong
    pub kind: WarningKind,
}

impl Warning {
    fn new(line: usize, kind: WarningKind) -> Self {
        Warning { line, kind }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// Render a warning list for display, one warning per line
pub fn stringize_warnings(warns: &[Warning]) -> String {
    let mut r = String::new();
    for w in warns {
        r.push_str(&w.to_string());
        r.push('\n');
    }
    r
}

/// Check the lang-directive discipline: bracket balance, per-language
/// coverage between checkpoints, wildcard placement, and stray lang clauses
/// in text lines. Lines inside a code fence are skipped entirely.
pub fn validate_directives(document: &str) -> Vec<Warning> {
    let header = HeaderTable::parse(document);
    let main = header.main().map(str::to_string);
    let last = header.last().map(str::to_string);

    let mut warns = Vec::new();
    let mut first_section_found = false;
    // payloads are accumulated atomically: a comma list is one entry
    let mut found: Vec<String> = Vec::new();
    let mut prev_payload = String::new();
    let mut in_fence = false;

    let lines: Vec<&str> = document.split('\n').collect();
    for (idx, raw) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line = directive::rtrim(raw);
        if directive::is_fence_marker(line) {
            in_fence = !in_fence;
        }
        if in_fence {
            continue;
        }

        let Some(d) = LangDirective::parse(line, line_no) else {
            if directive::contains_loose_lang_clause(line) {
                warns.push(Warning::new(line_no, WarningKind::LangClauseInText));
            }
            continue;
        };

        found.push(d.payload.clone());
        if !first_section_found && d.open == Bracket::Square {
            warns.push(Warning::new(line_no, WarningKind::UnbalancedStart));
        }
        if d.close == Bracket::Angle {
            // checkpoint: every declared language must have appeared
            for code in header.codes() {
                if !found.iter().any(|f| f == code) {
                    warns.push(Warning::new(
                        line_no,
                        WarningKind::MissingSection(code.to_string()),
                    ));
                }
            }
            found.clear();
            if let Some(m) = &main {
                found.push(m.clone());
            }
            first_section_found = false;
        }
        if d.is_wildcard() {
            if prev_payload != "*" && Some(&prev_payload) != last.as_ref() {
                warns.push(Warning::new(
                    line_no,
                    WarningKind::MisplacedWildcard(last.clone().unwrap_or_default()),
                ));
            }
            if d.close != Bracket::Angle {
                warns.push(Warning::new(line_no, WarningKind::WildcardNotClosed));
            }
        }
        if main.as_deref() == Some(d.payload.as_str()) && d.close != Bracket::Angle {
            warns.push(Warning::new(
                line_no,
                WarningKind::MainLangNotClosed(d.payload.clone()),
            ));
        }
        if last.as_deref() == Some(d.payload.as_str())
            && d.open == Bracket::Angle
            && d.close != Bracket::Angle
        {
            warns.push(Warning::new(line_no, WarningKind::UnbalancedAngle));
        }
        if !d.is_wildcard() && !header.contains(&d.payload) {
            warns.push(Warning::new(
                line_no,
                WarningKind::LangNotInHeader(d.payload.clone()),
            ));
        }
        first_section_found = true;
        prev_payload = d.payload;
    }

    // languages never seen at all warn at the end of the document
    for code in header.codes() {
        if !found.iter().any(|f| f == code) {
            warns.push(Warning::new(
                lines.len(),
                WarningKind::MissingSection(code.to_string()),
            ));
        }
    }
    warns
}

/// Check buttons-block placement and content: a buttons directive must sit in
/// the main language or an all-languages region, and an existing block must
/// match the freshly generated canonical text line by line (blank canonical
/// lines are not compared).
pub fn validate_buttons(document: &str, registry: &LangRegistry) -> Vec<Warning> {
    let header = HeaderTable::parse(document);
    let main = header.main().map(str::to_string);

    let mut warns = Vec::new();
    // payload of the language region the scan is inside, closed by a blank line
    let mut region: Option<String> = None;
    let mut canonical: Vec<String> = Vec::new();
    let mut compare_at = 0usize;
    let mut in_buttons_section = false;

    for (idx, raw) in document.split('\n').enumerate() {
        let line_no = idx + 1;
        match &region {
            None => {
                if let Some(d) = LangDirective::parse(raw, line_no) {
                    region = Some(d.payload);
                }
            }
            Some(_) if raw.is_empty() => region = None,
            Some(_) => {}
        }

        if directive::is_buttons_directive(raw) {
            let region_ok = match (&region, &main) {
                (None, _) => true,
                (Some(r), _) if r == "*" => true,
                (Some(r), Some(m)) => r == m,
                (Some(_), None) => false,
            };
            if !region_ok {
                warns.push(Warning::new(line_no, WarningKind::ButtonsInWrongSection));
            } else if let Some(m) = &main {
                match generate_buttons(&header, registry, m) {
                    Ok(text) => {
                        canonical = text.split('\n').map(str::to_string).collect();
                        in_buttons_section = true;
                        compare_at = 0;
                    }
                    Err(e) => {
                        debug!("skipping buttons comparison, resource unavailable: {e}");
                    }
                }
            }
        }

        if in_buttons_section && compare_at < canonical.len() {
            let expected = &canonical[compare_at];
            if !expected.is_empty() && raw != expected.as_str() {
                warns.push(Warning::new(
                    line_no,
                    WarningKind::ButtonsMismatch(expected.clone()),
                ));
            }
            compare_at += 1;
        }
    }
    warns
}

/// All warnings for a document: buttons checks first, then the directive
/// discipline checks, each in document order.
pub fn collect_warnings(document: &str, registry: &LangRegistry) -> Vec<Warning> {
    let mut warns = validate_buttons(document, registry);
    warns.extend(validate_directives(document));
    warns
}
