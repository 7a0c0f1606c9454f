/*!
 * Document segmenter.
 *
 * Scans the source document line by line and partitions it into an ordered
 * sequence of typed segments: the header, buttons placeholders, and
 * language-scoped text. Directive lines are consumed, never emitted; every
 * other line lands verbatim in exactly one text segment.
 */

use crate::directive::{self, DirectiveScope, LangDirective};

/// A typed piece of the source document, in document order
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// The document header; replaced by the generated banner at render time
    Header {
        /// Whether the source started with a byte-order mark
        has_bom: bool,
    },
    /// Placeholder for the buttons block; its text is generated, not copied
    Buttons,
    /// Raw multi-line content included for the languages in `scope`
    Text {
        /// Which output languages the text applies to
        scope: DirectiveScope,
        /// Verbatim content, original line terminators preserved
        text: String,
    },
}

impl Segment {
    fn empty_text(scope: DirectiveScope) -> Self {
        Segment::Text {
            scope,
            text: String::new(),
        }
    }
}

/// Which section the scanner is accumulating into. Orthogonal to the code
/// fence flag: a fence only shields lines from directive recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    /// No section open; the next plain line opens an implicit all-section
    Idle,
    /// Implicit `scope: all` section opened by a plain text line
    AllSection,
    /// Explicit section opened by a lang directive (wildcard included)
    LangSection,
}

/// Buttons-block sub-state: the block closes on the first empty line after
/// at least one non-empty line has been seen
#[derive(Debug, Clone, Copy)]
struct ButtonsBlock {
    have_content: bool,
}

/// Partition `document` into its ordered segment sequence.
pub fn segment(document: &str) -> Vec<Segment> {
    let has_bom = document.starts_with('\u{feff}');
    let doc = document.strip_prefix('\u{feff}').unwrap_or(document);

    let mut segments = vec![Segment::Header { has_bom }];
    let lines: Vec<&str> = doc.split('\n').collect();
    let last_idx = lines.len().saturating_sub(1);

    let mut in_fence = false;
    let mut buttons: Option<ButtonsBlock> = None;
    let mut section = SectionState::Idle;

    for (idx, raw) in lines.iter().enumerate() {
        let line = directive::rtrim(raw);
        if directive::is_fence_marker(line) {
            in_fence = !in_fence;
        }

        if !in_fence && buttons.is_none() {
            if let Some(payload) = directive::header_directive_payload(line) {
                if payload == directive::BUTTONS_PAYLOAD {
                    segments.push(Segment::Buttons);
                    buttons = Some(ButtonsBlock {
                        have_content: false,
                    });
                    if section == SectionState::AllSection {
                        section = SectionState::Idle;
                    }
                }
                // any other header directive (the opening <!--multilang vN ...-->
                // line included) is consumed silently
                continue;
            }
            if let Some(d) = LangDirective::parse(line, idx + 1) {
                segments.push(Segment::empty_text(d.scope()));
                section = SectionState::LangSection;
                continue;
            }
            if section == SectionState::Idle {
                segments.push(Segment::empty_text(DirectiveScope::All));
                section = SectionState::AllSection;
            }
        }

        if let Some(block) = buttons.as_mut() {
            // the block's real content is generated at render time; every
            // line of it, the closing blank line included, is discarded
            if !block.have_content && !line.is_empty() {
                block.have_content = true;
            } else if block.have_content && line.is_empty() {
                buttons = None;
            }
            continue;
        }

        append_line(&mut segments, raw, idx == last_idx);
    }

    segments
}

/// Append a raw line to the open segment. Text that lands after a closed
/// buttons block while an explicit lang section is still open has nowhere
/// visible to go and is dropped.
fn append_line(segments: &mut [Segment], raw: &str, is_last: bool) {
    if let Some(Segment::Text { text, .. }) = segments.last_mut() {
        text.push_str(raw);
        if !is_last {
            text.push('\n');
        }
    }
}
