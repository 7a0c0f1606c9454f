use crate::buttons::generate_buttons;
use crate::errors::RenderError;
use crate::header::HeaderTable;
use crate::lang_resource::{LangRegistry, PHRASE_DO_NOT_MODIFY};
use crate::segmenter::{segment, Segment};

// @module: Document renderer
//
// Composes the header table, the segment sequence and the buttons generator
// into the final per-language output text.

/// Render `document` for a single target language.
///
/// The header segment becomes the generated-file banner (carrying the BOM
/// forward), buttons segments become the generated block, and text segments
/// are included only when their scope covers `lang`. Fatal only for this
/// language; other languages render independently.
pub fn render(document: &str, registry: &LangRegistry, lang: &str) -> Result<String, RenderError> {
    let header = HeaderTable::parse(document);
    let main = header.main().ok_or(RenderError::NoHeaderDirective)?;
    if !header.contains(lang) {
        return Err(RenderError::UnknownTargetLang(lang.to_string()));
    }
    let main_file = header.file_name(main).unwrap_or_default();
    let ln = registry.merged(lang)?;
    let buttons = generate_buttons(&header, registry, lang)?;

    let mut out = String::new();
    for seg in segment(document) {
        match seg {
            Segment::Header { has_bom } => {
                if has_bom {
                    out.push('\u{feff}');
                }
                out.push_str("<!-- multilang from ");
                out.push_str(main_file);
                out.push_str("\n\n\n\n\n");
                out.push_str(ln.phrase(PHRASE_DO_NOT_MODIFY));
                out.push_str("\n\n\n\n\n-->\n");
            }
            Segment::Buttons => {
                out.push_str(&buttons);
                out.push_str("\n\n");
            }
            Segment::Text { scope, text } => {
                if scope.includes(lang) {
                    out.push_str(&text);
                }
            }
        }
    }
    Ok(out)
}
