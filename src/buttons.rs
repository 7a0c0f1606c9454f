use crate::errors::ResourceError;
use crate::header::HeaderTable;
use crate::lang_resource::{LangRegistry, PHRASE_ALSO_AVAILABLE, PHRASE_LANGUAGE};

// @module: Translation-links ("buttons") block generator

/// Base URL of the flag images referenced by the generated block
pub const IMG_URL: &str = "https://raw.githubusercontent.com/codenautas/multilang/master/img/";

/// Build the canonical buttons block for `lang`: the target's own flag line,
/// then one linked flag entry per *other* header language, each named in the
/// target language. The trailing ` -` separator is trimmed; with no other
/// languages the block ends on the bare "also available in" line.
pub fn generate_buttons(
    header: &HeaderTable,
    registry: &LangRegistry,
    lang: &str,
) -> Result<String, ResourceError> {
    let ln = registry.merged(lang)?;
    let mut r = String::from("<!--multilang buttons-->\n\n");
    r.push_str(&format!(
        "{}: ![{}]({}lang-{}.png)\n",
        ln.phrase(PHRASE_LANGUAGE),
        ln.name,
        IMG_URL,
        ln.abr
    ));
    r.push_str(&format!("{}:", ln.phrase(PHRASE_ALSO_AVAILABLE)));
    for entry in header.entries() {
        if entry.code == lang {
            continue;
        }
        r.push_str(&format!(
            "\n[![{}]({}lang-{}.png)]({}) -",
            ln.display_name(&entry.code),
            IMG_URL,
            entry.code,
            entry.file_name
        ));
    }
    if !r.ends_with(':') {
        r.truncate(r.len() - 2);
    }
    Ok(r)
}
