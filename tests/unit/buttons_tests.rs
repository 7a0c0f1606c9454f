/*!
 * Tests for the buttons block generator
 */

use multilang::buttons::{generate_buttons, IMG_URL};
use multilang::header::HeaderTable;

use crate::common::test_registry;

#[test]
fn test_generate_buttons_with_spanish_target_should_localize_phrases() {
    let registry = test_registry();
    let header = HeaderTable::parse("<!--multilang v1 en:doc.md es:doc.es.md-->");
    let block = generate_buttons(&header, &registry, "es").unwrap();
    assert_eq!(
        block,
        format!(
            "<!--multilang buttons-->\n\n\
             idioma: ![castellano]({IMG_URL}lang-es.png)\n\
             también disponible en:\n\
             [![inglés]({IMG_URL}lang-en.png)](doc.md)"
        )
    );
}

#[test]
fn test_generate_buttons_with_main_target_should_link_other_langs() {
    let registry = test_registry();
    let header = HeaderTable::parse("<!--multilang v1 en:doc.md es:doc.es.md-->");
    let block = generate_buttons(&header, &registry, "en").unwrap();
    assert_eq!(
        block,
        format!(
            "<!--multilang buttons-->\n\n\
             language: ![English]({IMG_URL}lang-en.png)\n\
             also available in:\n\
             [![Spanish]({IMG_URL}lang-es.png)](doc.es.md)"
        )
    );
}

#[test]
fn test_generate_buttons_with_single_lang_should_end_on_intro_line() {
    let registry = test_registry();
    let header = HeaderTable::parse("<!--multilang v1 en:doc.md-->");
    let block = generate_buttons(&header, &registry, "en").unwrap();
    assert!(block.ends_with("also available in:"));
    assert!(!block.contains("]("));
}

#[test]
fn test_generate_buttons_with_three_langs_should_separate_links_with_dash() {
    let registry = test_registry();
    let header =
        HeaderTable::parse("<!--multilang v1 en:a.md es:b.md it:c.md-->");
    let block = generate_buttons(&header, &registry, "en").unwrap();
    // two links, one ` -` separator between them, none trailing
    assert!(block.contains("](b.md) -\n"));
    assert!(block.ends_with("](c.md)"));
}

#[test]
fn test_generate_buttons_with_unknown_display_name_should_use_iso_name() {
    let registry = test_registry();
    // "fr" has no entry in the built-in name table
    let header = HeaderTable::parse("<!--multilang v1 en:a.md fr:b.md-->");
    let block = generate_buttons(&header, &registry, "en").unwrap();
    assert!(block.contains(&format!("[![French]({IMG_URL}lang-fr.png)](b.md)")));
}

#[test]
fn test_generate_buttons_with_unloadable_lang_should_fail() {
    let registry = test_registry();
    let header = HeaderTable::parse("<!--multilang v1 en:a.md it:b.md-->");
    // the fake loader only serves Spanish
    assert!(generate_buttons(&header, &registry, "it").is_err());
}
