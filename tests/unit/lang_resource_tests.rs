/*!
 * Tests for language resources, loaders, and the registry cache
 */

use std::collections::HashMap;
use std::fs;
use std::sync::atomic::Ordering;

use multilang::errors::ResourceError;
use multilang::lang_resource::{
    FsLangLoader, LangLoader, LangRegistry, LangResource, DEFAULT_LANG,
    PHRASE_DO_NOT_MODIFY, PHRASE_LANGUAGE,
};

use crate::common::{spanish_resource, FakeLoader};

#[test]
fn test_builtin_default_should_carry_required_phrases() {
    let en = LangResource::builtin_default();
    assert_eq!(en.abr, DEFAULT_LANG);
    assert_eq!(en.phrase(PHRASE_LANGUAGE), "language");
    assert!(en.phrase(PHRASE_DO_NOT_MODIFY).contains("DO NOT MODIFY"));
    assert_eq!(en.display_name("es"), "Spanish");
}

#[test]
fn test_phrase_with_missing_key_should_fall_back_to_key() {
    let en = LangResource::builtin_default();
    assert_eq!(en.phrase("no such phrase"), "no such phrase");
}

#[test]
fn test_merged_over_should_fill_gaps_from_default() {
    let es = spanish_resource();
    let merged = es.merged_over(&LangResource::builtin_default());
    // own values win
    assert_eq!(merged.name, "castellano");
    assert_eq!(merged.display_name("en"), "inglés");
    assert_eq!(merged.phrase(PHRASE_LANGUAGE), "idioma");
    // gaps come from the default table
    assert_eq!(merged.display_name("it"), "Italian");
    assert!(merged.phrase(PHRASE_DO_NOT_MODIFY).contains("NO MODIFIQUE"));
}

#[test]
fn test_display_name_with_unknown_code_should_fall_back_to_code() {
    let en = LangResource::builtin_default();
    // not a valid ISO 639-1 code either
    assert_eq!(en.display_name("zz"), "zz");
}

#[test]
fn test_registry_get_should_load_each_lang_once() {
    let mut resources = HashMap::new();
    resources.insert("es".to_string(), spanish_resource());
    let loader = FakeLoader::new(resources);
    let calls = loader.calls_handle();
    let registry = LangRegistry::new(Box::new(loader));

    let first = registry.get("es").unwrap();
    let second = registry.get("es").unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // the default resource is compiled in, never loaded
    registry.get(DEFAULT_LANG).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_registry_merged_with_default_lang_should_return_builtin() {
    let registry = LangRegistry::new(Box::new(FakeLoader::new(HashMap::new())));
    let merged = registry.merged(DEFAULT_LANG).unwrap();
    assert_eq!(merged, LangResource::builtin_default());
}

#[test]
fn test_registry_merged_with_unknown_lang_should_report_not_found() {
    let registry = LangRegistry::new(Box::new(FakeLoader::new(HashMap::new())));
    let err = registry.merged("it").unwrap_err();
    match err {
        ResourceError::NotFound { lang, .. } => assert_eq!(lang, "it"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_fs_loader_with_missing_file_should_report_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FsLangLoader::new(dir.path());
    match loader.load("es") {
        Err(ResourceError::NotFound { lang, path }) => {
            assert_eq!(lang, "es");
            assert!(path.ends_with("lang-es.yaml"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_fs_loader_with_yaml_file_should_parse_resource() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lang-es.yaml"),
        "name: castellano\nabr: es\nphrases:\n  language: idioma\n",
    )
    .unwrap();
    let loader = FsLangLoader::new(dir.path());
    let es = loader.load("es").unwrap();
    assert_eq!(es.name, "castellano");
    assert_eq!(es.abr, "es");
    assert_eq!(es.phrase("language"), "idioma");
    // languages table was omitted and defaults to empty
    assert!(es.languages.is_empty());
}

#[test]
fn test_fs_loader_with_bom_should_strip_it() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lang-it.yaml"),
        "\u{feff}name: italiano\nabr: it\n",
    )
    .unwrap();
    let loader = FsLangLoader::new(dir.path());
    let it = loader.load("it").unwrap();
    assert_eq!(it.name, "italiano");
}

#[test]
fn test_fs_loader_with_invalid_yaml_should_report_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("lang-ru.yaml"), "name: [unclosed\n").unwrap();
    let loader = FsLangLoader::new(dir.path());
    assert!(matches!(
        loader.load("ru"),
        Err(ResourceError::Parse { .. })
    ));
}
