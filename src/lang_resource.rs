/*!
 * Per-language phrase resources.
 *
 * A resource names the language, its flag-image suffix, localized display
 * names for the other languages, and the phrases the generator emits. The
 * default `en` resource is compiled in; every other language is loaded from
 * a `lang-<code>.yaml` file through an injectable loader and kept in an
 * accumulate-only registry cache.
 */

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::errors::ResourceError;

/// The default language; always available as a fallback
pub const DEFAULT_LANG: &str = "en";

/// Required phrase key: the word "language"
pub const PHRASE_LANGUAGE: &str = "language";
/// Required phrase key: the "also available in" list intro
pub const PHRASE_ALSO_AVAILABLE: &str = "also available in";
/// Required phrase key: the generated-file banner text
pub const PHRASE_DO_NOT_MODIFY: &str = "DO NOT MODIFY DIRECTLY";

/// A per-language phrase resource record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangResource {
    /// Display name of the language, in the language itself
    pub name: String,
    /// Flag-image suffix (usually the language code)
    pub abr: String,
    /// Localized display names keyed by language code
    #[serde(default)]
    pub languages: HashMap<String, String>,
    /// Localized phrases keyed by phrase key
    #[serde(default)]
    pub phrases: HashMap<String, String>,
}

impl LangResource {
    /// The compiled-in default (`en`) resource
    pub fn builtin_default() -> Self {
        let languages = [
            ("en", "English"),
            ("es", "Spanish"),
            ("it", "Italian"),
            ("ru", "Russian"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let phrases = [
            (PHRASE_LANGUAGE, "language"),
            (PHRASE_ALSO_AVAILABLE, "also available in"),
            (
                PHRASE_DO_NOT_MODIFY,
                "DO NOT MODIFY DIRECTLY THIS FILE WAS GENERATED BY multilang",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        LangResource {
            name: "English".to_string(),
            abr: "en".to_string(),
            languages,
            phrases,
        }
    }

    /// Shallow-merge this resource over `default`: `name` and `abr` come from
    /// this resource, `languages` and `phrases` keep every default entry not
    /// overridden key-by-key.
    pub fn merged_over(&self, default: &LangResource) -> LangResource {
        let mut languages = default.languages.clone();
        languages.extend(self.languages.iter().map(|(k, v)| (k.clone(), v.clone())));
        let mut phrases = default.phrases.clone();
        phrases.extend(self.phrases.iter().map(|(k, v)| (k.clone(), v.clone())));
        LangResource {
            name: self.name.clone(),
            abr: self.abr.clone(),
            languages,
            phrases,
        }
    }

    /// Look up a phrase, falling back to the key itself
    pub fn phrase<'a>(&'a self, key: &'a str) -> &'a str {
        self.phrases.get(key).map_or(key, String::as_str)
    }

    /// Localized display name for a language code. Falls back to the ISO
    /// English name, then to the bare code.
    pub fn display_name(&self, code: &str) -> String {
        if let Some(name) = self.languages.get(code) {
            return name.clone();
        }
        if let Some(lang) = isolang::Language::from_639_1(code) {
            return lang.to_name().to_string();
        }
        code.to_string()
    }
}

/// Loads a language's resource from wherever it lives
pub trait LangLoader: Send + Sync {
    /// Load the raw (unmerged) resource for `lang`
    fn load(&self, lang: &str) -> Result<LangResource, ResourceError>;
}

/// Loader reading `lang-<code>.yaml` files from a resource directory
pub struct FsLangLoader {
    dir: PathBuf,
}

impl FsLangLoader {
    /// Create a loader rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsLangLoader { dir: dir.into() }
    }
}

impl LangLoader for FsLangLoader {
    fn load(&self, lang: &str) -> Result<LangResource, ResourceError> {
        let path = self.dir.join(format!("lang-{lang}.yaml"));
        if !path.is_file() {
            return Err(ResourceError::NotFound {
                lang: lang.to_string(),
                path,
            });
        }
        let raw = fs::read_to_string(&path).map_err(|source| ResourceError::Io {
            path: path.clone(),
            source,
        })?;
        // resource files may carry a BOM
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
        serde_yaml::from_str(raw).map_err(|source| ResourceError::Parse { path, source })
    }
}

/// Accumulate-only cache of loaded language resources.
///
/// Entries are only ever added, never replaced or removed, so a racing
/// duplicate load is harmless and the cache needs no invalidation.
pub struct LangRegistry {
    loader: Box<dyn LangLoader>,
    cache: RwLock<HashMap<String, Arc<LangResource>>>,
}

impl LangRegistry {
    /// Create a registry over `loader`, with the built-in default resource
    /// already resident
    pub fn new(loader: Box<dyn LangLoader>) -> Self {
        let mut cache = HashMap::new();
        cache.insert(
            DEFAULT_LANG.to_string(),
            Arc::new(LangResource::builtin_default()),
        );
        LangRegistry {
            loader,
            cache: RwLock::new(cache),
        }
    }

    /// Registry backed by `lang-<code>.yaml` files under `dir`
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FsLangLoader::new(dir)))
    }

    /// The raw (unmerged) resource for `lang`, loading it on first use
    pub fn get(&self, lang: &str) -> Result<Arc<LangResource>, ResourceError> {
        if let Some(resource) = self.cache.read().get(lang) {
            return Ok(Arc::clone(resource));
        }
        let loaded = Arc::new(self.loader.load(lang)?);
        debug!("loaded resource for lang '{}'", lang);
        let mut cache = self.cache.write();
        let resident = cache
            .entry(lang.to_string())
            .or_insert_with(|| Arc::clone(&loaded));
        Ok(Arc::clone(resident))
    }

    /// The resource for `lang` merged over the default resource
    pub fn merged(&self, lang: &str) -> Result<LangResource, ResourceError> {
        let default = self.get(DEFAULT_LANG)?;
        if lang == DEFAULT_LANG {
            return Ok((*default).clone());
        }
        let target = self.get(lang)?;
        Ok(target.merged_over(&default))
    }

    /// Number of resident resources
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether the cache holds no resources (never true in practice, the
    /// default resource is always resident)
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}
