use anyhow::{anyhow, Result};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::errors::{AppError, RenderError};
use crate::file_utils::FileManager;
use crate::header::HeaderTable;
use crate::lang_resource::LangRegistry;
use crate::renderer::render;
use crate::validator::collect_warnings;

// @module: Application controller for document generation

/// Parameters for one generation run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Source multilingual document
    pub input: PathBuf,
    /// Explicit target languages; `None` generates every non-main header
    /// language
    pub langs: Option<Vec<String>>,
    /// Fixed output file name; only valid with a single target language
    pub output: Option<String>,
    /// Output directory for generated documents
    pub directory: Option<PathBuf>,
    /// Only validate and report warnings, write nothing
    pub check_only: bool,
}

/// Main application controller: reads the source, surfaces warnings, and
/// fans out over target languages. A failure for one language never aborts
/// the others.
pub struct Controller {
    registry: LangRegistry,
}

impl Controller {
    /// Controller loading resources from `lang-<code>.yaml` files in
    /// `langs_dir`
    pub fn new(langs_dir: impl Into<PathBuf>) -> Self {
        Self::with_registry(LangRegistry::with_dir(langs_dir))
    }

    /// Controller over a prepared registry (used by tests with fake loaders)
    pub fn with_registry(registry: LangRegistry) -> Self {
        Controller { registry }
    }

    /// Run one generation (or check) pass
    pub fn run(&self, options: &RunOptions) -> Result<()> {
        info!("Processing '{}'...", options.input.display());
        let content = FileManager::read_to_string(&options.input)?;

        let warns = collect_warnings(&content, &self.registry);
        for w in &warns {
            warn!("{w}");
        }
        if options.check_only {
            if warns.is_empty() {
                info!("No warnings.");
                return Ok(());
            }
            return Err(anyhow!("document has {} warning(s)", warns.len()));
        }

        let header = HeaderTable::parse(&content);
        let main = header
            .main()
            .ok_or(AppError::Render(RenderError::NoHeaderDirective))?;

        let mut targets: Vec<String> = match &options.langs {
            Some(langs) => langs.clone(),
            None => header.codes().map(str::to_string).collect(),
        };
        targets.retain(|lang| lang != main);
        if targets.len() > 1 && options.output.is_some() {
            return Err(AppError::OutputWithMultipleLangs.into());
        }
        if targets.is_empty() {
            return Err(AppError::NoTargetLanguage.into());
        }
        let directory = options
            .directory
            .as_ref()
            .ok_or(AppError::MissingOutputDirectory)?;
        if options.langs.is_none() {
            info!("Generating all languages...");
        }

        let mut failed: Vec<String> = Vec::new();
        for lang in &targets {
            match self.generate_one(&content, &header, lang, options, directory) {
                Ok(path) => info!("Generated '{}', file '{}'.", lang, path.display()),
                Err(e) => {
                    error!("Failed to generate '{}': {:#}", lang, e);
                    failed.push(lang.clone());
                }
            }
        }
        if failed.is_empty() {
            Ok(())
        } else {
            Err(AppError::PartialFailure(failed.join(", ")).into())
        }
    }

    fn generate_one(
        &self,
        content: &str,
        header: &HeaderTable,
        lang: &str,
        options: &RunOptions,
        directory: &Path,
    ) -> Result<PathBuf> {
        let file_name = match &options.output {
            Some(name) => name.clone(),
            None => header
                .file_name(lang)
                .ok_or_else(|| RenderError::UnknownTargetLang(lang.to_string()))?
                .to_string(),
        };
        let out_path = directory.join(file_name);
        info!("Generating '{}', writing to '{}'...", lang, out_path.display());
        let rendered = render(content, &self.registry, lang)?;
        FileManager::write_to_file(&out_path, &rendered)?;
        Ok(out_path)
    }
}
