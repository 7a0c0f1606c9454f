/*!
 * # multilang
 *
 * A Rust library and CLI for generating per-language documents from a single
 * multilingual markdown/HTML source.
 *
 * ## Features
 *
 * - Split a document into language-tagged segments driven by inline
 *   `<!--lang:xx-->` markers
 * - Validate the tagging discipline (bracket balance, per-language coverage,
 *   wildcard placement) with advisory warnings
 * - Generate the translation-links ("buttons") block per output language
 * - Load per-language phrase resources from YAML with an accumulate-only
 *   registry cache
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `directive`: the shared tag-marker grammar
 * - `header`: the header table parser (declared languages and file names)
 * - `segmenter`: the line-based document segmenter
 * - `validator`: structural directive and buttons validators
 * - `buttons`: the buttons block generator
 * - `renderer`: per-language document composition
 * - `lang_resource`: phrase resources, loader trait, registry cache
 * - `app_controller`: the generation run (read, warn, fan out, write)
 * - `file_utils`: file system operations
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_controller;
pub mod buttons;
pub mod directive;
pub mod errors;
pub mod file_utils;
pub mod header;
pub mod lang_resource;
pub mod renderer;
pub mod segmenter;
pub mod validator;

// Re-export main types for easier usage
pub use app_controller::{Controller, RunOptions};
pub use buttons::generate_buttons;
pub use directive::{Bracket, DirectiveScope, LangDirective};
pub use errors::{AppError, RenderError, ResourceError};
pub use header::{HeaderEntry, HeaderTable};
pub use lang_resource::{FsLangLoader, LangLoader, LangRegistry, LangResource};
pub use renderer::render;
pub use segmenter::{segment, Segment};
pub use validator::{
    collect_warnings, stringize_warnings, validate_buttons, validate_directives, Warning,
    WarningKind,
};
