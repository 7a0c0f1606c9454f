#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use multilang::app_controller::{Controller, RunOptions};

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for multilang
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Input multilingual document
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Target language code (repeatable; default: every non-main header language)
    #[arg(short, long = "lang", value_name = "CODE")]
    lang: Vec<String>,

    /// Output file name (single target language only)
    #[arg(short, long)]
    output: Option<String>,

    /// Output directory for generated documents
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Directory containing lang-<code>.yaml phrase resources
    #[arg(long, default_value = "langs")]
    langs_dir: PathBuf,

    /// Only validate the document and report warnings (fails if any)
    #[arg(short, long)]
    check: bool,

    /// Suppress progress output and warnings (errors still shown)
    #[arg(short, long)]
    silent: bool,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// multilang - one source document, one output per language
///
/// Splits a multilingual markdown/HTML document tagged with inline
/// `<!--lang:xx-->` markers into one generated document per language.
#[derive(Parser, Debug)]
#[command(name = "multilang")]
#[command(version = "0.1.0")]
#[command(about = "Generate per-language documents from a multilingual source")]
#[command(long_about = "multilang reads a single markdown/HTML document with interleaved
per-language content and generates one output document per target language,
complete with a translation-links block.

EXAMPLES:
    multilang -d . README.md                 # Generate every non-main language
    multilang -l es -d out README.md         # Generate Spanish only
    multilang -l es -o leeme.md -d . doc.md  # Fixed output file name
    multilang -c README.md                   # Validate the tagging, write nothing
    multilang completions bash               # Generate bash completions

DOCUMENT FORMAT:
    The first line declares the languages and their output files:
        <!--multilang v1 en:README.md es:LEEME.md-->
    Content is scoped with inline markers:
        <!--lang:en-->   ...English content...
        <!--lang:es-->   ...Spanish content...
        <!--lang:*-->    ...content for every language...
    A '<!--multilang buttons-->' line marks where the generated
    translation-links block goes.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "multilang", &mut std::io::stdout());
        return Ok(());
    }

    let args = cli.generate;
    if args.silent {
        log::set_max_level(LevelFilter::Error);
    } else if let Some(level) = &args.log_level {
        log::set_max_level(level.clone().into());
    }

    let input = args
        .input
        .ok_or_else(|| anyhow!("INPUT is required when no subcommand is specified"))?;

    let controller = Controller::new(&args.langs_dir);
    controller.run(&RunOptions {
        input,
        langs: if args.lang.is_empty() {
            None
        } else {
            Some(args.lang)
        },
        output: args.output,
        directory: args.directory,
        check_only: args.check,
    })
}
