//! Command implementations and dispatch logic.
//!
//! Each command is implemented as an async function that takes a CommandContext.
//! Commands load the catalog through the shared context so that every one of
//! them sees the same layered configuration.

use std::collections::HashMap;

use camino::Utf8PathBuf;
use prereq_config::{Catalog, ConfigLayering, ConfigLoader, ConfigSource};
use prereq_core::error::{PrereqError, PrereqResult};
use prereq_core::types::CyclePolicy;
use tracing::{debug, info};

pub mod check;
pub mod order;
pub mod path;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub catalog: Option<Utf8PathBuf>,
    pub json: bool,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(catalog: Option<Utf8PathBuf>, json: bool) -> PrereqResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| PrereqError::io("Failed to get current directory".to_string(), e))?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| PrereqError::ConfigValidation {
            field: "cwd".to_string(),
            reason: format!("Current directory is not valid UTF-8: {}", e),
        })?;

        Ok(Self {
            cwd,
            catalog,
            json,
            output: OutputHandler::new(),
        })
    }

    /// Load the catalog with every configuration layer applied
    ///
    /// `strict` forces the strict cycle policy regardless of files and
    /// environment.
    pub async fn load_catalog(&self, strict: bool) -> PrereqResult<(Catalog, ConfigSource)> {
        let loader = ConfigLoader::new(self.cwd.clone());

        let (project, source) = match &self.catalog {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    self.cwd.join(path)
                };
                ConfigLoader::load_catalog_file(&path).await?
            }
            None => loader.load_project_config().await?,
        };
        debug!("Loaded catalog from {:?}", source);

        let global = loader.load_global_config().await?.map(|(catalog, _)| catalog);

        let mut cli_overrides = HashMap::new();
        if strict {
            cli_overrides.insert("policy".to_string(), CyclePolicy::Strict.to_string());
        }

        let catalog = ConfigLayering::merge_configs(
            global,
            project,
            ConfigLayering::collect_env_overrides(),
            cli_overrides,
        )?;

        Ok((catalog, source))
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> PrereqResult<()> {
    match command {
        Commands::Order { strict } => {
            info!("Resolving study order (strict: {})", strict);
            order::execute(strict, ctx).await
        }
        Commands::Path { target, strict } => {
            info!("Resolving learning path to {} (strict: {})", target, strict);
            path::execute(target, strict, ctx).await
        }
        Commands::Check => {
            info!("Checking catalog for cycles");
            check::execute(ctx).await
        }
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx).await
        }
    }
}

async fn show_version(ctx: &CommandContext) -> PrereqResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("BUILD_DATE");
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.plain(&format!("prereq v{}", version));
    ctx.output.info(&format!("Built: {}", build_date));
    ctx.output.info(&format!("Target: {}", target));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));

    Ok(())
}

/// Suggest the closest known name based on edit distance
pub fn suggest_similar<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in candidates {
        let distance = edit_distance(&input.to_lowercase(), &candidate.to_lowercase());
        if distance < best_distance && distance <= 2 {
            best_distance = distance;
            best_match = Some(candidate);
        }
    }

    best_match
}

/// Calculate edit distance between two strings
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Single rolling row of the Levenshtein matrix
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, a_char) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(a_char != b_char);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b_chars.len()]
}
