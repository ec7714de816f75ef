//! Apply command: validate the environment and patch every target file.

use std::path::Path;

use crate::domain::{AppError, EnvSnapshot, IdentityConfig};
use crate::services::targets::{app_banner, browser_launcher, builder_config, manifest};
use crate::services::write::PatchOutcome;

/// Result of a full apply run.
#[derive(Debug)]
pub struct ApplyResult {
    /// Resolved identity the run was performed with.
    pub identity: IdentityConfig,
    /// Per-file outcomes, in handler order.
    pub outcomes: Vec<PatchOutcome>,
}

impl ApplyResult {
    /// Number of files rewritten on disk.
    pub fn changed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.changed).count()
    }
}

/// Execute the apply command against the template under `root`.
///
/// Validation runs before any file is touched. Handlers run in a fixed
/// order (manifest, builder configuration, then source patches); the
/// first failure aborts the run and files patched by earlier handlers
/// stay patched.
pub fn execute(root: &Path, env: &EnvSnapshot) -> Result<ApplyResult, AppError> {
    let identity = IdentityConfig::resolve(env)?;

    let outcomes = vec![
        manifest::apply(root, &identity)?,
        builder_config::apply(root, &identity)?,
        browser_launcher::apply(root, &identity)?,
        app_banner::apply(root, &identity)?,
    ];

    Ok(ApplyResult { identity, outcomes })
}
