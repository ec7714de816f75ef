//! rebrand: Patch a browser template checkout with white-label identity values.
//!
//! Reads identity values (`APP_SLUG`, `APP_PRODUCT_NAME`, and optional
//! overrides) from the environment and rewrites the template's package
//! manifest, builder configuration, and source files in place. Files that
//! already carry the requested identity are left untouched, so a full run
//! against an already-patched checkout writes nothing.

pub mod app;
pub mod domain;
pub mod services;

use std::path::Path;

use app::commands::apply;

pub use app::commands::apply::ApplyResult;
pub use domain::{AppError, EnvSnapshot, IdentityConfig, Slug};
pub use services::write::PatchOutcome;

/// Rebrand the template in the current directory using the process environment.
pub fn apply() -> Result<ApplyResult, AppError> {
    let root = std::env::current_dir()
        .map_err(|source| AppError::Filesystem { path: ".".to_string(), source })?;
    let env = EnvSnapshot::capture();
    apply_at(&root, &env)
}

/// Rebrand the template under `root` using an explicit environment snapshot.
///
/// Prints the per-file summary on success. Any failure aborts the run
/// immediately; files rewritten before the failure point stay rewritten.
pub fn apply_at(root: &Path, env: &EnvSnapshot) -> Result<ApplyResult, AppError> {
    let result = apply::execute(root, env)?;

    println!("✅ Applied identity '{}' ({})", result.identity.slug, result.identity.product_name);
    for outcome in &result.outcomes {
        let status = if outcome.changed { "changed" } else { "unchanged" };
        println!("  • {} ({})", outcome.path, status);
    }
    println!("Changed {}/{} files", result.changed_count(), result.outcomes.len());

    Ok(result)
}
