use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{AppError, IdentityConfig};
use crate::services::write::{self, PatchOutcome};

/// Package manifest at the template root.
pub const MANIFEST_PATH: &str = "package.json";

/// Set the manifest `name` and `productName` fields.
///
/// The manifest is parsed and re-emitted rather than regex-patched: the
/// format is fully structured. Re-serialization uses stable 2-space
/// indentation with a trailing newline, and untouched keys keep their
/// order.
pub fn apply(root: &Path, identity: &IdentityConfig) -> Result<PatchOutcome, AppError> {
    let current = write::read_target(root, MANIFEST_PATH)?;
    let patched = rewrite(&current, identity)?;
    write::write_if_changed(root, MANIFEST_PATH, &patched)
}

fn rewrite(content: &str, identity: &IdentityConfig) -> Result<String, AppError> {
    let mut fields: Map<String, Value> = serde_json::from_str(content)
        .map_err(|source| AppError::ManifestParse { path: MANIFEST_PATH, source })?;

    fields.insert("name".to_string(), Value::String(identity.package_name.clone()));
    fields.insert("productName".to_string(), Value::String(identity.product_name.clone()));

    let mut out = serde_json::to_string_pretty(&fields)
        .map_err(|source| AppError::ManifestParse { path: MANIFEST_PATH, source })?;
    out.push('\n');
    Ok(out)
}
