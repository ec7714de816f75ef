use std::path::Path;

use crate::domain::{AppError, IdentityConfig};
use crate::services::write::{self, PatchOutcome};

/// Main-process entry source carrying the startup banner.
pub const APP_BANNER_PATH: &str = "src/main/index.ts";

/// Banner string shipped by the generic template.
const TEMPLATE_BANNER: &str = "--- Flow Browser ---";

/// Replace every occurrence of the template banner with the product name.
///
/// Unlike the other patch rules this one is global and lenient: a file
/// with zero occurrences is left untouched rather than treated as drift.
pub fn apply(root: &Path, identity: &IdentityConfig) -> Result<PatchOutcome, AppError> {
    let current = write::read_target(root, APP_BANNER_PATH)?;
    let banner = format!("--- {} ---", identity.product_name);
    let patched = current.replace(TEMPLATE_BANNER, &banner);
    write::write_if_changed(root, APP_BANNER_PATH, &patched)
}
