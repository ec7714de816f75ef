use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{AppError, IdentityConfig};
use crate::services::patch;
use crate::services::write::{self, PatchOutcome};

/// Controller source that registers the browser as the system default.
pub const BROWSER_LAUNCHER_PATH: &str =
    "src/main/controllers/default-browser-controller/index.ts";

static DESKTOP_FILE_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(xdg-settings set default-web-browser\s+)[A-Za-z0-9._-]+")
        .expect("desktop-file argument pattern")
});

/// Point the `xdg-settings` invocation at the configured desktop launcher.
pub fn apply(root: &Path, identity: &IdentityConfig) -> Result<PatchOutcome, AppError> {
    let current = write::read_target(root, BROWSER_LAUNCHER_PATH)?;
    let patched = rewrite(&current, identity)?;
    write::write_if_changed(root, BROWSER_LAUNCHER_PATH, &patched)
}

fn rewrite(content: &str, identity: &IdentityConfig) -> Result<String, AppError> {
    patch::replace_first(content, &DESKTOP_FILE_ARG, |caps| {
        format!("{}{}", &caps[1], identity.desktop_file)
    })
    .ok_or(AppError::PatternNotFound {
        field: "default-web-browser desktop file",
        path: BROWSER_LAUNCHER_PATH,
    })
}
