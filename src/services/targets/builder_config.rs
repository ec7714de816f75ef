use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{AppError, IdentityConfig};
use crate::services::patch;
use crate::services::write::{self, PatchOutcome};

/// electron-builder packaging configuration at the template root.
pub const BUILDER_CONFIG_PATH: &str = "electron-builder.ts";

// Field rules for the builder configuration. Each quoted-value pattern
// captures the text up to the opening quote and the quote character, per
// the `patch::set_quoted_value` convention.
static APP_ID_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\s*appId:\s*)(['"`])[^'"`\n]*['"`]"#).expect("appId pattern")
});
static PRODUCT_NAME_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\s*productName:\s*)(['"`])[^'"`\n]*['"`]"#).expect("productName pattern")
});
static WIN_EXECUTABLE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(win:\s*\{[^}]*?executableName:\s*)(['"`])[^'"`\n]*['"`]"#)
        .expect("win executableName pattern")
});
static LINUX_EXECUTABLE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(linux:\s*\{[^}]*?executableName:\s*)(['"`])[^'"`\n]*['"`]"#)
        .expect("linux executableName pattern")
});
static LINUX_BLOCK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linux:\s*\{").expect("linux block anchor"));

/// Align the builder configuration with the resolved identity.
///
/// `appId` and `productName` are required fields; `win.executableName` is
/// aligned only when present, while `linux.executableName` is patched in
/// place or inserted as the first property of the `linux:` block.
pub fn apply(root: &Path, identity: &IdentityConfig) -> Result<PatchOutcome, AppError> {
    let current = write::read_target(root, BUILDER_CONFIG_PATH)?;
    let patched = rewrite(&current, identity)?;
    write::write_if_changed(root, BUILDER_CONFIG_PATH, &patched)
}

fn rewrite(content: &str, identity: &IdentityConfig) -> Result<String, AppError> {
    let content = patch::set_quoted_value(content, &APP_ID_FIELD, &identity.app_id).ok_or(
        AppError::PatternNotFound { field: "appId", path: BUILDER_CONFIG_PATH },
    )?;

    let content = patch::set_quoted_value(&content, &PRODUCT_NAME_FIELD, &identity.product_name)
        .ok_or(AppError::PatternNotFound { field: "productName", path: BUILDER_CONFIG_PATH })?;

    // The Windows executable name is optional in the template; align it
    // only when the field exists.
    let content = patch::set_quoted_value(&content, &WIN_EXECUTABLE_FIELD, identity.executable_name())
        .unwrap_or(content);

    // Linux packaging requires the executable name: patch it in place, or
    // insert it as the first property of the linux block.
    let content = match patch::set_quoted_value(
        &content,
        &LINUX_EXECUTABLE_FIELD,
        identity.executable_name(),
    ) {
        Some(patched) => patched,
        None => {
            let insertion = format!("\n    executableName: \"{}\",", identity.executable_name());
            patch::insert_after(&content, &LINUX_BLOCK_OPEN, &insertion).ok_or(
                AppError::PatternNotFound {
                    field: "linux.executableName",
                    path: BUILDER_CONFIG_PATH,
                },
            )?
        }
    };

    Ok(content)
}
