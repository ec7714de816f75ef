use std::collections::BTreeMap;

/// Required slug variable.
pub const APP_SLUG: &str = "APP_SLUG";
/// Required product display-name variable.
pub const APP_PRODUCT_NAME: &str = "APP_PRODUCT_NAME";
/// Optional application-identifier override.
pub const APP_ID: &str = "APP_ID";
/// Optional package-name override.
pub const APP_PACKAGE_NAME: &str = "APP_PACKAGE_NAME";
/// Optional desktop-launcher filename override.
pub const DESKTOP_FILE: &str = "DESKTOP_FILE";

/// Immutable capture of the process environment, taken once at startup.
///
/// All configuration flows through a snapshot so validation stays a pure
/// function and tests can build environments without mutating
/// process-global state.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self { vars: std::env::vars().collect() }
    }

    /// Build a snapshot from explicit key/value pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self { vars: pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect() }
    }

    /// Look up a variable by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}
