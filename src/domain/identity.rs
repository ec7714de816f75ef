use std::fmt::{self, Display};

use super::env::{self, EnvSnapshot};
use super::error::AppError;

/// A validated white-label slug.
///
/// Guarantees:
/// - Non-empty
/// - Contains only lowercase ASCII letters, digits, or `-`
/// - First character is a letter or digit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(input: &str) -> Result<Self, AppError> {
        if is_valid_slug(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(AppError::InvalidSlug(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_slug(input: &str) -> bool {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// The fully-resolved identity values applied to every target file.
///
/// Invariant: every field is resolved before any file is touched; handlers
/// only ever see a complete configuration.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub slug: Slug,
    pub product_name: String,
    pub app_id: String,
    pub package_name: String,
    pub desktop_file: String,
}

impl IdentityConfig {
    /// Resolve identity values from an environment snapshot.
    ///
    /// `APP_SLUG` and `APP_PRODUCT_NAME` are required; unset optional
    /// values fall back to slug-derived defaults.
    pub fn resolve(env: &EnvSnapshot) -> Result<Self, AppError> {
        let slug =
            Slug::new(env.get(env::APP_SLUG).ok_or(AppError::MissingEnv(env::APP_SLUG))?)?;

        let product_name = env
            .get(env::APP_PRODUCT_NAME)
            .ok_or(AppError::MissingEnv(env::APP_PRODUCT_NAME))?
            .trim()
            .to_string();
        if product_name.is_empty() {
            return Err(AppError::EmptyProductName);
        }

        let app_id = match env.get(env::APP_ID) {
            Some(value) => value.to_string(),
            None => format!("dev.sun.{}", slug),
        };
        let package_name = match env.get(env::APP_PACKAGE_NAME) {
            Some(value) => value.to_string(),
            None => format!("{}-browser", slug),
        };
        let desktop_file = match env.get(env::DESKTOP_FILE) {
            Some(value) => value.to_string(),
            None => format!("{}.desktop", slug),
        };

        Ok(Self { slug, product_name, app_id, package_name, desktop_file })
    }

    /// Executable name used by the packaging targets; always the slug.
    pub fn executable_name(&self) -> &str {
        self.slug.as_str()
    }
}
