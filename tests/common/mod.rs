//! Shared testing utilities for rebrand CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Identity variables consumed by the binary; cleared on every invocation
/// so the surrounding environment cannot leak into a test.
const IDENTITY_VARS: &[&str] =
    &["APP_SLUG", "APP_PRODUCT_NAME", "APP_ID", "APP_PACKAGE_NAME", "DESKTOP_FILE"];

/// Default template manifest, mirroring the generic checkout.
pub const DEFAULT_MANIFEST: &str = r#"{
  "name": "flow",
  "productName": "Flow Browser",
  "version": "0.8.2",
  "main": "out/main/index.js",
  "scripts": {
    "build": "electron-vite build"
  }
}
"#;

/// Default builder configuration: `win` carries an executable name, the
/// `linux` block does not (the tool is expected to insert it).
pub const DEFAULT_BUILDER_CONFIG: &str = r#"import type { Configuration } from "electron-builder";

const config: Configuration = {
  appId: "dev.sun.flow",
  productName: "Flow Browser",
  directories: {
    output: "dist"
  },
  win: {
    target: "nsis",
    executableName: "flow"
  },
  linux: {
    target: ["deb", "rpm"],
    category: "Network"
  }
};

export default config;
"#;

pub const DEFAULT_BROWSER_CONTROLLER: &str = r#"import { exec } from "child_process";

export function setAsDefaultBrowser() {
  if (process.platform === "linux") {
    exec("xdg-settings set default-web-browser flow.desktop");
  }
}
"#;

pub const DEFAULT_MAIN_INDEX: &str = r#"import { app } from "electron";

console.log("--- Flow Browser ---");

app.whenReady().then(() => {
  console.log("--- Flow Browser ---");
});
"#;

/// Testing harness providing an isolated template checkout.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated copy of the default template fixture.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };
        ctx.write_file("package.json", DEFAULT_MANIFEST);
        ctx.write_file("electron-builder.ts", DEFAULT_BUILDER_CONFIG);
        ctx.write_file(
            "src/main/controllers/default-browser-controller/index.ts",
            DEFAULT_BROWSER_CONTROLLER,
        );
        ctx.write_file("src/main/index.ts", DEFAULT_MAIN_INDEX);
        ctx
    }

    /// Root of the template checkout.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a fixture file relative to the template root.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }

    /// Read a file relative to the template root.
    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.root.path().join(rel)).expect("Failed to read fixture file")
    }

    /// Remove a file relative to the template root.
    pub fn remove_file(&self, rel: &str) {
        fs::remove_file(self.root.path().join(rel)).expect("Failed to remove fixture file");
    }

    /// Build a command invoking the compiled `rebrand` binary inside the
    /// template, with all identity variables cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rebrand").expect("Failed to locate rebrand binary");
        cmd.current_dir(self.root.path());
        for var in IDENTITY_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}
