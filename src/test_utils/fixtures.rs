//! Sample manifests for tests.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::MANIFEST_FILE_NAME;

/// Test fixture for creating sample `assets.toml` files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// jquery <- ui <- app, plus an admin page that also needs jquery.
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
[[assets]]
id = "jquery"
location = "url"
value = "jquery.js"
url = "https://code.jquery.com/jquery.js"

[[assets]]
id = "ui"
value = "js/ui.js"
url = "/static/js/ui.js"
depends = ["jquery"]

[[assets]]
id = "app"
location = "application"
depends = ["jquery", "ui"]

[[assets.resources]]
value = "js/app.js"
url = "/static/js/app.js"

[[assets.resources]]
value = "css/app.css"

[[assets]]
id = "admin"
location = "application"
value = "js/admin.js"
depends = ["jquery"]
"#
            .trim_start()
            .to_string(),
        }
    }

    /// Two assets that depend on each other.
    pub fn cyclic() -> Self {
        Self {
            name: "cyclic".to_string(),
            content: r#"
[[assets]]
id = "a"
value = "a.js"
depends = ["b"]

[[assets]]
id = "b"
value = "b.js"
depends = ["a"]
"#
            .trim_start()
            .to_string(),
        }
    }

    /// An asset depending on an id nothing declares.
    pub fn missing_dependency() -> Self {
        Self {
            name: "missing_dependency".to_string(),
            content: r#"
[[assets]]
id = "app"
value = "app.js"
depends = ["ghost"]
"#
            .trim_start()
            .to_string(),
        }
    }

    /// The same id declared twice; the second declaration is ignored.
    pub fn duplicate_ids() -> Self {
        Self {
            name: "duplicate_ids".to_string(),
            content: r#"
[[assets]]
id = "jquery"
value = "jquery.js"

[[assets]]
id = "jquery"
value = "jquery-slim.js"
"#
            .trim_start()
            .to_string(),
        }
    }

    /// Not valid TOML.
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: "[[assets]\nid = \"broken\"\n".to_string(),
        }
    }

    /// Write the manifest into `dir` as `assets.toml`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, &self.content)?;
        Ok(manifest_path)
    }
}
