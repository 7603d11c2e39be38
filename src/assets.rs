//! Asset loading with embedded fallbacks
//!
//! The colour name listing, page templates, stylesheet and default config are
//! compiled into the binary. Each of them can be overridden from the
//! filesystem:
//!
//! - If an env var is NOT set: use embedded assets only (no filesystem access)
//! - If an env var IS set and the file exists: use the filesystem copy
//! - If an env var IS set and the file is missing: fall back to embedded

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded page templates
#[derive(RustEmbed)]
#[folder = "assets/templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Embedded stylesheets
#[derive(RustEmbed)]
#[folder = "assets/static/"]
#[include = "*.css"]
struct EmbeddedStatic;

/// Embedded default config and colour name listing
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "config.yaml"]
#[include = "rgb.txt"]
struct EmbeddedData;

const CONFIG_FILE_NAME: &str = "config.yaml";
const NAMES_FILE_NAME: &str = "rgb.txt";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Names,
    Templates,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem overrides
#[derive(Debug, Default)]
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External colour name listing (from NAMES_FILE env var)
    names_file: Option<PathBuf>,
    /// External templates directory (from TEMPLATES_DIR env var)
    templates_dir: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(
        config_file: Option<PathBuf>,
        names_file: Option<PathBuf>,
        templates_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            config_file,
            names_file,
            templates_dir,
        }
    }

    /// Create a loader from `CONFIG_FILE`, `NAMES_FILE` and `TEMPLATES_DIR`.
    pub fn from_env() -> Self {
        let path = |name: &str| std::env::var(name).ok().map(PathBuf::from);
        Self::new(path("CONFIG_FILE"), path("NAMES_FILE"), path("TEMPLATES_DIR"))
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn names_file(&self) -> Option<&Path> {
        self.names_file.as_deref()
    }

    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates_dir.as_deref()
    }

    /// Read the config file as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = Self::read_file_or_embedded(
            self.config_file.as_deref(),
            EmbeddedData::get(CONFIG_FILE_NAME).map(|f| f.data),
            CONFIG_FILE_NAME,
        )?;
        into_string(bytes)
    }

    /// Read the `R G B Name` colour listing as a UTF-8 string
    pub fn read_names_string(&self) -> io::Result<String> {
        let bytes = Self::read_file_or_embedded(
            self.names_file.as_deref(),
            EmbeddedData::get(NAMES_FILE_NAME).map(|f| f.data),
            NAMES_FILE_NAME,
        )?;
        into_string(bytes)
    }

    /// Read a page template by file name (e.g. `colour.html`)
    pub fn read_template_string(&self, name: &str) -> io::Result<String> {
        let external = self.templates_dir.as_ref().map(|dir| dir.join(name));
        let bytes = Self::read_file_or_embedded(
            external.as_deref(),
            EmbeddedTemplates::get(name).map(|f| f.data),
            name,
        )?;
        into_string(bytes)
    }

    /// Embedded stylesheet by file name
    pub fn stylesheet(name: &str) -> Option<Cow<'static, [u8]>> {
        EmbeddedStatic::get(name).map(|f| f.data)
    }

    fn read_file_or_embedded(
        external: Option<&Path>,
        embedded: Option<Cow<'static, [u8]>>,
        label: &str,
    ) -> io::Result<Cow<'static, [u8]>> {
        // Try external first
        if let Some(path) = external {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(path = %path.display(), "Configured asset missing, using embedded copy");
        }

        // Fall back to embedded
        embedded
            .inspect(|_| tracing::trace!(asset = label, "Loading asset from embedded assets"))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded asset not found: {label}"),
                )
            })
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or defaults if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
                    Self::extract(&path, EmbeddedData::get(CONFIG_FILE_NAME), force, &mut report)?;
                }
                AssetCategory::Names => {
                    let path = self
                        .names_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(NAMES_FILE_NAME));
                    Self::extract(&path, EmbeddedData::get(NAMES_FILE_NAME), force, &mut report)?;
                }
                AssetCategory::Templates => {
                    let dir = self
                        .templates_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./templates"));
                    for file in EmbeddedTemplates::iter() {
                        let path = dir.join(file.as_ref());
                        Self::extract(&path, EmbeddedTemplates::get(&file), force, &mut report)?;
                    }
                }
            }
        }

        Ok(report)
    }

    fn extract(
        path: &Path,
        file: Option<rust_embed::EmbeddedFile>,
        force: bool,
        report: &mut InitReport,
    ) -> io::Result<()> {
        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(());
        }
        if let Some(file) = file {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &*file.data)?;
            report.written.push(path.display().to_string());
        }
        Ok(())
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Config => vec![CONFIG_FILE_NAME.to_string()],
            AssetCategory::Names => vec![NAMES_FILE_NAME.to_string()],
            AssetCategory::Templates => EmbeddedTemplates::iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn into_string(bytes: Cow<'static, [u8]>) -> io::Result<String> {
    String::from_utf8(bytes.into_owned()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
