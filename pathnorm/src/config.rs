use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pathnorm::Flavor;
use serde::Deserialize;

use crate::output::OutputFormat;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Prefix rules. Default: the flavor of the build target.
    pub flavor: Option<Flavor>,

    /// `text` or `json`. Default: text
    pub format: Option<OutputFormat>,

    /// Directory to write JSONL logs. Unset means stderr only.
    pub log_dir: Option<PathBuf>,

    /// Dump counters to stderr after the batch.
    pub metrics: Option<bool>,
}

impl AppConfig {
    /// Read a YAML config. Relative paths inside it are resolved against the
    /// directory holding the file. An empty file is the default config.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file: {}", path.display()))?;

        let mut cfg: AppConfig = if text.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(&text)
                .with_context(|| format!("parse config yaml: {}", path.display()))?
        };

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        cfg.resolve_paths(base_dir);
        Ok(cfg)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor.unwrap_or_else(Flavor::native)
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn metrics_enabled(&self) -> bool {
        self.metrics.unwrap_or(false)
    }

    pub fn resolve_paths(&mut self, base_dir: &Path) {
        if let Some(p) = &self.log_dir {
            self.log_dir = Some(resolve_path(base_dir, p));
        }
    }
}

fn resolve_path(base_dir: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}
