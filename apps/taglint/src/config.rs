//! Configuration discovery and effective settings resolution.
//!
//! taglint reads `taglint.toml|yaml|yml` from the working directory (or the
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Only presentation settings live here; tag rules are built in.
//! Defaults:
//! - `output`: `human`
//! - `color`: true
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::cli::OUTPUT_MODES;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `taglint.toml|yaml`.
pub struct TaglintConfig {
    pub output: Option<String>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully-resolved configuration after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub output: String,
    pub color: bool,
}

const CONFIG_NAMES: [&str; 3] = ["taglint.toml", "taglint.yaml", "taglint.yml"];

/// Walk upward from `start` to the first directory holding a config file or
/// a `.git` directory; `start` itself when neither is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `TaglintConfig` from `taglint.toml` or `taglint.yaml|yml` if present
/// and parseable.
pub fn load_config(root: &Path) -> Option<TaglintConfig> {
    let toml_path = root.join("taglint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        return toml::from_str(&s).ok();
    }
    for yml in ["taglint.yaml", "taglint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            return serde_yaml::from_str(&s).ok();
        }
    }
    None
}

/// True when a config file exists under `root` but could not be loaded.
pub fn config_unreadable(root: &Path) -> bool {
    CONFIG_NAMES.iter().any(|n| root.join(n).exists()) && load_config(root).is_none()
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    start: Option<&Path>,
    cli_output: Option<&str>,
    cli_no_color: bool,
) -> Effective {
    let start = start.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    // unknown modes from the config file fall back to the default
    let cfg_output = cfg.output.filter(|o| OUTPUT_MODES.contains(&o.as_str()));
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg_output)
        .unwrap_or_else(|| "human".to_string());
    let color = if cli_no_color {
        false
    } else {
        cfg.color.unwrap_or(true)
    };

    Effective { root, output, color }
}
