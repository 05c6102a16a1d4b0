use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_pawpal_home, pawpal_home};

/// Accepted range for the daily time budget, in minutes.
pub const MIN_BUDGET_MINUTES: u32 = 10;
pub const MAX_BUDGET_MINUTES: u32 = 480;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub owner: OwnerSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSection {
    pub name: String,
    pub available_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSection {
    /// tracing filter directive used when PAWPAL_LOG is unset (e.g. "warn", "pawpal_core=debug").
    pub level: String,
}

impl Default for OwnerSection {
    fn default() -> Self {
        Self {
            name: "Jordan".to_string(),
            // 2 hours
            available_minutes: 120,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(pawpal_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    validate_budget(cfg.owner.available_minutes)
        .with_context(|| format!("[owner].available_minutes in {}", p.display()))?;
    Ok(cfg)
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write the default config unless one already exists. Returns the path and
/// whether a file was written.
pub fn init_config() -> Result<(PathBuf, bool)> {
    let p = ensure_pawpal_home()?.join("config.toml");
    if p.exists() {
        return Ok((p, false));
    }
    save_config_to(&Config::default(), &p)?;
    Ok((p, true))
}

/// Text for `pawpal config show`: the path, then either the effective config
/// or the reason it could not be loaded.
pub fn describe_config(p: &Path) -> String {
    let mut s = format!("# {}\n", p.display());
    let body = load_config_from(p)
        .and_then(|cfg| toml::to_string_pretty(&cfg).context("serialize config"));
    match body {
        Ok(body) => s.push_str(&body),
        Err(e) => s.push_str(&format!("# error: {e:#}\n")),
    }
    s
}

/// Budget check for anything a person typed. The scheduler itself accepts any value.
pub fn validate_budget(minutes: u32) -> Result<u32> {
    if !(MIN_BUDGET_MINUTES..=MAX_BUDGET_MINUTES).contains(&minutes) {
        bail!(
            "available time must be between {} and {} minutes (got {})",
            MIN_BUDGET_MINUTES,
            MAX_BUDGET_MINUTES,
            minutes
        );
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_bounds() {
        assert_eq!(validate_budget(10).unwrap(), 10);
        assert_eq!(validate_budget(480).unwrap(), 480);
        assert!(validate_budget(9).is_err());
        assert!(validate_budget(481).is_err());
        assert!(validate_budget(0).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.owner.available_minutes, 120);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.owner.name = "Sam".to_string();
        cfg.owner.available_minutes = 45;
        cfg.log.level = "debug".to_string();

        save_config_to(&cfg, &p).unwrap();
        assert_eq!(load_config_from(&p).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[log]\nlevel = \"info\"\n").unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.log.level, "info");
        assert_eq!(cfg.owner, OwnerSection::default());
    }

    #[test]
    fn out_of_range_budget_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[owner]\nname = \"Sam\"\navailable_minutes = 900\n").unwrap();

        let err = load_config_from(&p).unwrap_err();
        assert!(format!("{err:#}").contains("between 10 and 480"));
    }

    #[test]
    fn describe_reports_broken_file_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[owner\nname = ").unwrap();

        let out = describe_config(&p);
        assert!(out.starts_with(&format!("# {}\n", p.display())));
        assert!(out.contains("# error: parse"));
    }

    #[test]
    fn describe_prints_effective_config() {
        let dir = tempfile::tempdir().unwrap();
        let out = describe_config(&dir.path().join("config.toml"));
        assert!(out.contains("available_minutes = 120"));
        assert!(out.contains("level = \"warn\""));
    }
}
