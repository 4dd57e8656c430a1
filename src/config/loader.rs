//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LegajoError, LegajoResult};

use super::types::{Config, ROOT_CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from (`None` for built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LegajoResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LegajoError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // Reject a broken catalog at load time rather than mid-audit.
    config
        .requirement_catalog()
        .map_err(|e| LegajoError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration for an audit of `root`.
///
/// An explicit file must exist. Otherwise the first existing file among
/// `<root>/.legajo.toml` and the user config is used, falling back to
/// defaults. A file that exists but does not parse is an error.
pub fn resolve(explicit: Option<&Path>, root: Option<&Path>) -> LegajoResult<LoadedConfig> {
    let candidates: Vec<PathBuf> = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(LegajoError::InvalidConfig {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            vec![path.to_path_buf()]
        }
        None => root
            .map(|r| r.join(ROOT_CONFIG_FILE))
            .into_iter()
            .chain(user_config_path())
            .collect(),
    };

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok(LoadedConfig {
                config: with_env_overrides(config),
                source: Some(candidate),
                warnings,
            });
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: None,
        warnings: Vec::new(),
    })
}

/// Apply environment variable overrides (LEGAJO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // LEGAJO_OUTPUT_DIR
    if let Some(dir) = get_env("LEGAJO_OUTPUT_DIR").filter(|d| !d.is_empty()) {
        config.report.output_dir = Some(PathBuf::from(dir));
    }

    // LEGAJO_NOTIFY
    if let Some(val) = get_env("LEGAJO_NOTIFY") {
        config.notify.enabled = val.to_lowercase() != "false" && val != "0";
    }

    // LEGAJO_RECIPIENTS (comma-separated)
    if let Some(list) = get_env("LEGAJO_RECIPIENTS") {
        let parsed = split_list(&list);
        if !parsed.is_empty() {
            config.notify.recipients = parsed;
        }
    }

    // LEGAJO_EXTENSIONS (comma-separated)
    if let Some(list) = get_env("LEGAJO_EXTENSIONS") {
        config.scan.extensions = split_list(&list);
    }

    config
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// `~/.config/legajo/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("legajo").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scan",
        "extensions",
        "include_hidden",
        "report",
        "enabled",
        "output_dir",
        "missing_file",
        "outdated_file",
        "notify",
        "outbox",
        "recipients",
        "subject",
        "output",
        "color",
        "unicode",
        "catalog",
        "balance_families",
        "persona",
        "pyme",
        "empresa",
        "key",
        "token",
        "cycle",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
