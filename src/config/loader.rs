use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use stillwater::Validation;

use super::core::ChatroiConfig;
use super::validation::{sanitize_config, validate_config};
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".chatroi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a config file into a string
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse TOML and drop values that fail validation, warning about each.
pub fn parse_and_validate_config(contents: &str) -> Result<ChatroiConfig> {
    let config = toml::from_str::<ChatroiConfig>(contents)?;

    if let Validation::Failure(issues) = validate_config(&config) {
        for issue in issues.into_vec() {
            log::warn!("Invalid configuration value {}. Using default.", issue);
        }
        return Ok(sanitize_config(config));
    }

    Ok(config)
}

/// Load one config file. Missing or malformed files are reported as errors.
pub fn load_config_from(path: &Path) -> Result<ChatroiConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::config(format!("cannot read file: {}", e), path))?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| Error::config(e.to_string(), path))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a discovered path. Absent files are skipped silently.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ChatroiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config file, `<config dir>/chatroi/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chatroi").join("config.toml"))
}

/// Candidate paths in search order, starting at `start`.
pub fn config_search_paths(start: PathBuf) -> Vec<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .collect()
}

/// Search from `start` upwards, then the per-user file.
pub fn discover_config(start: PathBuf) -> ChatroiConfig {
    config_search_paths(start)
        .iter()
        .find_map(|path| try_load_config_from_path(path))
        .unwrap_or_else(|| {
            log::debug!("No config found. Using default config.");
            ChatroiConfig::default()
        })
}

/// Load configuration for the current working directory.
pub fn load_config() -> ChatroiConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ChatroiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [defaults]
            industry = "clinica_dental"
            tier = "enterprise"
            days_open = "alldays"
            human_hours_per_week = 30.0

            [output]
            default_format = "json"
            use_color = false

            [display]
            language = "es"
            currency_symbol = "MX$"
        "#})
        .unwrap();

        let defaults = config.defaults();
        assert_eq!(defaults.industry.as_deref(), Some("clinica_dental"));
        assert_eq!(defaults.human_hours_per_week, Some(30.0));
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
        assert_eq!(config.currency_symbol(), "MX$");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = parse_and_validate_config(indoc! {r#"
            [defaults]
            tier = "platinum"
            industry = "spa_medico"
        "#})
        .unwrap();

        assert_eq!(config.defaults().tier, None);
        assert_eq!(config.defaults().industry.as_deref(), Some("spa_medico"));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(parse_and_validate_config("[defaults\ntier = 1").is_err());
    }

    #[test]
    fn test_directory_ancestors_stops_at_root() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b"), 10).collect();
        assert_eq!(
            dirs,
            vec![PathBuf::from("/a/b"), PathBuf::from("/a"), PathBuf::from("/")]
        );
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[display]\nlanguage = \"es\"\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.language(), crate::formatting::Language::Es);
    }

    #[test]
    fn test_discovered_malformed_file_is_skipped() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("one");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "[display\nlanguage =").unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[display]\nlanguage = \"es\"\n",
        )
        .unwrap();

        assert!(load_config_from(&nested.join(CONFIG_FILE_NAME)).is_err());
        let config = discover_config(nested);
        assert_eq!(config.language(), crate::formatting::Language::Es);
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let root = TempDir::new().unwrap();
        let err = load_config_from(&root.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read file"));
    }
}
