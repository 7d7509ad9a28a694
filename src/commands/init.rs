use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# chatroi configuration

[defaults]
# Industry profile key, see `chatroi industries`
industry = "medicina_familiar"
# basic, professional or enterprise
tier = "professional"
# weekdays, sixdays or alldays
days_open = "sixdays"
human_hours_per_week = 40

[output]
# terminal, markdown or json
default_format = "terminal"
# use_color = true

[display]
# en or es
language = "en"
currency_symbol = "$"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    log::debug!("Wrote default config to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_from, validate_config};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_loads_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        init_config_at(&path, false).unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(validate_config(&config).is_success());
        assert_eq!(config.defaults().tier.as_deref(), Some("professional"));
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine").unwrap();

        let err = init_config_at(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        init_config_at(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[defaults]"));
    }
}
