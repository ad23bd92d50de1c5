use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use serde_yaml::{Mapping, Value};

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{DocpageError, Result};

/// Load page helper configuration from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> Result<Config> {
    // Load configuration from specified files or defaults
    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    // Keys set by later files replace the same keys of earlier ones
    let mut merged = Value::Mapping(Mapping::new());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let value = read_config_file(&path)?;
            merge_values(&mut merged, value);
        }
    }

    // Fields no file mentioned fall back to their serde defaults
    let config: Config = serde_yaml::from_value(merged)
        .map_err(|e| DocpageError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read a configuration file into a generic value holding only the keys it sets
fn read_config_file(config_path: &Path) -> Result<Value> {
    if !config_path.exists() {
        return Err(DocpageError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| DocpageError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    let extension = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    let mut value = match extension.as_deref() {
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path)?,
        Some("toml") => parse_toml_config(&content, config_path)?,
        Some("json") => parse_json_config(&content, config_path)?,
        Some(other) => {
            return Err(DocpageError::Config(format!(
                "Unsupported configuration file format: {}", other
            )));
        }
    };

    normalize_aliases(&mut value);

    // Report bad values against the file that holds them
    serde_yaml::from_value::<Config>(value.clone())
        .map_err(|e| DocpageError::Config(format!(
            "Invalid configuration in {}: {}", config_path.display(), e
        )))?;

    Ok(value)
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<Value> {
    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    serde_yaml::from_str(content)
        .map_err(|e| DocpageError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<Value> {
    toml::from_str(content)
        .map_err(|e| DocpageError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content)
        .map_err(|e| DocpageError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )))
}

/// Rewrite `copy.class` to `copy.class_name` so files using either spelling merge
fn normalize_aliases(value: &mut Value) {
    let Some(copy) = value.get_mut("copy").and_then(Value::as_mapping_mut) else {
        return;
    };

    if let Some(class) = copy.remove("class") {
        copy.insert(Value::String("class_name".to_string()), class);
    }
}

/// Merge `overlay` into `base`, descending into mappings and replacing everything else
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        // An empty document sets nothing
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::types::HeadingLevel;

    #[test]
    fn test_no_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_yaml_then_toml_merge() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("docpage.yml"),
            "toc:\n  levels: ['#', '##', '###']\n  list_class: toc\ncopy:\n  label: Copy\n",
        ).unwrap();
        fs::write(
            dir.path().join("docpage.toml"),
            "[copy]\nenabled = false\n",
        ).unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.toc.levels, vec![HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3]);
        assert_eq!(config.toc.list_class, "toc");
        assert_eq!(config.copy.label, "Copy");
        assert!(!config.copy.enabled);
    }

    #[test]
    fn test_explicit_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"toc": {"levels": ["h2"], "depth": 3}}"#).unwrap();

        let config = load_config(dir.path(), Some(vec![path])).unwrap();
        assert_eq!(config.toc.levels, vec![HeadingLevel::H2]);
        assert_eq!(config.toc.depth, 3);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path(), Some(vec![dir.path().join("nope.yml")])).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("docpage.yml"), "toc:\n  levels: ['#######']\n").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert!(matches!(err, DocpageError::Config(_)));
    }

    #[test]
    fn test_later_file_resets_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.yml");
        let second = dir.path().join("b.yml");
        fs::write(&first, "copy:\n  enabled: false\ntoc:\n  depth: 3\n  list_class: toc\n").unwrap();
        fs::write(&second, "copy:\n  enabled: true\ntoc:\n  depth: 1\n").unwrap();

        let config = load_config(dir.path(), Some(vec![first, second])).unwrap();

        assert!(config.copy.enabled);
        assert_eq!(config.toc.depth, 1);
        // Keys the later file leaves out survive from the earlier one
        assert_eq!(config.toc.list_class, "toc");
    }

    #[test]
    fn test_class_alias_merges_with_class_name() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.toml");
        fs::write(&first, r#"{"copy": {"class_name": "first"}}"#).unwrap();
        fs::write(&second, "[copy]\nclass = \"second\"\n").unwrap();

        let config = load_config(dir.path(), Some(vec![first, second])).unwrap();
        assert_eq!(config.copy.class_name, "second");
    }

    #[test]
    fn test_empty_yaml_file_sets_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("docpage.yml"), "\n").unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docpage.ini");
        fs::write(&path, "x=1").unwrap();

        let err = load_config(dir.path(), Some(vec![path])).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format"));
    }
}
