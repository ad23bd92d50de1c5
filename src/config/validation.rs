use log::warn;

use crate::config::Config;
use crate::utils::error::{DocpageError, Result};

/// Validate the configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_toc(config)?;
    validate_copy(config)?;
    Ok(())
}

/// Validate the table of contents settings
fn validate_toc(config: &Config) -> Result<()> {
    let toc = &config.toc;

    if toc.levels.is_empty() {
        warn!("No heading levels configured, tables of contents will be empty");
    }

    if toc.depth == 0 {
        return Err(DocpageError::Config(
            "toc.depth must be at least 1".to_string()
        ));
    }

    if !(toc.indent_step_rem.is_finite() && toc.indent_step_rem > 0.0) {
        return Err(DocpageError::Config(format!(
            "toc.indent_step_rem must be a positive number, got {}", toc.indent_step_rem
        )));
    }

    if toc.list_class.trim().is_empty() || toc.link_class.trim().is_empty() {
        return Err(DocpageError::Config(
            "toc.list_class and toc.link_class must not be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate the copy button settings
fn validate_copy(config: &Config) -> Result<()> {
    let copy = &config.copy;

    if copy.label.is_empty() {
        return Err(DocpageError::Config(
            "copy.label must not be empty".to_string()
        ));
    }

    if copy.class_name.trim().is_empty() {
        return Err(DocpageError::Config(
            "copy.class_name must not be empty".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        config.toc.depth = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.toc.indent_step_rem = -1.0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.copy.label = String::new();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.copy.class_name = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
