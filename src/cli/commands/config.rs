use serde_yaml::Value;

use crate::cli::types::ConfigAction;
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Handle the config command
pub fn handle_config_command(config: &Config, action: &ConfigAction) -> BoxResult<()> {
    let yaml = serde_yaml::to_value(config)?;

    match action {
        ConfigAction::Get { key } => match get_nested_value(&yaml, key) {
            Some(value) => print!("{}", serde_yaml::to_string(value)?),
            None => return Err(format!("Key not found: {}", key).into()),
        },
        ConfigAction::List {} => print!("{}", serde_yaml::to_string(&yaml)?),
    }

    Ok(())
}

fn get_nested_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in key.split('.') {
        match current {
            Value::Mapping(map) => {
                let part_key = Value::String(part.to_string());
                current = map.get(&part_key)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nested_value() {
        let yaml = serde_yaml::to_value(Config::default()).unwrap();

        let label = get_nested_value(&yaml, "copy.label").unwrap();
        assert_eq!(label.as_str(), Some("⌗"));

        let levels = get_nested_value(&yaml, "toc.levels").unwrap();
        let levels: Vec<String> = serde_yaml::from_value(levels.clone()).unwrap();
        assert_eq!(levels, vec!["#", "##"]);

        assert!(get_nested_value(&yaml, "toc.missing").is_none());
    }
}
