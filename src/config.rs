use serde::{Deserialize, Serialize};

use crate::people::types::{default_card_rules, CardRule, ParserConfig, DEFAULT_ORIGIN};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub parser: ParserSettings,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserSettings {
    pub origin: String,
    pub max_ancestor_hops: usize,
    /// Class-vocabulary rules for the card matcher. Omitted in the YAML file
    /// means the built-in vocabulary.
    #[serde(default = "default_card_rules")]
    pub card_rules: Vec<CardRule>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserSettings {
                origin: DEFAULT_ORIGIN.to_string(),
                max_ancestor_hops: 4,
                card_rules: default_card_rules(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig { pretty_json: true },
        }
    }
}

impl Config {
    pub fn to_parser_config(&self) -> ParserConfig {
        ParserConfig {
            origin: self.parser.origin.clone(),
            max_ancestor_hops: self.parser.max_ancestor_hops,
            card_rules: self.parser.card_rules.clone(),
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pipeline_contract() {
        let config = Config::default();
        assert_eq!(config.parser.origin, "https://www.linkedin.com");
        assert_eq!(config.parser.max_ancestor_hops, 4);
        assert_eq!(config.parser.card_rules.len(), 3);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn yaml_without_rules_uses_builtin_vocabulary() {
        let yaml = r#"
parser:
  origin: "https://de.linkedin.com"
  max_ancestor_hops: 6
logging:
  level: debug
output:
  pretty_json: false
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.parser.origin, "https://de.linkedin.com");
        assert_eq!(config.parser.max_ancestor_hops, 6);
        assert_eq!(config.parser.card_rules.len(), 3);

        let parser_config = config.to_parser_config();
        assert_eq!(parser_config.origin, "https://de.linkedin.com");
        assert_eq!(parser_config.max_ancestor_hops, 6);
    }
}
