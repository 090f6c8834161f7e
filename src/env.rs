use {
    crate::{error::ConfigResult, utils},
    serde::Deserialize,
    std::net::Ipv4Addr,
    tracing::warn,
};

/// Deployment stage selector. Anything other than `dev` behaves like a
/// production-like deployment.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Stage {
    Dev,
    #[default]
    Production,
}

impl From<String> for Stage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "dev" => Stage::Dev,
            _ => Stage::Production,
        }
    }
}

impl Stage {
    pub fn is_dev(self) -> bool {
        matches!(self, Stage::Dev)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub stage: Stage,
    pub infura_project_id: String,
    pub etherscan_api_key: String,
    pub host: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stage: Stage::Production,
            infura_project_id: String::new(),
            etherscan_api_key: String::new(),
            host: None,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> ConfigResult<Config> {
        Ok(envy::prefixed("GATEWAY_").from_env()?)
    }

    /// Host address that development-stage URLs are derived from.
    /// Explicit override first, then interface discovery, loopback as
    /// the last resort.
    pub fn host_addr(&self) -> String {
        if let Some(host) = &self.host {
            return host.clone();
        }

        match utils::network::find_local_host_addr() {
            Ok(addr) => addr.to_string(),
            Err(err) => {
                warn!("no usable local address ({err}), falling back to loopback");
                Ipv4Addr::LOCALHOST.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: Vec<(&str, &str)>) -> Config {
        envy::prefixed("GATEWAY_")
            .from_iter(
                vars.into_iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned())),
            )
            .unwrap()
    }

    #[test]
    fn empty_environment_yields_production_defaults() {
        let config = from_vars(vec![]);

        assert_eq!(config.stage, Stage::Production);
        assert!(!config.stage.is_dev());
        assert!(config.infura_project_id.is_empty());
        assert!(config.etherscan_api_key.is_empty());
        assert_eq!(config.host, None);
        assert_eq!(config.log_level, "INFO");
    }

    #[test]
    fn dev_stage_is_recognized() {
        let config = from_vars(vec![("GATEWAY_STAGE", "dev")]);

        assert_eq!(config.stage, Stage::Dev);
        assert!(config.stage.is_dev());
    }

    #[test]
    fn unknown_stage_values_behave_like_production() {
        for value in ["prod", "staging", "DEV", ""] {
            let config = from_vars(vec![("GATEWAY_STAGE", value)]);
            assert_eq!(config.stage, Stage::Production, "stage value {value:?}");
        }
    }

    #[test]
    fn host_override_wins_over_discovery() {
        let config = from_vars(vec![("GATEWAY_HOST", "10.0.0.42")]);

        assert_eq!(config.host_addr(), "10.0.0.42");
    }

    #[test]
    fn api_keys_are_read_from_the_environment() {
        let config = from_vars(vec![
            ("GATEWAY_INFURA_PROJECT_ID", "abc123"),
            ("GATEWAY_ETHERSCAN_API_KEY", "key456"),
        ]);

        assert_eq!(config.infura_project_id, "abc123");
        assert_eq!(config.etherscan_api_key, "key456");
    }
}
