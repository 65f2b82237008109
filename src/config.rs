use serde::Deserialize;

use crate::error::Result;
use crate::service::rate::hkab;

const ENV_PREFIX: &str = "HKAB_";

/// Transport settings for the HKAB provider, read from `HKAB_*` env variables.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    hkab::ENDPOINT.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Config>(vars)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Config::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.endpoint, hkab::ENDPOINT);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn reads_prefixed_vars() {
        let cfg = Config::from_vars(vars(&[
            ("HKAB_ENDPOINT", "http://localhost:8080/rates"),
            ("HKAB_TIMEOUT_SECS", "15"),
        ])).unwrap();

        assert_eq!(cfg.endpoint, "http://localhost:8080/rates");
        assert_eq!(cfg.timeout_secs, Some(15));
    }

    #[test]
    fn bad_timeout_is_config_error() {
        let res = Config::from_vars(vars(&[("HKAB_TIMEOUT_SECS", "soon")]));
        assert!(matches!(res, Err(Error::Config(_))));
    }
}
