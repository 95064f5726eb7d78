use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedProfile {
    /// Small hand-written sample set.
    Demo,
    /// Generated data set large enough to exercise filtering and paging.
    Bulk,
    None,
}

impl std::str::FromStr for SeedProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(SeedProfile::Demo),
            "bulk" => Ok(SeedProfile::Bulk),
            "none" => Ok(SeedProfile::None),
            other => Err(format!("unknown seed profile '{}'", other)),
        }
    }
}

/// Latency and fault injection knobs for the simulated network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkProfile {
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    pub failure_rate: f64,
    pub seed: Option<u64>,
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self {
            latency_min_ms: 200,
            latency_max_ms: 1200,
            failure_rate: 0.07,
            seed: None,
        }
    }
}

impl NetworkProfile {
    /// No delay and no failures. Used where a test needs forced success.
    pub fn reliable() -> Self {
        Self {
            latency_min_ms: 0,
            latency_max_ms: 0,
            failure_rate: 0.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: Option<String>,
    pub network: NetworkProfile,
    pub seed_profile: SeedProfile,
    pub candidate_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:3000".to_string(),
            database_url: None,
            network: NetworkProfile::default(),
            seed_profile: SeedProfile::Demo,
            candidate_page_size: 20,
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Config::default();

        let network = NetworkProfile {
            latency_min_ms: get_env_parse_or(
                "SIM_LATENCY_MIN_MS",
                defaults.network.latency_min_ms,
            )?,
            latency_max_ms: get_env_parse_or(
                "SIM_LATENCY_MAX_MS",
                defaults.network.latency_max_ms,
            )?,
            failure_rate: get_env_parse_or("SIM_FAILURE_RATE", defaults.network.failure_rate)?,
            seed: get_env_opt_parse("SIM_SEED")?,
        };
        if network.latency_max_ms < network.latency_min_ms {
            return Err(Error::Config(
                "SIM_LATENCY_MAX_MS must not be lower than SIM_LATENCY_MIN_MS".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&network.failure_rate) {
            return Err(Error::Config(
                "SIM_FAILURE_RATE must be within 0.0..=1.0".to_string(),
            ));
        }

        Ok(Self {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            network,
            seed_profile: get_env_parse_or("SEED_PROFILE", defaults.seed_profile)?,
            candidate_page_size: get_env_parse_or::<usize>(
                "CANDIDATE_PAGE_SIZE",
                defaults.candidate_page_size,
            )?
            .clamp(1, 100),
        })
    }
}

fn get_env_opt_parse<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(get_env_opt_parse(name)?.unwrap_or(default))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_profile_parses_case_insensitively() {
        assert_eq!("Bulk".parse::<SeedProfile>(), Ok(SeedProfile::Bulk));
        assert_eq!(" none ".parse::<SeedProfile>(), Ok(SeedProfile::None));
        assert!("everything".parse::<SeedProfile>().is_err());
    }

    #[test]
    fn defaults_are_200_to_1200ms_with_7_percent_failures() {
        let config = Config::default();
        assert_eq!(config.network.latency_min_ms, 200);
        assert_eq!(config.network.latency_max_ms, 1200);
        assert!((config.network.failure_rate - 0.07).abs() < f64::EPSILON);
        assert_eq!(config.seed_profile, SeedProfile::Demo);
    }
}
