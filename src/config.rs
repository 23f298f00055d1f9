use std::env;
use std::time::Duration;

use crate::blockchain::{DEFAULT_DIFFICULTY, DIFF_MAX, DIFF_MIN};

/// Process settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub difficulty: u32,
    pub peer_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            difficulty: DEFAULT_DIFFICULTY,
            peer_timeout: Duration::from_secs(5),
        }
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Settings {
    /// `HOST`, `PORT`, `DIFFICULTY`, `PEER_TIMEOUT_SECS`; unset or unparsable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed("PORT").unwrap_or(defaults.port),
            difficulty: parsed::<u32>("DIFFICULTY")
                .unwrap_or(defaults.difficulty)
                .clamp(DIFF_MIN, DIFF_MAX),
            peer_timeout: parsed::<u64>("PEER_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.peer_timeout),
        }
    }

    /// A port given as the first CLI argument wins over `PORT`.
    pub fn with_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Self {
        if let Some(port) = args.into_iter().nth(1).and_then(|a| a.parse().ok()) {
            self.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cli_port_overrides() {
        let s = Settings::default().with_args(args(&["ledger_node", "5001"]));
        assert_eq!(s.port, 5001);
    }

    #[test]
    fn bad_cli_port_is_ignored() {
        let s = Settings::default().with_args(args(&["ledger_node", "not-a-port"]));
        assert_eq!(s.port, 5000);
        let s = Settings::default().with_args(args(&["ledger_node"]));
        assert_eq!(s.port, 5000);
    }
}
