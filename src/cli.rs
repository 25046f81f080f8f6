//! Command-line interface parsing
//!
//! Flags override the environment-derived `Config`; any trailing words run
//! as a single command instead of starting the interactive loop.

use clap::Parser;

use crate::config::Config;

/// Pokedex - explore PokeAPI location areas and catch pokemon
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "A Pokedex REPL backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// PokeAPI root URL (overrides POKEDEX_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Seconds between response cache sweeps (overrides POKEDEX_CACHE_INTERVAL)
    #[arg(long, value_name = "SECS")]
    pub cache_interval: Option<u64>,

    /// HTTP request timeout in seconds (overrides POKEDEX_HTTP_TIMEOUT)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Command to run once instead of starting the loop
    ///
    /// Examples:
    ///   pokedex map
    ///   pokedex explore pastoria-city-area
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Applies any flags given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(interval) = self.cache_interval {
            config.cache_interval = interval;
        }
        if let Some(timeout) = self.timeout {
            config.http_timeout = timeout;
        }
        config
    }

    /// The one-shot command line, if any.
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pokedex"]);
        assert!(cli.api_url.is_none());
        assert!(cli.cache_interval.is_none());
        assert!(cli.one_shot().is_none());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "pokedex",
            "--api-url",
            "http://localhost:8080/",
            "--cache-interval",
            "5",
            "--timeout",
            "2",
        ]);

        let config = cli.apply(Config::default());

        assert_eq!(config.api_url, "http://localhost:8080/");
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.http_timeout, 2);
    }

    #[test]
    fn test_cli_without_flags_keeps_config() {
        let cli = Cli::parse_from(["pokedex"]);
        let config = cli.apply(Config::default());
        assert_eq!(config.api_url, crate::config::DEFAULT_API_URL);
        assert_eq!(config.cache_interval, 300);
    }

    #[test]
    fn test_cli_one_shot_command() {
        let cli = Cli::parse_from(["pokedex", "explore", "pastoria-city-area"]);
        assert_eq!(cli.one_shot().as_deref(), Some("explore pastoria-city-area"));
    }

    #[test]
    fn test_cli_flags_before_command() {
        let cli = Cli::parse_from(["pokedex", "--timeout", "3", "catch", "pikachu"]);
        assert_eq!(cli.timeout, Some(3));
        assert_eq!(cli.command, ["catch", "pikachu"]);
    }
}
