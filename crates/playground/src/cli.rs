//! Command-line definition.
//!
//! Connection settings can come from flags or from `PLAYGROUND_*` environment
//! variables; flags win.

use clap::{Parser, Subcommand};
use http_source::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::observability::LogFormat;
use crate::simulated::Scenario;

#[derive(Debug, Parser)]
#[command(
    name = "playground",
    version,
    about = "Walk through the ways of handling single and multi-entity call outcomes"
)]
pub struct Cli {
    /// Base URL of the remote service
    #[arg(long, env = "PLAYGROUND_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Bearer token; omit for anonymous access
    #[arg(long, env = "PLAYGROUND_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PLAYGROUND_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Answer every call from an in-process source instead of the network
    #[arg(long, value_enum, global = true)]
    pub simulate: Option<Scenario>,

    /// Log output format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, value_enum, env = "PLAYGROUND_LOG_FORMAT", default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up one team and print its member count
    Team {
        /// Team id
        id: String,

        /// Lookup path; `{id}` is replaced with the team id
        #[arg(long, default_value = "/api/team/{id}")]
        path: String,
    },

    /// Apply every extraction style to a lookup and a search, printing the
    /// distinct messages each produces
    Results {
        /// Team id for the single-entity lookup
        #[arg(long, default_value = "lichess-swiss")]
        team_id: String,

        /// Search term for the multi-entity query
        #[arg(long, default_value = "Lichess")]
        search: String,

        /// Lookup path; `{id}` is replaced with the team id
        #[arg(long, default_value = "/api/team/{id}")]
        team_path: String,

        /// Search path; the term is sent as the `text` query parameter
        #[arg(long, default_value = "/api/team/search")]
        search_path: String,
    },

    /// Stream entities from an NDJSON endpoint as JSON lines
    Fetch {
        /// Path relative to the base URL
        path: String,

        /// Stop after this many entities
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Query parameter as KEY=VALUE (repeatable)
        #[arg(long = "query", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },
}

fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_fetch_with_repeated_query() {
        let cli = Cli::parse_from([
            "playground",
            "--simulate",
            "found",
            "fetch",
            "/api/stream",
            "--limit",
            "3",
            "--query",
            "a=1",
            "--query",
            "b=x=y",
        ]);

        assert_eq!(cli.simulate, Some(Scenario::Found));
        let Command::Fetch { path, limit, query } = cli.command else {
            panic!("expected fetch");
        };
        assert_eq!(path, "/api/stream");
        assert_eq!(limit, 3);
        assert_eq!(
            query,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x=y".to_string())
            ]
        );
    }

    #[test]
    fn rejects_query_without_key() {
        assert!(parse_query_pair("=1").is_err());
        assert!(parse_query_pair("novalue").is_err());
    }
}
