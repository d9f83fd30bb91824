//! Command routing and execution

use crate::cli::args::Commands;
use crate::config::DemoConfig;
use crate::demo::{run_aggregate_demo, run_all, run_functions_demo};
use crate::functions::StringConsumer;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, trace};

/// Execute a CLI command, writing demo lines to `sink`
pub fn execute_command(
    command: Option<Commands>,
    config_path: Option<&Path>,
    sink: &mut impl StringConsumer,
) -> Result<()> {
    let mut config =
        DemoConfig::load_or_default(config_path).context("Failed to load configuration")?;
    match config.to_toml_string() {
        Ok(rendered) => trace!("Effective config:\n{}", rendered),
        Err(e) => debug!("Effective config: {:?} ({})", config, e),
    }

    match command {
        Some(Commands::Aggregate { numbers }) => {
            if !numbers.is_empty() {
                config.numbers = numbers;
            }
            run_aggregate_demo(&config, sink).context("Aggregate demo failed")
        }
        Some(Commands::Functions) => {
            run_functions_demo(&config, sink).context("Functions demo failed")
        }
        None => run_all(&config, sink).context("Demo run failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_everything() {
        let mut lines = Vec::new();
        execute_command(None, None, &mut |s: &str| lines.push(s.to_string())).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "sum: 6");
        assert_eq!(lines[5], "dec: 9");
    }

    #[test]
    fn test_aggregate_numbers_override_config() {
        let mut lines = Vec::new();
        let command = Commands::Aggregate {
            numbers: vec![5, -2, 9],
        };
        execute_command(Some(command), None, &mut |s: &str| lines.push(s.to_string())).unwrap();
        assert_eq!(lines, vec!["sum: 12", "sum1: 12", "max: 9"]);
    }

    #[test]
    fn test_functions_only() {
        let mut lines = Vec::new();
        execute_command(
            Some(Commands::Functions),
            None,
            &mut |s: &str| lines.push(s.to_string()),
        )
        .unwrap();
        assert_eq!(lines, vec!["Hello", "inc: 11", "dec: 9"]);
    }

    #[test]
    fn test_empty_config_numbers_fail_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fnkit.toml");
        std::fs::write(&path, "numbers = []").unwrap();

        let mut lines = Vec::new();
        let err = execute_command(
            Some(Commands::Aggregate { numbers: vec![] }),
            Some(&path),
            &mut |s: &str| lines.push(s.to_string()),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Aggregate demo failed");
        assert!(format!("{err:#}").contains("cannot aggregate an empty sequence"));
        assert!(lines.is_empty());
    }
}
