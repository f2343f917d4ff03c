use crate::{dialect::DialectKind, env::load_builder_config, error::CliError};
use clap::Parser;
use commands::Commands;
use model::{form::values::FormValues, query::selection::Selection};
use planner::query::render_selection;
use selection_builder::{SelectionBuilder, validate_selection};
use serde_json::json;
use std::{io::Write, process::ExitCode, str::FromStr};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod dialect;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "sift",
    version = "0.1.0",
    about = "Converts selection form values into query payloads"
)]
struct Cli {
    #[arg(long, global = true, help = "Env file with configuration overrides")]
    env_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err, &mut std::io::stderr()),
    }
}

/// Writes the error for the user. Not routed through `tracing`, so a
/// restrictive `RUST_LOG` cannot hide it.
fn report_failure(err: &CliError, out: &mut impl Write) -> ExitCode {
    let _ = writeln!(out, "Error: {err}");
    ExitCode::FAILURE
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let env_file = cli.env_file.as_deref();

    match cli.command {
        Commands::Convert {
            input,
            output,
            max_depth,
            compact,
        } => {
            let config = load_builder_config(env_file, max_depth)?;
            let form = load_form(&input).await?;
            let selection = SelectionBuilder::new(config).build(&form)?;

            match output {
                Some(path) => {
                    output::write_json(&selection, &path, compact).await?;
                    info!("Selection written to {path}");
                }
                None => output::print_json(&selection, compact)?,
            }
        }
        Commands::Check { input, max_depth } => {
            let config = load_builder_config(env_file, max_depth)?;
            let source = output::read_input(&input).await?;
            let selection: Selection = serde_json::from_str(&source)?;

            validate_selection(&selection, config.max_depth)?;
            info!(
                "Selection on '{}' is well-formed ({} filter element(s))",
                selection.table,
                selection.filter.len()
            );
        }
        Commands::Sql {
            input,
            dialect,
            max_depth,
        } => {
            let kind =
                DialectKind::from_str(&dialect).map_err(|_| CliError::InvalidDialect(dialect))?;
            let config = load_builder_config(env_file, max_depth)?;
            let form = load_form(&input).await?;
            let selection = SelectionBuilder::new(config).build(&form)?;

            let preview = sql_preview(&selection, kind, config.max_depth)?;
            output::print_json(&preview, false)?;
        }
    }

    Ok(())
}

fn sql_preview(
    selection: &Selection,
    kind: DialectKind,
    max_depth: usize,
) -> Result<serde_json::Value, CliError> {
    let (sql, params) = render_selection(selection, kind.dialect(), max_depth)?;
    Ok(json!({ "sql": sql, "params": params }))
}

async fn load_form(path: &str) -> Result<FormValues, CliError> {
    let source = output::read_input(path).await?;
    let form = serde_json::from_str(&source)?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let res = Cli::try_parse_from(["sift", "convert", "--input", "-", "--max-depth", "0"]);
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_convert_command_writes_selection() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("form.json");
        let out = dir.path().join("selection.json");
        std::fs::write(
            &input,
            r#"{"table": "t", "columns": ["a"], "filter": [{"column": "a", "condition": "Equal", "Equal": 1}]}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "sift",
            "convert",
            "--input",
            input.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
            "--compact",
        ])
        .unwrap();
        run(cli).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            r#"{"table":"t","columns":["a"],"filter":[{"column":"a","equation":{"Equal":1}}]}"#
        );
    }

    #[tokio::test]
    async fn test_convert_command_surfaces_unknown_operator() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("form.json");
        std::fs::write(
            &input,
            r#"{"table": "t", "columns": ["a"], "filter": [{"column": "a", "condition": "Contains"}]}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from(["sift", "convert", "--input", input.to_str().unwrap()])
            .unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Convert(selection_builder::ConvertError::UnknownOperator { .. })
        ));
    }

    fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_check_command_accepts_valid_selection() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            "selection.json",
            r#"{"table": "people", "columns": ["name"], "filter": [
                {"column": "age", "equation": {"Greater": 18}},
                [{"column": "city", "equation": {"Equal": "NYC"}}],
                "Or",
                {"column": "vip", "equation": {"Equal": true}}
            ]}"#,
        );

        let cli = Cli::try_parse_from(["sift", "check", "--input", &input]).unwrap();
        assert!(run(cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_command_rejects_leading_junction() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            "selection.json",
            r#"{"table": "t", "columns": ["a"], "filter": ["And", {"column": "a", "equation": {"Equal": 1}}]}"#,
        );

        let cli = Cli::try_parse_from(["sift", "check", "--input", &input]).unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Structure(selection_builder::StructureError::UnexpectedJunction(_))
        ));
    }

    #[tokio::test]
    async fn test_sql_command_renders_nested_form() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            "form.json",
            r#"{"table": "people", "columns": ["name"], "filter": [{
                "column": "age", "condition": "Greater", "Greater": 18,
                "filter": [{"column": "city", "condition": "Equal", "Equal": "NYC"}]
            }]}"#,
        );

        let cli = Cli::try_parse_from(["sift", "sql", "--input", &input, "--dialect", "mysql"])
            .unwrap();
        assert!(run(cli).await.is_ok());

        let form = load_form(&input).await.unwrap();
        let selection = SelectionBuilder::default().build(&form).unwrap();
        let preview = sql_preview(&selection, DialectKind::MySql, 32).unwrap();
        assert_eq!(
            preview,
            json!({
                "sql": "SELECT `name` FROM `people` WHERE `age` > ? AND (`city` = ?);",
                "params": [18, "NYC"]
            })
        );
    }

    #[test]
    fn test_failure_is_reported_without_logging() {
        let mut out = Vec::new();
        report_failure(&CliError::InvalidDialect("sqlite".into()), &mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Invalid SQL dialect provided: sqlite\n"
        );
    }

    #[tokio::test]
    async fn test_sql_command_rejects_unknown_dialect() {
        let cli = Cli::try_parse_from(["sift", "sql", "--input", "-", "--dialect", "sqlite"])
            .unwrap();
        assert!(matches!(run(cli).await, Err(CliError::InvalidDialect(_))));
    }
}
