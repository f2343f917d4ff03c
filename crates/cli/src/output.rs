use crate::error::CliError;
use serde::Serialize;
use tokio::io::AsyncReadExt;

/// Reads the whole input, `-` meaning stdin.
pub async fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        Ok(buf)
    } else {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.map_err(CliError::JsonSerialize)
}

pub async fn write_json<T: Serialize>(
    value: &T,
    path: &str,
    compact: bool,
) -> Result<(), CliError> {
    let json = to_json(value, compact)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), CliError> {
    let json = to_json(value, compact)?;
    println!("{json}");
    Ok(())
}
