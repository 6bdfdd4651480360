//! Config command: print the effective settings or write a default file
use std::io::{self, Write};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::output_by_format_result;
use grafo_core::config::GrafoConfig;
use grafo_core::error::{GrafoError, Result};
use grafo_core::records::field;

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, init: bool, force: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if init {
        write_default(&mut out, ctx.cli.format, &ctx.config_path, force)
    } else {
        render(&mut out, ctx.cli.format, &ctx.config, &ctx.config_path)
    }
}

/// Write `GrafoConfig::default()` to `path`, refusing to replace a file
/// unless `force` is set
pub fn write_default<W: Write>(
    out: &mut W,
    format: OutputFormat,
    path: &Path,
    force: bool,
) -> Result<()> {
    if path.exists() && !force {
        return Err(GrafoError::Other(format!(
            "config file already exists: {} (use --force to replace it)",
            path.display()
        )));
    }
    GrafoConfig::default().save_to(path)?;
    tracing::debug!(path = %path.display(), "wrote default config");

    output_by_format_result!(format,
        json => {
            let value = serde_json::json!({ "path": path.display().to_string(), "written": true });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            Ok(())
        },
        human => {
            writeln!(out, "wrote {}", path.display())?
        },
        records => {
            writeln!(
                out,
                "H grafo=1 records=1 mode=config.init path={} written=true",
                field(&path.display().to_string())
            )?
        }
    )
}

pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    config: &GrafoConfig,
    path: &Path,
) -> Result<()> {
    let exists = path.exists();
    output_by_format_result!(format,
        json => {
            let value = serde_json::json!({
                "path": path.display().to_string(),
                "exists": exists,
                "config": config,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            Ok(())
        },
        human => {
            let note = if exists { "" } else { " (not found, defaults)" };
            writeln!(out, "# {}{}", path.display(), note)?;
            write!(out, "{}", config.to_toml()?)?
        },
        records => {
            output_config_records(out, config, path, exists)?
        }
    )
}

fn output_config_records<W: Write>(
    out: &mut W,
    config: &GrafoConfig,
    path: &Path,
    exists: bool,
) -> Result<()> {
    writeln!(
        out,
        "H grafo=1 records=1 mode=config path={} exists={}",
        field(&path.display().to_string()),
        exists
    )?;

    let value = serde_json::to_value(config)?;
    let mut entries = Vec::new();
    flatten("", &value, &mut entries);
    for (key, value) in entries {
        writeln!(out, "C {} {}", key, field(&value))?;
    }
    Ok(())
}

/// Dotted `section.key` pairs, sorted by key within each table
fn flatten(prefix: &str, value: &serde_json::Value, entries: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, inner) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&key, inner, entries);
            }
        }
        serde_json::Value::String(s) => entries.push((prefix.to_string(), s.clone())),
        other => entries.push((prefix.to_string(), other.to_string())),
    }
}
