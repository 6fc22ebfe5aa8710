use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::Arc,
};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Logs go to `log_file` when given, otherwise to stderr if `stderr_fallback`
/// is set. Without either, logging stays disabled. The level is read from
/// `RUST_LOG` and defaults to `info`.
pub fn init_logging(log_file: Option<&Path>, stderr_fallback: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None if stderr_fallback => builder.with_writer(io::stderr).try_init(),
        None => return Ok(()),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

pub fn write_json<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value).context("Failed to write JSON")?;
    writeln!(writer).context("Failed to write newline after JSON")?;
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({ "mark": "X" })).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"mark\": \"X\"\n}\n");
    }

    #[test]
    fn test_logging_disabled_without_target() {
        assert!(init_logging(None, false).is_ok());
    }
}
