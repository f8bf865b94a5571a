//! One-shot encoding for the `render` subcommand.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use chrono::Utc;
use page_logging::page_info;
use qrpage_engine::{save_download, AtomicFileWriter, DirectorySink, Encoder, QrEncoder};

use super::config::AppConfig;

/// Encodes `text` once and reports the result on `output`: the data URI when
/// `data_uri` is set, otherwise the path of the written PNG.
pub fn render_once(
    config: &AppConfig,
    text: &str,
    out: Option<&Path>,
    data_uri: bool,
    output: &mut dyn Write,
) -> anyhow::Result<()> {
    let options = config.encode.to_options().context("invalid encode options")?;
    let image = QrEncoder
        .encode(text, &options)
        .with_context(|| format!("failed to encode {} bytes of text", text.len()))?;
    page_info!(
        "Encoded {}x{} image ({} modules)",
        image.width,
        image.height,
        image.modules.size()
    );

    if data_uri {
        writeln!(output, "{}", image.data_uri())?;
        return Ok(());
    }

    let path = match out {
        Some(path) => write_png(path, &image.png)?,
        None => {
            let sink = DirectorySink::new(config.download_dir.clone());
            save_download(&sink, &image.png, Utc::now().timestamp_millis())
                .context("failed to save image")?
        }
    };
    writeln!(output, "{}", path.display())?;
    Ok(())
}

fn write_png(path: &Path, png: &[u8]) -> anyhow::Result<PathBuf> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("output path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    AtomicFileWriter::new(dir)
        .write(filename, png)
        .with_context(|| format!("failed to write {}", path.display()))
}
