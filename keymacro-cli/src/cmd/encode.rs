use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use keymacro_config::ConfigLoader;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space separated hex bytes, 16 per line
    Hex,
    /// Raw bytes
    Binary,
}

pub fn run(file: &Path, protocol: Option<u32>, format: OutputFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let config = ConfigLoader::load(file).with_context(|| format!("failed to load {}", file.display()))?;
    let buffer = config
        .serialize_macros(protocol)
        .with_context(|| format!("failed to encode macros of {}", file.display()))?;
    info!(
        "Encoded {} macros into {} bytes",
        config.macros.len(),
        buffer.len()
    );

    let rendered = match format {
        OutputFormat::Hex => format_hex(&buffer).into_bytes(),
        OutputFormat::Binary => buffer,
    };

    match output {
        Some(path) => std::fs::write(path, &rendered).with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(&rendered)
            .context("failed to write to stdout")?,
    }
    Ok(())
}

pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for line in bytes.chunks(16) {
        let hex: Vec<String> = line.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&hex.join(" "));
        out.push('\n');
    }
    out
}
