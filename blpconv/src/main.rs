//! Batch converter from BLP textures to standard image formats.

mod cli;

use anyhow::{Context, Result};
use blp_decode::{decode_mipmap, parse_header};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }

    let mut failures = 0usize;
    for file in &cli.files {
        let result = if cli.info {
            show_info(file)
        } else {
            convert(file, &cli)
        };
        if let Err(e) = result {
            eprintln!("✗ {}: {e:#}", file.display());
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) failed", cli.files.len());
    }
    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let header = parse_header(&data)?;

    println!("{}:", path.display());
    println!("  Version:    {}", header.version());
    println!("  Format:     {}", header.format());
    println!("  Dimensions: {}x{}", header.width, header.height);
    println!("  Mip levels: {}", header.mip_count());
    Ok(())
}

fn convert(path: &Path, cli: &Cli) -> Result<()> {
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let header = parse_header(&data)?;
    let buffer = decode_mipmap(&data, &header, cli.mip_level)
        .with_context(|| format!("failed to decode mip level {}", cli.mip_level))?;

    let output = output_path(path, &cli.dest, cli.format);
    buffer
        .into_rgba()
        .save_with_format(&output, cli.format.into())
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("✓ {} -> {}", path.display(), output.display());
    Ok(())
}

/// Output file: the input stem with the chosen extension, placed in `dest`.
fn output_path(input: &Path, dest: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input
        .file_stem()
        .map_or_else(|| "output".into(), std::ffi::OsStr::to_os_string);
    name.push(".");
    name.push(format.extension());
    dest.join(name)
}
