use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, debug, info};
use tgmd_render::MarkdownV2Renderer;

mod cli;
mod config;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .init();

  if let Some(Commands::DefaultConfig) = &cli.command {
    let toml = Config::default_toml()?;
    io::stdout()
      .write_all(toml.as_bytes())
      .wrap_err("Failed to write default configuration")?;
    return Ok(());
  }

  let config = Config::load(cli.config_file.as_deref())?;
  let renderer = MarkdownV2Renderer::new(config.render);

  let markdown = read_input(cli.input.as_deref())?;
  let rendered = renderer
    .convert(&markdown)
    .wrap_err("Failed to render MarkdownV2")?;

  write_output(cli.output.as_deref(), &rendered)
}

fn read_input(path: Option<&Path>) -> Result<String> {
  if let Some(path) = path {
    debug!("Reading Markdown from {}", path.display());
    return fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read input: {}", path.display()));
  }

  debug!("Reading Markdown from standard input");
  let mut markdown = String::new();
  io::stdin()
    .read_to_string(&mut markdown)
    .wrap_err("Failed to read standard input")?;
  Ok(markdown)
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
  if let Some(path) = path {
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
    }
    fs::write(path, rendered)
      .wrap_err_with(|| format!("Failed to write output: {}", path.display()))?;
    info!("Wrote {} bytes to {}", rendered.len(), path.display());
    return Ok(());
  }

  io::stdout()
    .write_all(rendered.as_bytes())
    .wrap_err("Failed to write to standard output")
}
