use std::path::Path;
use anyhow::{Context, Result};
use colored::Colorize;
use brewgen::descriptor::ReleaseDescriptor;
use brewgen::formula::render_formula;
use brewgen::summary::render_summary;
use crate::cli::{BrewgenCommand, RenderFormat, CLI};

pub fn execute(cli: CLI) -> Result<()> {
    match cli.command {
        BrewgenCommand::Render { descriptor, format, output } => {
            execute_render(&descriptor, format, output.as_deref())
        }
        BrewgenCommand::Check { descriptor } => {
            execute_check(&descriptor)
        }
    }
}

pub fn execute_render(
    descriptor_path: &Path,
    format: RenderFormat,
    output: Option<&Path>,
) -> Result<()> {
    let descriptor = load_descriptor(descriptor_path)?;
    let rendered = match format {
        RenderFormat::Homebrew => render_formula(&descriptor)?,
        RenderFormat::Text => render_summary(&descriptor)?,
    };
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {}/{}@{} -> {}",
                "Rendered".green(),
                descriptor.owner,
                descriptor.program,
                descriptor.version,
                path.display()
            );
        }
        None => {
            print!("{}", rendered);
        }
    }
    Ok(())
}

pub fn execute_check(descriptor_path: &Path) -> Result<()> {
    let descriptor = load_descriptor(descriptor_path)?;
    descriptor.validate()?;
    println!(
        "{} {}/{}@{} ({} assets)",
        "OK".green(),
        descriptor.owner,
        descriptor.program,
        descriptor.version,
        descriptor.assets.len()
    );
    Ok(())
}

fn load_descriptor(path: &Path) -> Result<ReleaseDescriptor> {
    ReleaseDescriptor::load(path)
        .with_context(|| format!("Failed to load descriptor {}", path.display()))
}
