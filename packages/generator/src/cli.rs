//! Command-line interface for the generator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_wrap_width, DEFAULT_INPUT_FILE, DEFAULT_NAME};
use crate::error::{GeneratorError, Result};
use crate::generator::build_cv;
use crate::markdown::{save_markdown, RenderOptions};

/// MasterCV Generator - Render a tailored Markdown CV from a master YAML document.
#[derive(Parser)]
#[command(name = "mastercv-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the selected entries of a master document to Markdown.
    Generate {
        /// Master document to read (default: master_cv.yaml)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (default: derived from the identity name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Re-wrap the summary at the given column width
        #[arg(long, value_name = "WIDTH")]
        wrap: Option<usize>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            wrap,
        } => generate_command(input.as_deref(), output.as_deref(), wrap),
    }
}

/// Execute the generate command.
fn generate_command(
    input: Option<&Path>,
    output: Option<&Path>,
    wrap: Option<usize>,
) -> Result<()> {
    let input_path = input.unwrap_or_else(|| Path::new(DEFAULT_INPUT_FILE));

    // Validate inputs before touching the filesystem
    if let Some(width) = wrap {
        validate_wrap_width(width)?;
    }

    // Validate output directory exists (if specified) before generating
    if let Some(output_path) = output {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(GeneratorError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Output directory does not exist: {}", parent.display()),
                )));
            }
        }
    }

    println!(
        "{} {}",
        style("Generating CV from").bold(),
        style(input_path.display()).cyan()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );

    pb.set_message("Reading master document...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let options = RenderOptions { wrap_width: wrap };
    let built = match build_cv(input_path, &options) {
        Ok(built) => built,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Selecting entries...");

    println!(
        "  Name: {}",
        style(built.name.as_deref().unwrap_or(DEFAULT_NAME)).green()
    );
    println!("  Sections: {}", built.stats.sections);
    println!("  Jobs: {}", built.stats.jobs);
    println!("  Bullets: {}", built.stats.bullets);

    pb.set_message("Writing markdown...");

    let output_path = output.unwrap_or(built.default_output.as_path());
    if let Err(e) = save_markdown(&built.markdown, output_path) {
        pb.finish_and_clear();
        return Err(e);
    }

    pb.finish_and_clear();

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}
