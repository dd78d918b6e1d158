use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::PresetArg;
use spares_app::{PartConfigsSource, PartsSelection};
use thiserror::Error;
use util::source::SourceError;

#[derive(Parser)]
#[command(name = "spares_cli")]
#[command(bin_name = "spares_cli")]
#[command(version, about, long_about = None)]
pub struct Opts {
    #[command(subcommand)]
    pub command: Command,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub trace: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct PartsArgs {
    /// Part configurations file, CSV or JSON
    #[arg(long, value_name = "FILE")]
    parts: Option<PathBuf>,

    /// Built-in part configurations
    #[arg(long)]
    preset: Option<PresetArg>,
}

#[derive(Error, Debug)]
pub enum PartsArgsError {
    #[error("Either a parts source or a preset is required")]
    MissingPartsSelection,
    #[error("Invalid parts source. cause: {0}")]
    InvalidSource(#[from] SourceError),
}

impl PartsArgs {
    pub fn build_parts_selection(&self) -> Result<PartsSelection, PartsArgsError> {
        match (&self.parts, self.preset) {
            (Some(path), _) => Ok(PartsSelection::Source(PartConfigsSource::try_from_existing_file(
                path.clone(),
            )?)),
            (None, Some(preset)) => Ok(PartsSelection::Preset(preset.into())),
            // clap configuration prevents this
            (None, None) => Err(PartsArgsError::MissingPartsSelection),
        }
    }
}

#[derive(Subcommand)]
#[command(arg_required_else_help(true))]
pub enum Command {
    /// List the parts that need spares
    Spares {
        /// Size of the assembly, e.g. 'L'
        #[arg(long)]
        size: String,

        #[command(flatten)]
        parts_args: PartsArgs,

        /// Output CSV file
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List all the parts
    Parts {
        /// Size of the assembly, e.g. 'L'
        #[arg(long)]
        size: String,

        #[command(flatten)]
        parts_args: PartsArgs,
    },
}
