//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsontemplate")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub struct Cli {
    /// JSON file with `template`, `options` and `dictionary` keys
    pub description: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also resolve `printf` formatters such as `printf %.2f`
    #[arg(long, global = true)]
    pub more_formatters: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand a template file against JSON data
    Render {
        /// Template file, optionally starting with header options
        #[arg(required_unless_present = "template")]
        template_file: Option<PathBuf>,

        /// Inline template text instead of a file
        #[arg(short, long, conflicts_with = "template_file")]
        template: Option<String>,

        /// JSON data file; read from stdin when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Compile a template file and report errors without expanding it
    Check {
        /// Template file, optionally starting with header options
        template_file: PathBuf,
    },
}
