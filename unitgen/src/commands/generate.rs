use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use unitgen_manifest::{UnitgenToml, load_model};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to unitgen.toml (defaults to ./unitgen.toml)
    #[arg(short, long, default_value = "unitgen.toml")]
    pub config: PathBuf,

    /// Path to the binding model JSON (defaults to ./model.json)
    #[arg(short, long, default_value = "model.json")]
    pub model: PathBuf,

    /// Decide what would be written without touching disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let toml = UnitgenToml::open(&self.config).unwrap_or_exit();
        let model = load_model(&self.model).unwrap_or_exit();

        let report = ops::generate(
            &toml,
            &model,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
