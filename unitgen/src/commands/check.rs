use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use unitgen_manifest::{UnitgenToml, load_model};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to unitgen.toml (defaults to ./unitgen.toml)
    #[arg(short, long, default_value = "unitgen.toml")]
    pub config: PathBuf,

    /// Path to the binding model JSON (defaults to ./model.json)
    #[arg(short, long, default_value = "model.json")]
    pub model: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let toml = UnitgenToml::open(&self.config).unwrap_or_exit();
        let model = load_model(&self.model).unwrap_or_exit();

        let report = ops::check(&toml, &model, &self.model);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
