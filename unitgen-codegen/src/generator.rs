//! A full generation run over a binding model.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;
use unitgen_ir::BindingModel;

use crate::{
    Aggregation, Emission, Error, FileEmitter, Mode, ModuleAggregator, Result,
    outcome::Sink,
    paths::{default_persistent_dir, normalize},
};

/// Where a run writes, besides the regenerated output directory.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Project base directory.
    pub project_base: PathBuf,
    /// Target language; selects the default persistent root `src/main/<language>`.
    pub language: String,
    /// Explicit persistent root, overriding the conventional layout.
    pub persistent_sources_dir: Option<PathBuf>,
    /// Root of the resource tree holding `META-INF/services`.
    pub resource_base_dir: PathBuf,
}

impl GeneratorConfig {
    /// The persistent root for this configuration.
    pub fn persistent_dir(&self) -> PathBuf {
        match &self.persistent_sources_dir {
            Some(dir) => dir.clone(),
            None => self
                .project_base
                .join(default_persistent_dir(&self.language)),
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Type units.
    pub types: Emission,
    /// Module artifacts and the registration file.
    pub modules: Aggregation,
}

impl GenerationOutcome {
    /// Every file written by the run.
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.types
            .written
            .iter()
            .chain(self.modules.emission.written.iter())
    }

    /// Both passes combined.
    pub fn combined(&self) -> Emission {
        let mut all = self.types.clone();
        all.merge(self.modules.emission.clone());
        all
    }
}

/// Runs type emission and module aggregation for a binding model.
pub struct CodeGenerator {
    emitter: FileEmitter,
    aggregator: ModuleAggregator,
    config: GeneratorConfig,
}

impl CodeGenerator {
    pub fn new(emitter: FileEmitter, aggregator: ModuleAggregator, config: GeneratorConfig) -> Self {
        Self {
            emitter,
            aggregator,
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every unit of `model` into `output_dir` and the persistent root.
    ///
    /// `output_dir` is cleared first. Both passes share one set of claimed
    /// paths, so a type unit and a module artifact on the same file conflict.
    pub fn generate_sources(&self, model: &BindingModel, output_dir: &Path) -> Result<GenerationOutcome> {
        self.run(model, output_dir, Mode::Write)
    }

    /// Decide everything [`generate_sources`](Self::generate_sources) would do
    /// without writing, treating `output_dir` as already cleared.
    pub fn plan(&self, model: &BindingModel, output_dir: &Path) -> Result<GenerationOutcome> {
        self.run(model, output_dir, Mode::Plan)
    }

    fn run(&self, model: &BindingModel, output_dir: &Path, mode: Mode) -> Result<GenerationOutcome> {
        let selected = model
            .selected_modules()
            .map_err(|name| Error::UnknownModule { name })?;
        let persistent = self.config.persistent_dir();
        let output = self.clearable_output_dir(output_dir, &persistent)?;

        info!(
            types = model.types.len(),
            modules = selected.len(),
            output = %output.display(),
            persistent = %persistent.display(),
            ?mode,
            "generating sources"
        );

        let mut sink = match mode {
            Mode::Write => {
                clear_dir(&output)?;
                Sink::new(mode)
            }
            Mode::Plan => Sink::new(mode).assume_cleared(output.clone()),
        };

        self.emitter
            .emit_into(&mut sink, &model.types, &output, &persistent)?;
        let types = sink.take();

        let mut modules = self.aggregator.aggregate_into(
            &mut sink,
            &selected,
            &model.context,
            &output,
            &self.config.resource_base_dir,
        )?;
        modules.emission = sink.finish();

        Ok(GenerationOutcome { types, modules })
    }

    /// Normalized `output_dir`, refused when clearing it would also remove
    /// the persistent root or the project itself.
    fn clearable_output_dir(&self, output_dir: &Path, persistent: &Path) -> Result<PathBuf> {
        let resolve = |path: &Path| normalize(path).map_err(|source| Error::clear_output(output_dir, source));
        let output = resolve(output_dir)?;

        for (contains, other) in [
            ("project base", self.config.project_base.as_path()),
            ("persistent root", persistent),
        ] {
            let other = resolve(other)?;
            if other.starts_with(&output) {
                return Err(Error::UnsafeOutputDir {
                    path: output,
                    contains,
                    other,
                });
            }
        }
        Ok(output)
    }
}

fn clear_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            info!(path = %dir.display(), "cleared regenerated sources");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(Error::clear_output(dir, err)),
    }
}
