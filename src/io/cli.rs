//! Command-line interface for batch running grid command scripts

use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, OUTPUT_EXTENSION, OUTPUT_SUFFIX, SCRIPT_EXTENSION,
};
use crate::io::error::{MazeError, Result, WithContext, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::script::Script;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mazegrid")]
#[command(
    author,
    version,
    about = "Run maze grid command scripts and write the resulting layouts"
)]
/// Command-line arguments for the script runner
pub struct Cli {
    /// Script file or directory of `.maze` scripts to run
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid width for scripts that do not declare one
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height for scripts that do not declare one
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Run scripts even if their layout file exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs every selected script and writes its layout beside it
pub struct ScriptProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ScriptProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run scripts according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, or a script fails to parse,
    /// run or be written out
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("No scripts to run in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            if let Err(error) = self.process_file(file, index) {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.fail_script(index);
                    pm.finish();
                }
                return Err(error);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_script(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("script files must have the .{SCRIPT_EXTENSION} extension"),
                ));
            }
            Ok(self
                .should_process_file(target)
                .then(|| vec![target.clone()])
                .unwrap_or_default())
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| MazeError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry.with_path(target)?.path();
                if is_script(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a script file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let exists = output_path(input_path).exists();
        if exists {
            warn!("Skipping: {} (output exists)", input_path.display());
        }
        !exists
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let script = Script::from_path(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_script(index, input_path, script.len());
        }

        let progress = &mut self.progress_manager;
        let layout = script.run_with(self.cli.width, self.cli.height, |executed| {
            if let Some(pm) = progress.as_mut() {
                pm.update_step(index, executed);
            }
        })?;

        let output = output_path(input_path);
        std::fs::write(&output, layout).map_err(|e| MazeError::FileSystem {
            path: output.clone(),
            operation: "write layout",
            source: e,
        })?;
        info!("Wrote {}", output.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_script(index, start_time.elapsed());
        }

        Ok(())
    }
}

fn is_script(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(SCRIPT_EXTENSION)
}

/// Layout file written for the script at `input_path`
///
/// `rooms/demo.maze` maps to `rooms/demo_layout.txt`.
pub fn output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
        stem.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
