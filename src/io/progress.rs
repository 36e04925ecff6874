//! Progress display for batch script runs
//!
//! Each running script gets a bar ticking once per executed command. Only the
//! [`MAX_INDIVIDUAL_PROGRESS_BARS`] most recently started scripts keep a bar;
//! larger batches add a batch bar counting finished scripts.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::debug;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SCRIPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Scripts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Outcome of a script as shown in front of its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Running,
    Done,
    Failed,
}

#[derive(Debug, Clone)]
struct ScriptState {
    index: usize,
    name: String,
    executed: usize,
    commands: usize,
    outcome: Outcome,
}

impl ScriptState {
    fn label(&self) -> String {
        match self.outcome {
            Outcome::Running => self.name.clone(),
            Outcome::Done => format!("✓ {}", self.name),
            Outcome::Failed => format!("✗ {}", self.name),
        }
    }

    fn counter(&self) -> String {
        let width = self.commands.to_string().len();
        format!("{:>width$}/{}", self.executed, self.commands)
    }

    fn show_on(&self, bar: &ProgressBar) {
        bar.set_length(self.commands as u64);
        bar.set_position(self.executed as u64);
        bar.set_message(self.counter());
        bar.set_prefix(self.label());
    }
}

/// Coordinates progress bars for a batch of scripts
///
/// A batch bar is added once there are more scripts than
/// [`MAX_INDIVIDUAL_PROGRESS_BARS`].
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    script_bars: Vec<ProgressBar>,
    /// Most recently started scripts, oldest first
    window: VecDeque<ScriptState>,
    commands_run: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            script_bars: Vec::new(),
            window: VecDeque::with_capacity(MAX_INDIVIDUAL_PROGRESS_BARS),
            commands_run: 0,
        }
    }

    /// Create the bars for a batch of `script_count` scripts
    pub fn initialize(&mut self, script_count: usize) {
        if script_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(script_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..script_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(SCRIPT_STYLE.clone());
            self.script_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Check whether the batch has its own summary bar
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Labels currently shown on the script bars, oldest first
    pub fn visible_scripts(&self) -> Vec<String> {
        self.window.iter().map(ScriptState::label).collect()
    }

    /// Total commands reported across all scripts
    pub const fn commands_run(&self) -> usize {
        self.commands_run
    }

    /// Give script `index` a bar for its `commands` commands
    ///
    /// The oldest script leaves the window when all bars are taken.
    pub fn start_script(&mut self, index: usize, path: &Path, commands: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        self.window.retain(|state| state.index != index);
        if self.window.len() >= MAX_INDIVIDUAL_PROGRESS_BARS {
            self.window.pop_front();
        }
        self.window.push_back(ScriptState {
            index,
            name,
            executed: 0,
            commands,
            outcome: Outcome::Running,
        });
        self.redraw();
    }

    /// Report that script `index` has executed `executed` commands
    ///
    /// Scripts that were never started or already left the window are
    /// ignored.
    pub fn update_step(&mut self, index: usize, executed: usize) {
        let Some(state) = self.state_mut(index) else {
            return;
        };
        let advanced = executed.saturating_sub(state.executed);
        state.executed = executed;
        self.commands_run += advanced;

        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.set_message(format!("{} commands", self.commands_run));
        }
        self.redraw();
    }

    /// Mark script `index` as finished after `elapsed`
    pub fn complete_script(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.state_mut(index) {
            debug!("{} completed in {elapsed:?}", state.name);
            state.executed = state.commands;
            state.outcome = Outcome::Done;
        }
        self.redraw();
    }

    /// Mark script `index` as failed, leaving its bar where it stopped
    pub fn fail_script(&mut self, index: usize) {
        if let Some(state) = self.state_mut(index) {
            state.outcome = Outcome::Failed;
        }
        self.redraw();
    }

    /// Close the batch bar and clear the display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message(format!("{} commands run", self.commands_run));
        }
        let _ = self.multi_progress.clear();
    }

    fn state_mut(&mut self, index: usize) -> Option<&mut ScriptState> {
        self.window.iter_mut().find(|state| state.index == index)
    }

    fn redraw(&self) {
        for (bar, state) in self.script_bars.iter().zip(&self.window) {
            state.show_on(bar);
        }
        for bar in self.script_bars.iter().skip(self.window.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
