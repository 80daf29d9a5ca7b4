//! Benchmark command implementation
//!
//! Resolves settings, runs the configuration phase and the framework phase
//! concurrently, then hands the measured records to a reporter.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{BenchSettings, BuilderSettings, ConfigLoader, Overrides};
use crate::error::BenchError;
use crate::fmt::{CHART, CROSSMARK, HAMMER, SPARKLES, WARNING};
use crate::infra::{CommandExecutor, FileSystem, RealCommandExecutor, RealFileSystem};
use crate::pipeline::{
    output_dir_conflict, partition_outcomes, reset_output_dir, Builder, FrameworkLoader, PatternCssStats,
    PipelineError, PipelineRunner, StatsRecord,
};
use crate::report::{JsonReport, TableReporter};
use crate::tools::{BuildTool, ToolStatus};

/// Inputs of one benchmark run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory holding one build configuration per file
    pub config_dir: PathBuf,
    /// Stylesheet passed to every build
    pub css_path: PathBuf,
    /// Optional `.css-bench.toml`
    pub config_file: PathBuf,
    /// Command-line values overriding the config file
    pub overrides: Overrides,
    /// Print JSON instead of the table
    pub json: bool,
}

/// What a run produced, in report order
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Measured items: configurations first, then frameworks
    pub records: Vec<StatsRecord>,
    /// Items excluded from the report
    pub failures: Vec<(String, PipelineError)>,
}

impl RunSummary {
    /// Whether any item failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Main benchmark command handler
///
/// Item failures are printed and summarized but do not fail the command.
///
/// # Examples
///
/// ```no_run
/// use css_bench::cmd::run::{cmd_run, RunOptions};
/// use css_bench::config::Overrides;
/// use std::path::PathBuf;
///
/// let summary = cmd_run(&RunOptions {
///     config_dir: PathBuf::from("tailwind-configs"),
///     css_path: PathBuf::from("src/tailwind.css"),
///     config_file: PathBuf::from(".css-bench.toml"),
///     overrides: Overrides::default(),
///     json: false,
/// })?;
/// println!("{} rows", summary.records.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_run(options: &RunOptions) -> Result<RunSummary> {
    let file = ConfigLoader::load(&options.config_file)
        .map_err(|e| BenchError::InvalidConfig(format!("{e:#}")))?;
    let settings = BenchSettings::resolve(file, options.overrides.clone());

    check_build_tool(&settings.builder);

    eprintln!("{} Calculating...", HAMMER);
    let progress = stderr_progress();
    let summary = run_benchmark(
        &options.config_dir,
        &options.css_path,
        &settings,
        RealCommandExecutor,
        progress.clone(),
    )?;
    progress.finish_and_clear();

    present_failures(&summary.failures);
    if options.json {
        let report = JsonReport::new(&summary.records, &summary.failures);
        println!("{}", report.render().context("Failed to serialize report")?);
    } else {
        println!();
        TableReporter::display(&summary.records);
        present_failure_summary(&summary.failures);
    }
    eprintln!("{} Finished.", SPARKLES);

    Ok(summary)
}

/// Run both phases with a given command executor and collect the outcomes
///
/// The output directory is reset once before either phase starts, unless
/// doing so would delete one of the run's inputs or the working directory.
/// Records of the configuration phase precede those of the framework phase.
/// A framework named like a configuration fails instead of sharing its
/// artifacts.
///
/// # Errors
///
/// Fails only when the run cannot start or the configuration directory cannot
/// be listed; per-item errors end up in [`RunSummary::failures`].
pub fn run_benchmark<CE>(
    config_dir: &Path,
    css_path: &Path,
    settings: &BenchSettings,
    cmd_executor: CE,
    progress: ProgressBar,
) -> Result<RunSummary>
where
    CE: CommandExecutor + Sync,
{
    let fs = RealFileSystem;
    validate_inputs(&fs, config_dir, css_path)?;
    guard_output_dir(&settings.out_dir, &[config_dir, css_path, settings.modules_dir.as_path()])?;

    reset_output_dir(&fs, &settings.out_dir).map_err(|e| match e {
        PipelineError::Io { path, source } => BenchError::OutputDir { path, source },
        other => BenchError::Pipeline(other),
    })?;

    let builder = Builder::with_executor(&settings.builder, cmd_executor);
    let runner = PipelineRunner::new(&settings.out_dir, builder, fs, PatternCssStats)
        .with_progress(progress.clone());
    let configs = runner.list_configs(config_dir).map_err(BenchError::Pipeline)?;
    let mut reserved = HashMap::new();
    for config in &configs {
        reserved
            .entry(config.name.clone())
            .or_insert_with(|| config.file_name());
    }
    let frameworks = FrameworkLoader::new(
        settings.frameworks.clone(),
        &settings.modules_dir,
        &settings.out_dir,
        fs,
    )
    .with_reserved_names(reserved)
    .with_progress(progress);

    let (built, external) = rayon::join(
        || runner.run_configs(&configs, css_path),
        || frameworks.run(),
    );

    let (records, failures) = partition_outcomes(built.into_iter().chain(external));
    log::info!(
        "measured {} items, {} failed",
        records.len(),
        failures.len()
    );

    Ok(RunSummary { records, failures })
}

fn validate_inputs<FS: FileSystem>(fs: &FS, config_dir: &Path, css_path: &Path) -> Result<(), BenchError> {
    if !fs.metadata(config_dir).is_ok_and(|m| m.is_dir()) {
        return Err(BenchError::ConfigDirNotFound {
            path: config_dir.to_path_buf(),
        });
    }
    if !fs.metadata(css_path).is_ok_and(|m| m.is_file()) {
        return Err(BenchError::SourceCssNotFound {
            path: css_path.to_path_buf(),
        });
    }
    Ok(())
}

/// Refuse an output directory that is, or contains, an input or the cwd
fn guard_output_dir(out_dir: &Path, inputs: &[&Path]) -> Result<(), BenchError> {
    let cant_check = |source: std::io::Error| BenchError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    };
    let cwd = std::env::current_dir().map_err(cant_check)?;
    let mut protected = inputs.to_vec();
    protected.push(&cwd);

    match output_dir_conflict(out_dir, &protected).map_err(cant_check)? {
        Some(path) => Err(BenchError::UnsafeOutputDir {
            path: out_dir.to_path_buf(),
            protected: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}

/// Warn once up front instead of once per configuration
fn check_build_tool(builder: &BuilderSettings) {
    let tool = BuildTool::new(builder);
    let program = &tool.program;
    match tool.check() {
        ToolStatus::Available(banner) => log::info!("using {}: {banner}", tool.display_name()),
        ToolStatus::InstalledWithoutBanner => log::info!("using {}", tool.display_name()),
        ToolStatus::Missing => {
            log::warn!("build tool {program} not found on PATH");
            eprintln!(
                "{} {} not found; every configuration will fail to build",
                WARNING,
                style(program).bold()
            );
        }
    }
}

fn stderr_progress() -> ProgressBar {
    let progress = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
    if let Ok(bar_style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {elapsed}") {
        progress.set_style(bar_style.progress_chars("=>-"));
    }
    progress
}

/// One stderr line per failed item; `Io` messages already embed their cause
fn present_failures(failures: &[(String, PipelineError)]) {
    for (label, error) in failures {
        eprintln!("{} {}: {}", CROSSMARK, style(label).bold(), error);
    }
}

fn present_failure_summary(failures: &[(String, PipelineError)]) {
    if let Some(line) = failure_summary(failures) {
        println!();
        println!("{line}");
    }
}

fn failure_summary(failures: &[(String, PipelineError)]) -> Option<String> {
    if failures.is_empty() {
        return None;
    }
    let labels: Vec<&str> = failures.iter().map(|(label, _)| label.as_str()).collect();
    Some(format!(
        "{} {} item(s) failed and were left out: {}",
        CHART,
        failures.len(),
        style(labels.join(", ")).yellow()
    ))
}
