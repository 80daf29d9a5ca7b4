use clap::Parser;
use css_bench::cmd::{self, RunOptions};
use css_bench::config::{Overrides, CONFIG_FILE_NAME};
use std::path::PathBuf;
use std::process;

/// CSS framework build benchmark
///
/// Builds a stylesheet with every framework configuration in CONFIG_DIR,
/// minifies and compresses each result, and compares sizes and structure
/// against pre-built external frameworks.
#[derive(Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Directory with one build configuration file per variant
    #[arg(value_name = "CONFIG_DIR")]
    config_dir: PathBuf,

    /// Source stylesheet passed to every build
    #[arg(value_name = "CSS_PATH")]
    css_path: PathBuf,

    /// Output directory (deleted and recreated on every run) [default: output]
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Build tool executable, replacing the configured invocation [default: tailwindcss]
    #[arg(short, long, value_name = "PROGRAM")]
    builder: Option<String>,

    /// Optional configuration file
    #[arg(short = 'c', long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    config_file: PathBuf,

    /// Directory external framework paths are resolved against [default: node_modules]
    #[arg(long, value_name = "DIR")]
    modules_dir: Option<PathBuf>,

    /// Do not compare against external frameworks
    #[arg(long)]
    skip_frameworks: bool,

    /// Output as JSON (for CI/CD integration)
    #[arg(long)]
    json: bool,

    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long)]
    no_emoji: bool,
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let options = RunOptions {
        config_dir: cli.config_dir,
        css_path: cli.css_path,
        config_file: cli.config_file,
        overrides: Overrides {
            out_dir: cli.out_dir,
            modules_dir: cli.modules_dir,
            builder_program: cli.builder,
            skip_frameworks: cli.skip_frameworks,
        },
        json: cli.json,
    };

    if let Err(e) = cmd::cmd_run(&options) {
        use css_bench::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
