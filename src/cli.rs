//! CLI argument parsing and execution

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use clone_cache::classify;
use clone_cache::pipeline;

/// Cache git metadata from local checkouts and emit insteadOf rewrites
#[derive(Parser, Debug)]
#[command(name = "clone-cache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The base directory which contains the git checkouts you want to cache
    #[arg(long, value_name = "PATH", value_parser = empty_ok_path())]
    basedir: PathBuf,

    /// The directory which to cache git metadata into
    #[arg(long, value_name = "PATH", value_parser = empty_ok_path())]
    cache: PathBuf,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the scan/backup/rewrite pipeline and print the config text.
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        // clap guarantees presence; explicitly empty values are still a
        // usage error and must not trigger any filesystem work.
        if self.basedir.as_os_str().is_empty() {
            anyhow::bail!("You must supply a search directory.");
        }
        if self.cache.as_os_str().is_empty() {
            anyhow::bail!("You must supply a cache directory.");
        }

        let report = pipeline::run(&self.basedir, &self.cache, classify::DEFAULT_MARKER)?;

        let output = report.config_output();
        if !output.is_empty() {
            println!("{}", output);
        }
        Ok(())
    }
}

/// Clap's default `PathBuf` parser rejects empty values as a usage error
/// (exit 2); empty values must instead reach `execute` so they fail as a
/// general error (exit 1) without filesystem side effects.
fn empty_ok_path() -> impl clap::builder::TypedValueParser<Value = PathBuf> {
    use clap::builder::TypedValueParser as _;
    clap::builder::OsStringValueParser::new().map(PathBuf::from)
}

fn init_logging(level: &str) {
    // RUST_LOG still wins when set; repeated init in tests is a no-op.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}
