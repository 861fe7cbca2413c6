//! Command-line interface.

use clap::Parser;
use tracing::{debug, warn};

use crate::core::env::Environment;
use crate::core::{launch, resolve};
use crate::error::Result;

/// Fileenv - launch a program with secrets materialized from files.
#[derive(Parser)]
#[command(
    name = "fileenv",
    about = "Resolve *_FILE environment variables from files, then exec a program",
    version
)]
pub struct Cli {
    /// Print a trace line for each file opened and each variable set
    #[arg(long)]
    pub debug: bool,

    /// Exit immediately with status 1 on the first warning
    #[arg(long)]
    pub fail: bool,

    /// Program to run, followed by its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "PROGRAM"
    )]
    pub command: Vec<String>,
}

/// Drive the resolve-and-launch pipeline.
///
/// Scans the captured environment for secret-file bindings, resolves
/// each one in key order, stages the derived variables, and finally
/// launches the target program. Resolution and staging failures are
/// warnings: reported and skipped by default, fatal under `--fail`.
///
/// Returns the exit code the process should terminate with.
pub fn execute(cli: &Cli) -> Result<i32> {
    let mut env = Environment::capture();

    for binding in env.bindings() {
        debug!("{}: opening {}", binding.source_key, binding.path);

        let value = match resolve::resolve(&binding) {
            Ok(value) => value,
            Err(err) => {
                warn!("{err}");
                if cli.fail {
                    return Ok(1);
                }
                continue;
            }
        };

        debug!("setting {}={:?}", binding.derived_key, value);

        if let Err(err) = env.set(&binding.derived_key, &value) {
            warn!("{err}");
            if cli.fail {
                return Ok(1);
            }
        }
    }

    launch::launch(&cli.command[0], &cli.command[1..], &env)
}
