//! Child process execution and termination-status mapping.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::{debug, error};

use crate::core::env::Environment;
use crate::error::{Error, Result};

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exited normally with a code
    Exited(i32),
    /// Killed by a signal
    Signaled(i32),
    /// The platform reported neither a code nor a signal
    Unknown,
}

impl Termination {
    /// Map a termination to the launcher's own exit code.
    ///
    /// Signals use the POSIX shell convention of `128 + signal`. An
    /// undecodable status must not look like success, so `Unknown`
    /// maps to 1.
    pub fn exit_code(self) -> i32 {
        match self {
            Termination::Exited(code) => code,
            Termination::Signaled(signal) => 128 + signal,
            Termination::Unknown => 1,
        }
    }
}

#[cfg(unix)]
fn decode(status: ExitStatus) -> Termination {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => Termination::Exited(code),
        (None, Some(signal)) => Termination::Signaled(signal),
        (None, None) => Termination::Unknown,
    }
}

#[cfg(not(unix))]
fn decode(status: ExitStatus) -> Termination {
    match status.code() {
        Some(code) => Termination::Exited(code),
        None => Termination::Unknown,
    }
}

/// Spawn `program` with the environment's overrides applied and block
/// until it terminates.
///
/// The three standard streams are inherited directly, so interactive
/// child behavior is untouched. The program identifier is resolved
/// through the platform search path first; if that lookup fails the
/// error is reported and the original identifier is still handed to
/// the spawn call, which then decides the outcome.
///
/// # Errors
///
/// Returns `Spawn` when the child cannot be started at all.
pub fn launch(program: &str, args: &[String], env: &Environment) -> Result<i32> {
    let resolved = match which::which(program) {
        Ok(path) => path,
        Err(source) => {
            error!(
                "{}",
                Error::Lookup {
                    program: program.to_string(),
                    source,
                }
            );
            PathBuf::from(program)
        }
    };

    debug!("spawning {}", resolved.display());

    let status = Command::new(&resolved)
        .args(args)
        .envs(env.overrides())
        .status()
        .map_err(Error::Spawn)?;

    Ok(decode(status).exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(Termination::Exited(0).exit_code(), 0);
        assert_eq!(Termination::Exited(42).exit_code(), 42);
        assert_eq!(Termination::Signaled(9).exit_code(), 137);
        assert_eq!(Termination::Signaled(15).exit_code(), 143);
        assert_eq!(Termination::Unknown.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_decode_wait_status() {
        use std::os::unix::process::ExitStatusExt;

        // exit code lives in the high byte of a raw wait status
        let exited = ExitStatus::from_raw(7 << 8);
        assert_eq!(decode(exited), Termination::Exited(7));

        // a raw status equal to the signal number means "killed by it"
        let signaled = ExitStatus::from_raw(15);
        assert_eq!(decode(signaled), Termination::Signaled(15));
    }
}
