//! Errors raised while constructing or running probes.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Output;

/// Result of a compile or run command.
///
/// `Err` means the command could not be started at all (typically
/// `NotFound` or `PermissionDenied`). `Ok` carries the exit status along with
/// the captured stdout and stderr.
pub type CommandResult = io::Result<Output>;

/// Errors that can occur during probe construction.
#[derive(Debug, thiserror::Error)]
pub enum NewProbeError {
    /// `fs::metadata` failed on the work directory.
    #[error("could not query metadata of work directory: {0}")]
    WorkDirMetadataInaccessible(#[source] io::Error),

    /// The work directory path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    WorkDirNotADirectory(PathBuf),
}

/// Errors from a probe program that failed to compile, run, or answer.
#[derive(thiserror::Error)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("compilation failed with output: {}", OutputDisplay(.0))]
    Compile(Output),

    /// The compile output is kept to help debugging.
    #[error("probe program failed with output: {}", OutputDisplay(.run))]
    Run { compile: Output, run: Output },

    /// Rejected before any source was generated.
    #[error("not a C identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("unexpected output from probe program (expected {expected}): {output:?}")]
    UnexpectedOutput {
        output: String,
        expected: &'static str,
    },

    /// The C type has no Rust primitive of the same representation.
    #[error("no Rust primitive matches C type `{0}`")]
    Unrepresentable(String),
}

impl fmt::Debug for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Io(error) => write!(f, "Io({:?})", error),
            ProbeError::Compile(output) => write!(f, "Compile{}", OutputDisplay(output)),
            ProbeError::Run { compile, run } => write!(
                f,
                "Run {{ compile: {}, run: {} }}",
                OutputDisplay(compile),
                OutputDisplay(run)
            ),
            ProbeError::InvalidIdentifier(token) => write!(f, "InvalidIdentifier({:?})", token),
            ProbeError::UnexpectedOutput { output, expected } => write!(
                f,
                "UnexpectedOutput {{ output: {:?}, expected: {} }}",
                output, expected
            ),
            ProbeError::Unrepresentable(c_type) => write!(f, "Unrepresentable({:?})", c_type),
        }
    }
}

/// Result type from the probing operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Renders a process `Output` with stdout/stderr decoded as lossy UTF-8.
pub struct OutputDisplay<'a>(pub &'a Output);

impl fmt::Display for OutputDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ status: {}, stdout: {:?}, stderr: {:?} }}",
            self.0.status,
            String::from_utf8_lossy(&self.0.stdout),
            String::from_utf8_lossy(&self.0.stderr)
        )
    }
}
