use std::fmt;
use std::process::Output;

use crate::error::{OutputDisplay, ProbeError, ProbeResult};

/// Outputs of both compilation and running.
#[derive(Clone)]
pub struct CompileRunOutput {
    pub compile_output: Output,
    /// `None` exactly when compilation failed and nothing was run.
    pub run_output: Option<Output>,
}

impl CompileRunOutput {
    /// Standard output of a successful run, decoded as lossy UTF-8.
    ///
    /// A failed compilation or a non-zero exit is reported as the matching
    /// `ProbeError` with the full outputs attached.
    pub fn successful_run_output(&self) -> ProbeResult<String> {
        match &self.run_output {
            Some(run) if run.status.success() => {
                Ok(String::from_utf8_lossy(&run.stdout).into_owned())
            }
            Some(run) => Err(ProbeError::Run {
                compile: self.compile_output.clone(),
                run: run.clone(),
            }),
            None => Err(ProbeError::Compile(self.compile_output.clone())),
        }
    }
}

impl fmt::Debug for CompileRunOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CompileRunOutput {{ compile_output: {}, run_output: ",
            OutputDisplay(&self.compile_output)
        )?;
        match &self.run_output {
            Some(run) => write!(f, "{} }}", OutputDisplay(run)),
            None => f.write_str("None }"),
        }
    }
}
