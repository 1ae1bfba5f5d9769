use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

use crate::error::{NewProbeError, OutputDisplay, ProbeError};
use crate::output::CompileRunOutput;

#[cfg(unix)]
fn output(code: i32, stdout: &str, stderr: &str) -> Output {
    use std::os::unix::process::ExitStatusExt;
    Output {
        status: std::process::ExitStatus::from_raw(code << 8),
        stdout: stdout.as_bytes().to_vec(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

#[test]
fn new_probe_error_messages() {
    let error = NewProbeError::WorkDirNotADirectory(PathBuf::from("/tmp/foo.txt"));
    assert_eq!(error.to_string(), "/tmp/foo.txt is not a directory");

    let error = NewProbeError::WorkDirMetadataInaccessible(io::Error::from(io::ErrorKind::NotFound));
    assert!(error.to_string().starts_with("could not query metadata of work directory"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn io_errors_convert() {
    let error: ProbeError = io::Error::other("disk full").into();
    assert_eq!(error.to_string(), "I/O error: disk full");
}

#[cfg(unix)]
#[test]
fn output_display_is_lossy_text() {
    let out = output(1, "", "boom\n");
    assert_eq!(
        OutputDisplay(&out).to_string(),
        r#"{ status: exit status: 1, stdout: "", stderr: "boom\n" }"#
    );
}

#[cfg(unix)]
#[test]
fn run_error_displays_run_output() {
    let error = ProbeError::Run {
        compile: output(0, "", "warning: unused\n"),
        run: output(2, "", "segfault"),
    };
    let message = error.to_string();
    assert!(message.starts_with("probe program failed with output"));
    assert!(message.contains("segfault"));
    assert!(!message.contains("unused"));
    // Debug shows both for troubleshooting
    let debug = format!("{:?}", error);
    assert!(debug.contains("unused") && debug.contains("segfault"));
}

#[cfg(unix)]
#[test]
fn successful_run_output_classifies() {
    let ok = CompileRunOutput {
        compile_output: output(0, "", ""),
        run_output: Some(output(0, "42\n", "")),
    };
    assert_eq!(ok.successful_run_output().unwrap(), "42\n");

    let failed_run = CompileRunOutput {
        compile_output: output(0, "", ""),
        run_output: Some(output(1, "", "")),
    };
    assert!(matches!(
        failed_run.successful_run_output(),
        Err(ProbeError::Run { .. })
    ));

    let failed_compile = CompileRunOutput {
        compile_output: output(1, "", "error"),
        run_output: None,
    };
    assert!(matches!(
        failed_compile.successful_run_output(),
        Err(ProbeError::Compile(_))
    ));
    assert!(format!("{:?}", failed_compile).ends_with("run_output: None }"));
}

#[cfg(unix)]
#[test]
fn spawn_failure_is_not_a_compile_error() {
    let result = Command::new("/nonexistent/cprobe-cc").output();
    let error: ProbeError = result.unwrap_err().into();
    assert!(matches!(error, ProbeError::Io(_)));
}
