//! External command execution.
//!
//! Every external program ngr talks to goes through [`execute`]. Each of the
//! child's output streams is either captured into memory or inherited from
//! the current process, as described by [`StdioMode`].

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::error::{CommandFailure, NgrError, Result};

/// Result of [`execute`].
pub type ExecuteResult = std::result::Result<ExecutionResult, CommandFailure>;

/// Exit code when interrupted by Ctrl+C (SIGINT).
/// On Unix, this is 128 + signal number (SIGINT = 2).
pub const EXIT_CODE_INTERRUPTED: i32 = 130;

/// How a child's output stream is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the current process's handle, so output appears live.
    Inherit,
    /// Collect the stream into memory.
    Capture,
}

impl StdioMode {
    fn to_stdio(self) -> Stdio {
        match self {
            StdioMode::Inherit => Stdio::inherit(),
            StdioMode::Capture => Stdio::piped(),
        }
    }
}

/// A program together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Render the command line for display, quoting where a shell would need it.
    pub fn display(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(self.args.iter()))
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Everything observed from a finished child process.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the process.
    pub status: ExitStatus,
    /// Captured standard output, empty when inherited.
    pub stdout: String,
    /// Captured standard error, empty when inherited.
    pub stderr: String,
}

impl ExecutionResult {
    /// Check if the execution was successful.
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run a command to completion.
///
/// Standard input is inherited unless `input` is given, in which case it is
/// written to the child and the pipe closed before waiting. A child that
/// exits without reading all of its input still reports its own status.
///
/// # Errors
///
/// Returns [`CommandFailure::Spawn`] if the process cannot be started and
/// [`CommandFailure::Io`] if feeding or waiting on it fails.
pub fn execute(
    line: &CommandLine,
    input: Option<&str>,
    stdout: StdioMode,
    stderr: StdioMode,
) -> ExecuteResult {
    debug!("spawning `{}`", line.display());

    let mut command = line.to_command();
    command.stdin(if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    command.stdout(stdout.to_stdio());
    command.stderr(stderr.to_stdio());

    let mut child = command.spawn().map_err(CommandFailure::Spawn)?;

    if let Some(input) = input {
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(input.as_bytes()) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("`{}` closed its input early", line.display());
                }
                Err(err) => {
                    // Reap the child before reporting.
                    drop(stdin);
                    let _ = child.wait();
                    return Err(CommandFailure::Io(err));
                }
            }
        }
    }

    let output = child.wait_with_output().map_err(CommandFailure::Io)?;
    debug!("`{}` finished with {}", line.display(), output.status);

    Ok(ExecutionResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run a command, capturing both output streams, and return its standard
/// output with one trailing newline removed.
///
/// # Errors
///
/// Returns [`NgrError::CommandExecution`] if the command cannot be started
/// or exits unsuccessfully.
pub fn capture_output(line: &CommandLine) -> Result<String> {
    let result = execute(line, None, StdioMode::Capture, StdioMode::Capture).map_err(|cause| {
        NgrError::CommandExecution {
            command: line.display(),
            cause,
            stderr: String::new(),
        }
    })?;

    if !result.success() {
        return Err(NgrError::CommandExecution {
            command: line.display(),
            cause: CommandFailure::Exit(result.status),
            stderr: result.stderr,
        });
    }

    Ok(strip_trailing_newline(result.stdout))
}

/// Remove a single trailing newline (`\n` or `\r\n`).
pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
