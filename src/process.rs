//! External command invocation

use crate::error::{ChartGenError, ChartGenResult};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::debug;

/// A fully resolved external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub workdir: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, workdir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            workdir: workdir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    /// Human readable exit status
    pub status: String,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Fail unless the command exited successfully
    pub fn check(self, spec: &CommandSpec) -> ChartGenResult<Self> {
        if self.success {
            return Ok(self);
        }
        Err(ChartGenError::CommandFailed {
            command: spec.to_string(),
            status: self.status.clone(),
            stderr: String::from_utf8_lossy(&self.stderr).trim().to_string(),
        })
    }

    /// Standard output decoded as UTF-8
    pub fn stdout_utf8(self, spec: &CommandSpec) -> ChartGenResult<String> {
        String::from_utf8(self.stdout).map_err(|_| ChartGenError::InvalidOutput {
            command: spec.to_string(),
        })
    }
}

/// Runs external commands to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> ChartGenResult<CommandOutput>;
}

/// Runs commands as child processes of this one
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, spec: &CommandSpec) -> ChartGenResult<CommandOutput> {
        debug!("Running `{}` in {:?}", spec, spec.workdir);

        let output = tokio::process::Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.workdir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ChartGenError::CommandUnavailable {
                command: spec.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let spec = CommandSpec::new("make", Path::new("."))
            .args(["-s", "print-manifests"])
            .arg("IMG=controller:0.0.1");
        assert_eq!(spec.to_string(), "make -s print-manifests IMG=controller:0.0.1");
    }

    #[test]
    fn test_failed_output_is_checked() {
        let spec = CommandSpec::new("helm", Path::new("."));
        let output = CommandOutput {
            success: false,
            status: "exit status: 1".to_string(),
            stdout: Vec::new(),
            stderr: b"Error: chart not found\n".to_vec(),
        };

        match output.check(&spec).unwrap_err() {
            ChartGenError::CommandFailed { stderr, .. } => {
                assert_eq!(stderr, "Error: chart not found")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_utf8_stdout_is_rejected() {
        let spec = CommandSpec::new("make", Path::new("."));
        let output = CommandOutput {
            success: true,
            stdout: vec![0xff, 0xfe],
            ..CommandOutput::default()
        };
        assert!(matches!(
            output.stdout_utf8(&spec),
            Err(ChartGenError::InvalidOutput { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let spec = CommandSpec::new("helm-chart-gen-no-such-program", Path::new("."));
        let err = SystemCommandRunner.run(&spec).await.unwrap_err();
        assert!(matches!(err, ChartGenError::CommandUnavailable { .. }));
    }
}
