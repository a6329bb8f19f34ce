//! Running Gradle tasks in a freshly generated project

use crate::error::GradleError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// How long the process may linger after closing its output
const EXIT_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(windows)]
const WRAPPER: &str = "gradlew.bat";
#[cfg(not(windows))]
const WRAPPER: &str = "gradlew";

/// Runs Gradle inside a project directory, streaming its output
#[derive(Debug, Clone)]
pub struct GradleRunner {
    project_dir: PathBuf,
    command: PathBuf,
}

impl GradleRunner {
    /// Use the project's wrapper script when it has one, otherwise
    /// `gradle` from `PATH`
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let wrapper = project_dir.join(WRAPPER);
        let command = if wrapper.is_file() {
            wrapper
        } else {
            PathBuf::from("gradle")
        };
        Self {
            project_dir,
            command,
        }
    }

    /// Run an explicit program instead of Gradle
    pub fn with_command(project_dir: impl Into<PathBuf>, command: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            command: command.into(),
        }
    }

    pub fn command(&self) -> &Path {
        &self.command
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Run `tasks`, passing each output line to `log` as it arrives
    pub async fn run(&self, tasks: &[String], log: &mut dyn FnMut(&str)) -> Result<(), GradleError> {
        let command = self.command.display().to_string();
        tracing::info!(%command, ?tasks, dir = %self.project_dir.display(), "running gradle");
        log(&format!("Running: {} {}", command, tasks.join(" ")));

        let mut child = TokioCommand::new(&self.command)
            .args(tasks)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| GradleError::Spawn {
                command: command.clone(),
                source,
            })?;

        let mut stdout = child.stdout.take().map(|s| BufReader::new(s).lines());
        let mut stderr = child.stderr.take().map(|s| BufReader::new(s).lines());

        let mut stdout_open = stdout.is_some();
        let mut stderr_open = stderr.is_some();
        while stdout_open || stderr_open {
            tokio::select! {
                line = next_line(&mut stdout), if stdout_open => match line {
                    Some(line) => log(&line),
                    None => stdout_open = false,
                },
                line = next_line(&mut stderr), if stderr_open => match line {
                    Some(line) => log(&line),
                    None => stderr_open = false,
                },
            }
        }

        match timeout(EXIT_TIMEOUT, child.wait()).await {
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => Err(GradleError::Exit(status.code().unwrap_or(-1))),
            Ok(Err(source)) => Err(GradleError::Spawn { command, source }),
            Err(_) => {
                let _ = child.kill().await;
                Err(GradleError::Hung)
            }
        }
    }
}

/// Next line of a stream; `None` once it is closed or unreadable
async fn next_line<R>(reader: &mut Option<tokio::io::Lines<BufReader<R>>>) -> Option<String>
where
    R: tokio::io::AsyncRead + Unpin,
{
    match reader {
        Some(lines) => match lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "error reading gradle output");
                None
            }
        },
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_back_to_gradle_on_path() {
        let dir = tempfile::tempdir().unwrap();
        let runner = GradleRunner::new(dir.path());
        assert_eq!(runner.command(), Path::new("gradle"));
    }

    #[test]
    fn test_prefers_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(WRAPPER), "").unwrap();
        let runner = GradleRunner::new(dir.path());
        assert_eq!(runner.command(), dir.path().join(WRAPPER));
    }

    #[tokio::test]
    async fn test_missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let runner = GradleRunner::with_command(dir.path(), "liftoff-no-such-program");
        let err = runner.run(&[], &mut |_| {}).await.unwrap_err();
        assert!(matches!(err, GradleError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_output_is_streamed() {
        let dir = tempfile::tempdir().unwrap();
        let runner = GradleRunner::with_command(dir.path(), "sh");
        let mut lines = Vec::new();
        runner
            .run(
                &["-c".to_string(), "echo one; echo two >&2".to_string()],
                &mut |line| lines.push(line.to_string()),
            )
            .await
            .unwrap();
        assert!(lines.contains(&"one".to_string()));
        assert!(lines.contains(&"two".to_string()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let runner = GradleRunner::with_command(dir.path(), "sh");
        let err = runner
            .run(&["-c".to_string(), "exit 3".to_string()], &mut |_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, GradleError::Exit(3)));
    }
}
