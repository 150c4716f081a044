use anyhow::Context;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{CommandError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        match env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOS,
            _ => Platform::Linux,
        }
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs programs with a fixed working directory.
#[derive(Debug, Clone)]
pub struct Shell {
    working_dir: PathBuf,
    platform: Platform,
}

impl Shell {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self::for_platform(working_dir, Platform::current())
    }

    pub fn for_platform(working_dir: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            working_dir: working_dir.into(),
            platform,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Run `program` and fail unless it exits with status 0.
    pub fn run<S: AsRef<str>>(&self, program: &str, args: &[S]) -> Result<ShellOutput> {
        let output = self.run_unchecked(program, args)?;
        if output.success() {
            return Ok(output);
        }

        let code = output.status.unwrap_or(-1);
        tracing::warn!(program = program, status = code, "Process failed");
        let stderr = output.stderr.trim();
        let cause = if stderr.is_empty() {
            anyhow::anyhow!("no output on stderr")
        } else {
            anyhow::anyhow!("{stderr}")
        };
        Err(
            CommandError::with_source(format!("`{program}` exited with status {code}"), cause)
                .with_exit_code(code),
        )
    }

    /// Run `program` and return its output whatever the exit status.
    ///
    /// Only a failure to locate or spawn the process is an error.
    pub fn run_unchecked<S: AsRef<str>>(&self, program: &str, args: &[S]) -> Result<ShellOutput> {
        let (command, command_args) = self
            .command_for(program, args)
            .map_err(|err| CommandError::with_source(format!("Couldn't run `{program}`"), err))?;

        crate::logging::log_shell_command(&command, &self.working_dir);

        let output = Command::new(&command)
            .args(&command_args)
            .current_dir(&self.working_dir)
            .output()
            .with_context(|| format!("Failed to execute command: {command}"))
            .map_err(|err| CommandError::with_source(format!("Couldn't run `{program}`"), err))?;

        Ok(ShellOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Resolve `program` to an executable and the arguments to launch it with.
    ///
    /// Batch scripts on Windows go through `cmd.exe /c`.
    pub fn command_for<S: AsRef<str>>(
        &self,
        program: &str,
        args: &[S],
    ) -> anyhow::Result<(String, Vec<String>)> {
        let program = normalize_path(program, self.platform);
        let resolved = which::which_in(&program, env::var_os("PATH"), &self.working_dir)
            .with_context(|| format!("Could not find `{program}` in PATH"))?;

        let mut command_args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        let resolved_str = resolved.to_string_lossy().to_string();

        if self.platform == Platform::Windows && is_batch_script(&resolved) {
            let mut final_args = vec!["/c".to_string(), resolved_str];
            final_args.append(&mut command_args);
            return Ok(("cmd.exe".to_string(), final_args));
        }

        Ok((resolved_str, command_args))
    }
}

fn is_batch_script(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("cmd") || ext.eq_ignore_ascii_case("bat"))
        .unwrap_or(false)
}

pub fn normalize_path(path: &str, platform: Platform) -> String {
    match platform {
        Platform::Windows => path.replace('/', "\\"),
        Platform::MacOS | Platform::Linux => path.replace('\\', "/"),
    }
}
