//!
//! The `git` command line client.
//!

use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use super::RevisionControl;

///
/// The `git` command line client.
///
#[derive(Debug, Clone)]
pub struct Git {
    /// The executable name.
    pub executable: String,
    /// The working tree to operate on. Defaults to the process working directory.
    pub directory: Option<PathBuf>,
}

impl Git {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "git";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(directory: Option<PathBuf>) -> anyhow::Result<Self> {
        let executable = Self::DEFAULT_EXECUTABLE_NAME.to_owned();
        if let Err(error) = which::which(executable.as_str()) {
            anyhow::bail!("The `{executable}` executable not found in ${{PATH}}: {error}");
        }
        Ok(Self {
            executable,
            directory,
        })
    }

    ///
    /// Runs `git` with `arguments`, capturing its output regardless of the exit status.
    ///
    fn output(&self, arguments: &[&str]) -> anyhow::Result<Output> {
        let mut command = Command::new(self.executable.as_str());
        if let Some(directory) = self.directory.as_ref() {
            command.current_dir(directory);
        }
        command.args(arguments);
        command.output().map_err(|error| {
            anyhow::anyhow!("{} subprocess spawning error: {:?}", self.executable, error)
        })
    }

    ///
    /// Runs `git` with `arguments` and returns its trimmed `stdout`, failing on a non-zero exit.
    ///
    fn capture(&self, arguments: &[&str]) -> anyhow::Result<String> {
        let output = self.output(arguments)?;
        if !output.status.success() {
            anyhow::bail!(
                "{} {} error: {}",
                self.executable,
                arguments.join(" "),
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            );
        }
        Ok(String::from_utf8_lossy(output.stdout.as_slice())
            .trim()
            .to_owned())
    }
}

impl RevisionControl for Git {
    fn current_revision(&self) -> anyhow::Result<String> {
        self.capture(&["rev-parse", "HEAD"])
    }

    fn parent_revision(&self, reference: &str) -> anyhow::Result<String> {
        self.capture(&["rev-parse", format!("{reference}~").as_str()])
    }

    fn shorten(&self, reference: &str) -> anyhow::Result<String> {
        // Unresolvable names are returned as is and rejected by validation.
        match self.capture(&["rev-parse", "--short", reference]) {
            Ok(short) if !short.is_empty() => Ok(short),
            _ => Ok(reference.to_owned()),
        }
    }

    fn is_valid(&self, reference: &str) -> anyhow::Result<bool> {
        let output = self.output(&[
            "rev-parse",
            "--quiet",
            "--verify",
            format!("{reference}^{{commit}}").as_str(),
        ])?;
        Ok(output.status.success())
    }

    fn current_symbolic_ref(&self) -> anyhow::Result<Option<String>> {
        let output = self.output(&["symbolic-ref", "--quiet", "--short", "HEAD"])?;
        match output.status.code() {
            Some(0) => Ok(Some(
                String::from_utf8_lossy(output.stdout.as_slice())
                    .trim()
                    .to_owned(),
            )),
            Some(1) => Ok(None),
            _ => anyhow::bail!(
                "{} symbolic-ref error: {}",
                self.executable,
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            ),
        }
    }

    fn checkout(&self, reference: &str, post_checkout: Option<&str>) -> anyhow::Result<()> {
        self.capture(&["checkout", "--quiet", reference])?;

        let Some(post_checkout) = post_checkout else {
            return Ok(());
        };
        let mut command = Command::new("sh");
        if let Some(directory) = self.directory.as_ref() {
            command.current_dir(directory);
        }
        let output = command
            .arg("-c")
            .arg(post_checkout)
            .output()
            .map_err(|error| {
                anyhow::anyhow!("post-checkout `{post_checkout}` spawning error: {error:?}")
            })?;
        if !output.status.success() {
            anyhow::bail!(
                "post-checkout `{post_checkout}` error ({}): {}",
                output.status,
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            );
        }
        Ok(())
    }
}
