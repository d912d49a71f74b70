//! Badging-dump tool invocation

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured output of one badging-dump invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpOutput {
    /// Standard output, decoded with undecodable bytes dropped
    pub text: String,
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl DumpOutput {
    /// Output of a run that exited successfully
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: Some(0),
        }
    }

    /// Decode raw stdout bytes, dropping anything that is not valid UTF-8
    pub fn from_raw(stdout: &[u8], exit_code: Option<i32>) -> Self {
        let text = String::from_utf8_lossy(stdout)
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect();
        Self { text, exit_code }
    }

    /// Whether the tool reported success
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Source of badging text for a package file
///
/// Implemented by [`AaptDumpTool`] for real runs; tests substitute stubs.
pub trait DumpTool {
    /// Produce the badging dump for `package`
    ///
    /// An `Err` means the tool could not be run at all. A run that exits
    /// with a failure status still returns `Ok` with whatever it printed.
    fn dump_badging(&self, package: &Path) -> io::Result<DumpOutput>;
}

/// Runs `<tool> dump badging <package>` as a subprocess
#[derive(Debug, Clone)]
pub struct AaptDumpTool {
    executable: PathBuf,
}

impl AaptDumpTool {
    /// Create an invoker for the executable at `executable`
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl DumpTool for AaptDumpTool {
    fn dump_badging(&self, package: &Path) -> io::Result<DumpOutput> {
        tracing::debug!(
            "Running {} dump badging {}",
            self.executable.display(),
            package.display()
        );

        let output = Command::new(&self.executable)
            .arg("dump")
            .arg("badging")
            .arg(package)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        Ok(DumpOutput::from_raw(&output.stdout, output.status.code()))
    }
}

impl<T: DumpTool + ?Sized> DumpTool for &T {
    fn dump_badging(&self, package: &Path) -> io::Result<DumpOutput> {
        (**self).dump_badging(package)
    }
}

impl<T: DumpTool + ?Sized> DumpTool for Box<T> {
    fn dump_badging(&self, package: &Path) -> io::Result<DumpOutput> {
        (**self).dump_badging(package)
    }
}
