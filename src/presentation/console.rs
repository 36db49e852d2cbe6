use std::io::{self, Write};
use std::path::Path;

use crate::application::services::BatchSummary;
use crate::domain::CompletedJob;

/// Plain-text run report written to stdout by the binary.
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, url: &str, workers: usize, files: usize, out_dir: &Path) -> io::Result<()> {
        writeln!(self.out, "URL    : {}", url)?;
        writeln!(self.out, "Workers: {}", workers)?;
        writeln!(self.out, "Files  : {}", files)?;
        writeln!(self.out, "Out Dir: {}", out_dir.display())
    }

    pub fn job(&mut self, completed: &CompletedJob) -> io::Result<()> {
        writeln!(self.out, "{}", completed.report_line())
    }

    pub fn summary(&mut self, summary: &BatchSummary) -> io::Result<()> {
        if summary.is_success() {
            writeln!(self.out, "DONE")
        } else {
            writeln!(self.out, "Failed {}", summary.failures)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
