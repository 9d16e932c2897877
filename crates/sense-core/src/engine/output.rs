//! Append-only record of every disambiguation call.
//!
//! One line per input token: the original token, the chosen word, and for
//! a resolved sense its part-of-speech code and sense index.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::Assignment;

pub(super) struct OutputLog {
    path: PathBuf,
    /// Kept open in append mode for the engine's lifetime.
    file: BufWriter<File>,
}

impl OutputLog {
    pub(super) fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: BufWriter::new(file),
        })
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }

    pub(super) fn record<S: AsRef<str>>(
        &mut self,
        raw: &[S],
        assignments: &[Assignment],
    ) -> io::Result<()> {
        for (original, assignment) in raw.iter().zip(assignments) {
            let original = original.as_ref();
            match assignment {
                Assignment::Sense(s) => writeln!(
                    self.file,
                    "{original} {} {} {}",
                    s.lemma,
                    s.pos.code(),
                    s.index
                )?,
                Assignment::Surface(word) => writeln!(self.file, "{original} {word}")?,
            }
        }
        self.file.flush()
    }
}
