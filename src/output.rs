use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use atomic_write_file::AtomicWriteFile;

/// Where rendered configuration is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "standard output"),
            Self::File(path) => write!(f, "`{}`", path.display()),
        }
    }
}

impl Destination {
    /// Write `rendered` in full.
    ///
    /// Files are replaced atomically: the previous contents stay in place
    /// until the new text has been written and flushed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from opening, writing, flushing or committing.
    pub fn write(&self, rendered: &str) -> io::Result<()> {
        match self {
            Self::Stdout => write_buffered(io::stdout().lock(), rendered),
            Self::File(path) => {
                let mut file = AtomicWriteFile::open(path)?;
                file.write_all(rendered.as_bytes())?;
                file.commit()
            }
        }?;
        log::info!("wrote {} byte(s) to {self}", rendered.len());
        Ok(())
    }
}

/// Write `rendered` through a buffer and flush it.
///
/// # Errors
///
/// Returns any I/O error from writing or flushing.
pub fn write_buffered<W: Write>(writer: W, rendered: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()
}
