use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;

use super::CodepointTable;
use super::MAGIC;
use super::VERSION;
use crate::Error;

impl CodepointTable {
    /// Writes the table to `path` replacing any existing file.
    ///
    /// The data goes to a temporary file in the same directory first, the destination is never
    /// left half-written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        self.write(BufWriter::new(file.as_file_mut()))?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        log::debug!("Wrote {} codepoints to {}", self.len(), path.display());
        Ok(())
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut writer = GzEncoder::new(writer, Compression::default());
        let num_records: u32 = self
            .len()
            .try_into()
            .map_err(|_| Error::Table("too many records".into()))?;
        writer.write_all(&MAGIC[..])?;
        writer.write_all(&[VERSION])?;
        writer.write_all(&num_records.to_le_bytes()[..])?;
        for record in self.records() {
            writer.write_all(&record.codepoint.to_le_bytes()[..])?;
            writer.write_all(&record.category.to_bytes()[..])?;
        }
        let mut writer = writer.finish()?;
        writer.flush()?;
        Ok(())
    }
}
