use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use fs_err::File;

use super::CodepointRecord;
use super::CodepointTable;
use super::HEADER_LEN;
use super::MAGIC;
use super::MAX_CODEPOINT;
use super::RECORD_LEN;
use super::VERSION;
use crate::Error;
use crate::GeneralCategory;

impl CodepointTable {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path.as_ref())?;
        let table = Self::read(BufReader::new(file))?;
        log::debug!(
            "Loaded {} codepoints from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    pub fn read<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = GzDecoder::new(reader);
        let mut header = [0_u8; HEADER_LEN];
        reader.read_exact(&mut header)?;
        if header[..MAGIC.len()] != MAGIC[..] {
            return Err(Error::Table("not a codepoint table".into()));
        }
        let version = header[MAGIC.len()];
        if version != VERSION {
            return Err(Error::Table(format!("unsupported version {}", version)));
        }
        let num_records = get_u32(&header[(MAGIC.len() + 1)..]) as usize;
        if num_records > MAX_CODEPOINT as usize + 1 {
            return Err(Error::Table(format!("bogus no. of records {}", num_records)));
        }
        let mut data = vec![0_u8; num_records * RECORD_LEN];
        reader.read_exact(&mut data)?;
        let records = data
            .chunks_exact(RECORD_LEN)
            .map(|chunk| {
                CodepointRecord::new(
                    get_u32(chunk),
                    GeneralCategory::from_bytes([chunk[4], chunk[5]]),
                )
            })
            .collect();
        if reader.read(&mut [0_u8; 1])? != 0 {
            return Err(Error::Table("trailing data".into()));
        }
        Self::new(records)
    }
}

fn get_u32(input: &[u8]) -> u32 {
    u32::from_le_bytes([input[0], input[1], input[2], input[3]])
}
