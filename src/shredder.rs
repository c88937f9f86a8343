use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use rand::rngs::OsRng;
use rand::RngCore;

const CHUNK_SIZE: usize = 65536;

/// Overwrite a file with a single pass of OS-random bytes, force the write
/// to disk, then delete it. Directories are never shredded.
pub fn shred_file(path: &Path) -> Result<(), std::io::Error> {
    let size = std::fs::metadata(path)?.len();
    if size == 0 {
        std::fs::remove_file(path)?;
        return Ok(());
    }

    let mut file = std::fs::OpenOptions::new().write(true).open(path)?;
    let mut buf = vec![0u8; CHUNK_SIZE];

    file.seek(SeekFrom::Start(0))?;
    let mut remaining = size;
    while remaining > 0 {
        let chunk = remaining.min(CHUNK_SIZE as u64) as usize;
        OsRng.fill_bytes(&mut buf[..chunk]);
        file.write_all(&buf[..chunk])?;
        remaining -= chunk as u64;
    }

    file.flush()?;
    file.sync_all()?;
    drop(file);

    std::fs::remove_file(path)?;
    Ok(())
}
