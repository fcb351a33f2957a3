//! Filtration input
//!
//! Files hold whitespace-separated records `value dimension v0 .. vd`, one
//! per simplex. Records may appear in any order; they are stably sorted by
//! value before validation, so ties keep their file order.

use std::io::Read;
use std::path::Path;

use phbar_core::{parse_simplices, Filtration};
use tracing::debug;

use crate::error::{Error, Result};

/// Parse a filtration from text
pub fn parse_filtration(text: &str) -> Result<Filtration> {
    let simplices = parse_simplices(text)?;
    let filtration = Filtration::from_unsorted(simplices)?;
    debug!(simplices = filtration.len(), "parsed filtration");
    Ok(filtration)
}

/// Read a filtration file into memory and parse it
pub fn read_filtration<P: AsRef<Path>>(path: P) -> Result<Filtration> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_filtration(&text)
}

/// Parse a filtration from any reader
pub fn read_filtration_from<R: Read>(mut reader: R) -> Result<Filtration> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io("<reader>", e))?;
    parse_filtration(&text)
}

/// Parse a filtration file through a read-only memory map
#[cfg(feature = "mmap")]
pub fn read_filtration_mmap<P: AsRef<Path>>(path: P) -> Result<Filtration> {
    use memmap2::MmapOptions;
    use std::fs::File;

    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    if file.metadata().map_err(|e| Error::io(path, e))?.len() == 0 {
        return Ok(Filtration::default());
    }

    // SAFETY: the map is read-only and dropped before this function returns
    let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|e| Error::io(path, e))?;
    let text = std::str::from_utf8(&mmap).map_err(|e| {
        Error::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    parse_filtration(text)
}
