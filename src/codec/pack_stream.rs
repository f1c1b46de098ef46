use std::io::{self, Read, Write};
use std::ops::AddAssign;

use log::debug;

use super::{pack_group, read_full};
use crate::config::{IMAGE_PIXELS, PIXELS_PER_BYTE};
use crate::error::{Error, Result};

// What a packing run consumed and produced
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PackStats {
    pub pixels: u64,
    pub bytes: u64,
}

impl PackStats {
    // Whole images consumed
    pub fn images(&self) -> u64 {
        self.pixels / IMAGE_PIXELS as u64
    }
}

impl AddAssign for PackStats {
    fn add_assign(&mut self, other: Self) {
        self.pixels += other.pixels;
        self.bytes += other.bytes;
    }
}

// Discard the fixed-size header of a raw source without looking at it
pub fn skip_header(reader: &mut impl Read, header_len: u64) -> Result<()> {
    let got = io::copy(&mut reader.by_ref().take(header_len), &mut io::sink())?;
    if got < header_len {
        return Err(Error::ShortHeader {
            expected: header_len,
            got,
        });
    }
    debug!("Skipped {} header bytes", got);
    Ok(())
}

// Pack every remaining pixel of `reader` into `writer`, 8 pixels per byte.
// The stream has to end on a group boundary; leftover pixels are an error and
// are not written. Neither stream is closed.
pub fn pack_stream(
    reader: &mut impl Read,
    writer: &mut impl Write,
    threshold: u8,
) -> Result<PackStats> {
    let mut stats = PackStats::default();
    let mut group = [0_u8; PIXELS_PER_BYTE];
    loop {
        match read_full(reader, &mut group)? {
            0 => break,
            PIXELS_PER_BYTE => {
                writer.write_all(&[pack_group(&group, threshold)])?;
                stats.pixels += PIXELS_PER_BYTE as u64;
                stats.bytes += 1;
            }
            leftover => return Err(Error::PartialGroup(leftover)),
        }
    }
    Ok(stats)
}
