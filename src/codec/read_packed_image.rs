use std::io::Read;

use log::debug;

use super::{read_full, unpack_byte};
use crate::config::{PACKED_IMAGE_BYTES, PIXELS_PER_BYTE};
use crate::error::{Error, Result};
use crate::image::Image;

// Decode the next 98 packed bytes into `image`.
// Ok(false) means the stream was already at its end and `image` is untouched;
// a stream that stops partway through an image is an error.
pub fn read_packed_image(reader: &mut impl Read, image: &mut Image) -> Result<bool> {
    let mut packed = [0_u8; PACKED_IMAGE_BYTES];
    match read_full(reader, &mut packed)? {
        0 => Ok(false),
        PACKED_IMAGE_BYTES => {
            image
                .pixels_mut()
                .chunks_exact_mut(PIXELS_PER_BYTE)
                .zip(packed)
                .for_each(|(pixels, byte)| unpack_byte(byte, pixels));
            Ok(true)
        }
        got => Err(Error::TruncatedImage {
            expected: PACKED_IMAGE_BYTES,
            got,
        }),
    }
}

// Iterates the images of a packed stream in order.
// Stops at a clean end of stream, or right after yielding the first error.
pub struct PackedImages<R> {
    reader: R,
    decoded: usize,
    done: bool,
}

impl<R: Read> PackedImages<R> {
    pub fn new(reader: R) -> Self {
        PackedImages {
            reader,
            decoded: 0,
            done: false,
        }
    }

    // Number of images decoded so far
    pub fn decoded(&self) -> usize {
        self.decoded
    }
}

impl<R: Read> Iterator for PackedImages<R> {
    type Item = Result<Image>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut image = Image::default();
        match read_packed_image(&mut self.reader, &mut image) {
            Ok(true) => {
                debug!("Decoded packed image {}", self.decoded);
                self.decoded += 1;
                Some(Ok(image))
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
