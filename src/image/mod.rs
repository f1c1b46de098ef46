// One 28x28 image of binary pixels, kept flat and row-major (index = row * 28 + col)

use crate::codec::{binarize, pack_group};
use crate::config::{IMAGE_PIXELS, IMAGE_WIDTH, PACKED_IMAGE_BYTES, PIXELS_PER_BYTE};

mod write_grid;
pub use write_grid::write_grid;

// Binary pixels are already 0 or 1, so packing them again thresholds at 1
const ON: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: [u8; IMAGE_PIXELS],
}

impl Image {
    // Threshold one raw grayscale image
    pub fn from_raw(raw: &[u8; IMAGE_PIXELS], threshold: u8) -> Self {
        Image {
            pixels: array_init::array_init(|i| binarize(raw[i], threshold)),
        }
    }

    // The 98-byte packed form of this image
    pub fn pack(&self) -> [u8; PACKED_IMAGE_BYTES] {
        array_init::array_init(|i| {
            let group = array_init::array_init(|bit| self.pixels[i * PIXELS_PER_BYTE + bit]);
            pack_group(&group, ON)
        })
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * IMAGE_WIDTH + col]
    }

    pub fn pixels(&self) -> &[u8; IMAGE_PIXELS] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8; IMAGE_PIXELS] {
        &mut self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(IMAGE_WIDTH)
    }

    // Number of pixels that are on
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == ON).count()
    }
}

// All pixels off
impl Default for Image {
    fn default() -> Self {
        Image {
            pixels: [0; IMAGE_PIXELS],
        }
    }
}
