use std::path::{Path, PathBuf};

// Fixed MNIST image geometry
pub const IMAGE_WIDTH: usize = 28;
pub const IMAGE_HEIGHT: usize = 28;
pub const IMAGE_PIXELS: usize = IMAGE_WIDTH * IMAGE_HEIGHT;

// Eight binary pixels share one packed byte, so 784 pixels become 98 bytes
pub const PIXELS_PER_BYTE: usize = 8;
pub const PACKED_IMAGE_BYTES: usize = IMAGE_PIXELS / PIXELS_PER_BYTE;

// Raw intensity at or above which a pixel is "on"
pub const THRESHOLD: u8 = 40;

// Sources open with 32 four-byte words that are skipped unread
pub const HEADER_LEN: u64 = 32 * 4;

// Number of images printed in verify mode
pub const VERIFY_IMAGES: usize = 5;

pub const TRAIN_IMAGES_FILE: &str = "train-images-idx3-ubyte";
pub const TEST_IMAGES_FILE: &str = "t10k-images-idx3-ubyte";
pub const PACKED_FILE: &str = "bit_mnist_images";

// Everything the converter and the verifier need to know.
// The command line never touches this; tests build their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Raw training images, packed first
    pub train_images: PathBuf,
    // Raw test images, appended after the training images
    pub test_images: PathBuf,
    // Packed output in pack mode, input in verify mode
    pub packed: PathBuf,
    // Bytes skipped at the start of each raw source
    pub header_len: u64,
    pub threshold: u8,
    pub verify_images: usize,
}

impl Config {
    // Same file names as the default, but rooted under `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Config {
            train_images: dir.join(TRAIN_IMAGES_FILE),
            test_images: dir.join(TEST_IMAGES_FILE),
            packed: dir.join(PACKED_FILE),
            ..Config::default()
        }
    }

    // The raw sources in the order they are packed
    pub fn sources(&self) -> [&Path; 2] {
        [&self.train_images, &self.test_images]
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            train_images: PathBuf::from(TRAIN_IMAGES_FILE),
            test_images: PathBuf::from(TEST_IMAGES_FILE),
            packed: PathBuf::from(PACKED_FILE),
            header_len: HEADER_LEN,
            threshold: THRESHOLD,
            verify_images: VERIFY_IMAGES,
        }
    }
}
