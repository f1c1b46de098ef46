use std::io::{BufReader, Write};

use log::debug;

use super::open;
use crate::codec::PackedImages;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::image::write_grid;

// Verify mode: decode the first few packed images and print each as a grid.
// Images printed before a failure stay printed.
pub fn verify(config: &Config, out: &mut impl Write) -> Result<()> {
    let mut images = PackedImages::new(BufReader::new(open(&config.packed)?));
    for index in 0..config.verify_images {
        let image = match images.next() {
            Some(image) => image?,
            None => {
                return Err(Error::MissingImages {
                    requested: config.verify_images,
                    found: index,
                })
            }
        };
        debug!("Image {} has {} pixels on", index, image.count_on());
        write_grid(&image, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IMAGE_HEIGHT, PACKED_IMAGE_BYTES};
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "bit_mnist_verify_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn prints_the_requested_number_of_grids() {
        let dir = scratch_dir("prints");
        let config = Config::in_dir(&dir);
        // Six images, only five get printed
        fs::write(&config.packed, vec![0x80_u8; 6 * PACKED_IMAGE_BYTES]).unwrap();

        let mut out = Vec::new();
        verify(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), config.verify_images * IMAGE_HEIGHT);
        assert!(text.starts_with("1 0 0 0 0 0 0 0 1 "));
        assert_eq!(
            text.matches('1').count(),
            config.verify_images * PACKED_IMAGE_BYTES
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn too_few_images_is_an_error() {
        let dir = scratch_dir("few");
        let config = Config::in_dir(&dir);
        fs::write(&config.packed, vec![0_u8; 2 * PACKED_IMAGE_BYTES]).unwrap();

        let mut out = Vec::new();
        let err = verify(&config, &mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingImages {
                requested: 5,
                found: 2
            }
        ));
        // The two that exist were still printed
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 2 * IMAGE_HEIGHT);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_packed_file_is_an_open_error() {
        let dir = scratch_dir("absent");
        let config = Config::in_dir(&dir);
        let mut out = Vec::new();
        assert!(matches!(
            verify(&config, &mut out),
            Err(Error::Open { .. })
        ));
        assert!(out.is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }
}
