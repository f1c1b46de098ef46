use super::binarize;
use crate::config::PIXELS_PER_BYTE;

// Pack 8 raw pixels into one byte, MSB first.
// Pixel i of the group lands on bit (7 - i).
pub fn pack_group(group: &[u8; PIXELS_PER_BYTE], threshold: u8) -> u8 {
    group
        .iter()
        .enumerate()
        .fold(0, |byte, (i, &pixel)| {
            byte | (binarize(pixel, threshold) << (PIXELS_PER_BYTE - 1 - i))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::THRESHOLD;

    #[test]
    fn alternating_pixels_pack_to_0xaa() {
        assert_eq!(pack_group(&[255, 0, 255, 0, 255, 0, 255, 0], THRESHOLD), 0xAA);
    }

    #[test]
    fn first_pixel_is_the_high_bit() {
        assert_eq!(pack_group(&[200, 0, 0, 0, 0, 0, 0, 0], THRESHOLD), 0b1000_0000);
        assert_eq!(pack_group(&[0, 0, 0, 0, 0, 0, 0, 200], THRESHOLD), 0b0000_0001);
    }

    #[test]
    fn boundary_intensities() {
        assert_eq!(pack_group(&[40, 39, 40, 39, 40, 39, 40, 39], THRESHOLD), 0xAA);
        assert_eq!(pack_group(&[39; 8], THRESHOLD), 0x00);
        assert_eq!(pack_group(&[40; 8], THRESHOLD), 0xFF);
    }
}
