use crate::config::PIXELS_PER_BYTE;

// Expand a packed byte into (at most) 8 binary pixels, MSB first
pub fn unpack_byte(byte: u8, pixels: &mut [u8]) {
    for (offset, pixel) in pixels.iter_mut().take(PIXELS_PER_BYTE).enumerate() {
        *pixel = (byte >> (PIXELS_PER_BYTE - 1 - offset)) & 1;
    }
}
