// Threshold one raw intensity into a binary pixel.
// Depends on nothing but the byte itself.
#[inline]
pub fn binarize(pixel: u8, threshold: u8) -> u8 {
    u8::from(pixel >= threshold)
}
