// The bit codec: raw grayscale bytes in, one bit per pixel out, and back again

mod binarize;
pub use binarize::binarize;

mod pack_group;
pub use pack_group::pack_group;

mod unpack_byte;
pub use unpack_byte::unpack_byte;

mod read_full;
pub(crate) use read_full::read_full;

mod pack_stream;
pub use pack_stream::{pack_stream, skip_header, PackStats};

mod read_packed_image;
pub use read_packed_image::{read_packed_image, PackedImages};
