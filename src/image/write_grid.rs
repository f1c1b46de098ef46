use std::io::Write;

use super::Image;
use crate::error::Result;

// Print an image as 28 lines of 28 space-separated pixel values
pub fn write_grid(image: &Image, out: &mut impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    for row in image.rows() {
        writer.write_record(row.iter().map(|pixel| pixel.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IMAGE_HEIGHT, IMAGE_WIDTH};

    fn render(image: &Image) -> String {
        let mut out = Vec::new();
        write_grid(image, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn blank_image_is_a_grid_of_zeros() {
        let text = render(&Image::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), IMAGE_HEIGHT);
        for line in lines {
            assert_eq!(line.split(' ').count(), IMAGE_WIDTH);
            assert!(line.split(' ').all(|value| value == "0"));
        }
        assert!(text.ends_with("0\n"));
    }

    #[test]
    fn pixels_land_in_their_row_and_column() {
        let mut image = Image::default();
        image.pixels_mut()[0] = 1;
        image.pixels_mut()[27 * IMAGE_WIDTH + 27] = 1;
        let text = render(&image);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("1 0 "));
        assert!(lines[27].ends_with(" 0 1"));
        assert_eq!(text.matches('1').count(), 2);
    }
}
