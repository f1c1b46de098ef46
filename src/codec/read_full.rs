use std::io::{self, ErrorKind, Read};

// Fill as much of `buf` as the reader allows.
// Returns fewer bytes than asked for only at end of stream.
pub(crate) fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hands out one byte per read call
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.split_first() {
                Some((&first, rest)) if !buf.is_empty() => {
                    buf[0] = first;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn keeps_reading_across_short_reads() {
        let mut reader = Trickle(&[1, 2, 3, 4, 5]);
        let mut buf = [0; 4];
        assert_eq!(read_full(&mut reader, &mut buf).unwrap(), 4);
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(read_full(&mut reader, &mut buf).unwrap(), 1);
        assert_eq!(buf[0], 5);
        assert_eq!(read_full(&mut reader, &mut buf).unwrap(), 0);
    }
}
