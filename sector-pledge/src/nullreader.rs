use std::io::{self, Read};

/// A reader producing a fixed number of zero bytes, used as the placeholder
/// data source when filling a committed-capacity sector.
pub struct NullReader {
    remaining: u64,
}

impl NullReader {
    pub fn new<T: Into<u64>>(length: T) -> NullReader {
        NullReader {
            remaining: length.into(),
        }
    }
}

impl Read for NullReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Ok(0);
        }

        let n = (buf.len() as u64).min(self.remaining) as usize;

        buf[..n].fill(0);

        self.remaining -= n as u64;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_exactly_n_zero_bytes() {
        let mut r = NullReader::new(1000u64);
        let mut out = Vec::new();

        let n = r.read_to_end(&mut out).unwrap();

        assert_eq!(n, 1000);
        assert!(out.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_partial_reads_drain_the_reader() {
        let mut r = NullReader::new(10u64);
        let mut buf = [0xFFu8; 8];

        assert_eq!(r.read(&mut buf).unwrap(), 8);
        assert_eq!(&buf[..8], &[0u8; 8][..]);
        assert_eq!(r.read(&mut buf).unwrap(), 2);
        assert_eq!(r.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_empty_reader() {
        let mut r = NullReader::new(0u64);
        let mut buf = [0u8; 4];
        assert_eq!(r.read(&mut buf).unwrap(), 0);
    }
}
