use std::io::{Read, Write};

use crate::error::{MultihashError, MultihashResult};
use crate::multihash::{Multihash, HEADER_LEN};
use crate::registry::Algorithm;

impl Multihash {
    /// Write the binary layout to `sink`.
    pub fn write_to<W: Write>(&self, mut sink: W) -> MultihashResult<()> {
        sink.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read exactly one multihash from `source`.
    ///
    /// Reads the type byte, the length byte, then exactly that many digest
    /// bytes. Running out of input first fails with
    /// [`MultihashError::TruncatedInput`]; nothing past the digest is consumed.
    pub fn read_from<R: Read>(mut source: R) -> MultihashResult<Self> {
        let header = read_chunk(&mut source, HEADER_LEN, 0)?;
        let algorithm = Algorithm::from_code(header[0])?;
        let declared = header[1] as usize;
        let digest = read_chunk(&mut source, declared, HEADER_LEN)?;
        Self::new(algorithm, digest)
    }
}

/// Read `len` bytes, reporting a short read as truncation relative to the
/// `consumed` bytes already taken from the stream.
fn read_chunk<R: Read>(source: &mut R, len: usize, consumed: usize) -> MultihashResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(len);
    source.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(MultihashError::TruncatedInput {
            expected: consumed + len,
            actual: consumed + buf.len(),
        });
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    fn sample() -> Multihash {
        Multihash::new(Algorithm::Sha1, vec![0x42u8; 20]).unwrap()
    }

    #[test]
    fn write_read_roundtrip() {
        let mh = sample();
        let mut buf = Vec::new();
        mh.write_to(&mut buf).unwrap();
        assert_eq!(buf, mh.to_bytes());

        let parsed = Multihash::read_from(Cursor::new(&buf)).unwrap();
        assert_eq!(parsed, mh);
    }

    #[test]
    fn reads_consecutive_values() {
        let first = sample();
        let second = Multihash::identity(b"abc".to_vec()).unwrap();
        let mut buf = Vec::new();
        first.write_to(&mut buf).unwrap();
        second.write_to(&mut buf).unwrap();

        let mut cursor = Cursor::new(buf);
        assert_eq!(Multihash::read_from(&mut cursor).unwrap(), first);
        assert_eq!(Multihash::read_from(&mut cursor).unwrap(), second);
        assert_eq!(cursor.position(), 27);
    }

    #[test]
    fn truncated_digest() {
        let mut bytes = sample().to_bytes();
        bytes.truncate(10);
        let err = Multihash::read_from(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(
            err,
            MultihashError::TruncatedInput { expected: 22, actual: 10 }
        ));
    }

    #[test]
    fn truncated_header() {
        let err = Multihash::read_from(Cursor::new(vec![0x12])).unwrap_err();
        assert!(matches!(
            err,
            MultihashError::TruncatedInput { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn unknown_code_from_stream() {
        let err = Multihash::read_from(Cursor::new(vec![0xee, 0x00])).unwrap_err();
        assert!(matches!(err, MultihashError::UnknownAlgorithm(0xee)));
    }

    #[test]
    fn length_mismatch_from_stream() {
        let err = Multihash::read_from(Cursor::new(vec![0x12, 0x01, 0xff])).unwrap_err();
        assert!(err.is_invalid_length());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_error_surfaces_as_io() {
        let err = sample().write_to(FailingSink).unwrap_err();
        assert!(matches!(err, MultihashError::Io(_)));
    }
}
