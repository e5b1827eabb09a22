//! SSH wire primitives (RFC 4251 §5): big-endian `uint32` and
//! length-prefixed `string`.

use crate::error::{Error, Result};

pub fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

pub fn put_string(buf: &mut Vec<u8>, data: &[u8]) -> Result<()> {
    let len = u32::try_from(data.len())
        .map_err(|_| Error::Encoding(format!("field of {} bytes exceeds uint32", data.len())))?;
    put_u32(buf, len);
    buf.extend_from_slice(data);
    Ok(())
}

/// Cursor over an SSH-encoded buffer. Every short read is a [`Error::MalformedKey`].
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| {
                Error::MalformedKey(format!(
                    "truncated: wanted {} bytes at offset {}, have {}",
                    len,
                    self.pos,
                    self.data.len() - self.pos
                ))
            })?;
        let out = &self.data[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_string(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.read_bytes(len)
    }

    /// Read a string that must equal `expected`.
    pub fn expect_string(&mut self, expected: &[u8], what: &str) -> Result<()> {
        let value = self.read_string()?;
        if value != expected {
            return Err(Error::MalformedKey(format!(
                "unexpected {}: {:?}",
                what,
                String::from_utf8_lossy(value)
            )));
        }
        Ok(())
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn finish(&self, what: &str) -> Result<()> {
        if self.pos != self.data.len() {
            return Err(Error::MalformedKey(format!(
                "{} trailing bytes after {}",
                self.data.len() - self.pos,
                what
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_layout() {
        let mut buf = Vec::new();
        put_string(&mut buf, b"none").unwrap();
        assert_eq!(buf, [0, 0, 0, 4, b'n', b'o', b'n', b'e']);

        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_string().unwrap(), b"none");
        assert!(reader.finish("test").is_ok());
    }

    #[test]
    fn test_truncated_string() {
        // Claims 16 bytes, carries 2
        let buf = [0, 0, 0, 16, 1, 2];
        let mut reader = WireReader::new(&buf);
        assert!(matches!(reader.read_string(), Err(Error::MalformedKey(_))));
    }

    #[test]
    fn test_huge_length_does_not_overflow() {
        let buf = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut reader = WireReader::new(&buf);
        assert!(reader.read_string().is_err());
    }

    #[test]
    fn test_expect_string_mismatch() {
        let mut buf = Vec::new();
        put_string(&mut buf, b"aes256-ctr").unwrap();
        let mut reader = WireReader::new(&buf);
        let err = reader.expect_string(b"none", "cipher").unwrap_err();
        assert!(err.to_string().contains("aes256-ctr"));
    }

    #[test]
    fn test_finish_reports_trailing() {
        let buf = [0, 0, 0, 0, 9];
        let mut reader = WireReader::new(&buf);
        reader.read_string().unwrap();
        assert_eq!(reader.remaining(), &[9]);
        assert!(reader.finish("record").is_err());
    }
}
