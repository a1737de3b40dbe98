use crate::error::{Error, Result};

/// Little-endian cursor over the header portion of a byte source. Running
/// past the end means the fixed layout is incomplete, so every read maps
/// straight to [`Error::TruncatedHeader`].
pub(super) struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub(super) fn read_u8(&mut self) -> Result<u8> {
        if self.position >= self.data.len() {
            return Err(Error::TruncatedHeader);
        }
        let value = self.data[self.position];
        self.position += 1;
        Ok(value)
    }

    pub(super) fn read_u32_le(&mut self) -> Result<u32> {
        if self.position + 4 > self.data.len() {
            return Err(Error::TruncatedHeader);
        }
        let bytes = [
            self.data[self.position],
            self.data[self.position + 1],
            self.data[self.position + 2],
            self.data[self.position + 3],
        ];
        self.position += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    pub(super) fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        if self.position + n > self.data.len() {
            return Err(Error::TruncatedHeader);
        }
        let bytes = self.data[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(bytes)
    }

    pub(super) fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let n = buf.len();
        if self.position + n > self.data.len() {
            return Err(Error::TruncatedHeader);
        }
        buf.copy_from_slice(&self.data[self.position..self.position + n]);
        self.position += n;
        Ok(())
    }

    pub(super) fn read_u32_array16(&mut self) -> Result<[u32; 16]> {
        let mut values = [0u32; 16];
        for value in &mut values {
            *value = self.read_u32_le()?;
        }
        Ok(values)
    }
}
