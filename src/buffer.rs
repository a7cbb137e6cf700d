use std::io::{ErrorKind, Read, Result};


/// Refill buffer holding the unconsumed tail of a stream in `data[start..end]`.
pub struct Buffer {
    data: Box<[u8]>,
    start: usize,
    end: usize,
}


impl Buffer {
    pub fn new(size: usize) -> Buffer {
        assert!(size > 0, "buffer size must be positive");
        Buffer {
            data: vec![0u8; size].into_boxed_slice(),
            start: 0,
            end: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn n_free(&self) -> usize {
        self.data.len() - self.end
    }

    /// Move data to the start of the buffer, freeing space at the end.
    ///
    /// Return the amount of *additional* free space.
    pub fn clean(&mut self) -> usize {
        if self.start == 0 {
            return 0;
        }

        let freed = self.start;
        self.data.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;
        freed
    }

    /// Double the capacity. Unconsumed data is moved to the front.
    pub fn grow(&mut self) {
        let n_in_buffer = self.len();
        let mut data = vec![0u8; self.data.len() * 2].into_boxed_slice();
        data[..n_in_buffer].copy_from_slice(self.data());

        self.data = data;
        self.start = 0;
        self.end = n_in_buffer;
    }

    /// Read once from `reader` into the free space. `Ok(0)` means end of stream
    /// (or no free space, which callers must rule out first).
    pub fn read_into<R: Read>(&mut self, reader: &mut R) -> Result<usize> {
        let dest = &mut self.data[self.end..];

        let n_read = loop {
            match reader.read(dest) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.end += n_read;
        Ok(n_read)
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data[self.start..self.end]
    }

    #[inline]
    pub fn consume(&mut self, count: usize) {
        self.start += count;
        debug_assert!(self.start <= self.end);
    }
}
