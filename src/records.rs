use memchr::memchr;


/// A fastq record that borrows its four lines from the parse buffer.
///
/// Records are handed out one at a time by [`Parser::each`](crate::Parser::each)
/// and only live for the duration of the callback.
#[derive(Debug)]
pub struct RefRecord<'a> {
    // end of each line in `data`, exclusive, before the '\n'
    head: usize,
    seq: usize,
    sep: usize,
    qual: usize,
    data: &'a [u8],
}


/// Line ends of a record located in a buffer, relative to the buffer start.
#[derive(Debug, PartialEq, Eq)]
pub struct IdxRecord {
    head: usize,
    seq: usize,
    sep: usize,
    qual: usize,
    len: usize,
}


#[derive(Debug, PartialEq, Eq)]
pub enum IdxRecordResult {
    /// Nothing left in the buffer.
    EmptyBuffer,
    /// The buffer ends inside a record after `lines` complete lines.
    Incomplete { lines: usize },
    Record(IdxRecord),
}


/// Remove a final '\r' from a byte slice
#[inline]
fn trim_winline(line: &[u8]) -> &[u8] {
    if let Some((&b'\r', remaining)) = line.split_last() {
        remaining
    } else {
        line
    }
}


impl<'a> RefRecord<'a> {
    /// The identifier line, including the leading '@' if there is one.
    #[inline]
    pub fn head(&self) -> &'a [u8] {
        trim_winline(&self.data[..self.head])
    }

    /// The sequence line with surrounding whitespace removed.
    #[inline]
    pub fn seq(&self) -> &'a [u8] {
        self.data[self.head + 1..self.seq].trim_ascii()
    }

    #[inline]
    pub fn sep(&self) -> &'a [u8] {
        trim_winline(&self.data[self.seq + 1..self.sep])
    }

    #[inline]
    pub fn qual(&self) -> &'a [u8] {
        trim_winline(&self.data[self.sep + 1..self.qual])
    }
}


/// Position of the end of the line starting at `pos`.
///
/// At end of stream a final line without '\n' runs to the end of the buffer.
#[inline]
fn line_end(buffer: &[u8], pos: usize, eof: bool) -> Option<usize> {
    match memchr(b'\n', &buffer[pos..]) {
        Some(offset) => Some(pos + offset),
        None if eof && pos < buffer.len() => Some(buffer.len()),
        None => None,
    }
}


impl IdxRecord {
    /// Number of bytes the record occupies, including its final newline.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn to_ref_record<'a>(&self, buffer: &'a [u8]) -> RefRecord<'a> {
        let data = &buffer[..self.qual];

        debug_assert!(self.head < self.seq);
        debug_assert!(self.seq < self.sep);
        debug_assert!(self.sep < self.qual);

        RefRecord {
            data,
            head: self.head,
            seq: self.seq,
            sep: self.sep,
            qual: self.qual,
        }
    }

    /// Locate the record at the start of `buffer`.
    ///
    /// `eof` tells whether `buffer` holds everything that is left of the
    /// stream. Lines are not checked for content.
    pub fn from_buffer(buffer: &[u8], eof: bool) -> IdxRecordResult {
        if buffer.is_empty() {
            return IdxRecordResult::EmptyBuffer;
        }

        let mut ends = [0usize; 4];
        let mut pos = 0;
        for (lines, end) in ends.iter_mut().enumerate() {
            match line_end(buffer, pos, eof) {
                Some(val) => {
                    *end = val;
                    pos = (val + 1).min(buffer.len());
                }
                None => return IdxRecordResult::Incomplete { lines },
            }
        }

        IdxRecordResult::Record(IdxRecord {
            head: ends[0],
            seq: ends[1],
            sep: ends[2],
            qual: ends[3],
            len: pos,
        })
    }
}
