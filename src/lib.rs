//! Count reads and bases in (compressed) fastq files.
//!
//! A fastq record is four lines: identifier, sequence, separator and quality.
//! The [`Parser`] hands records out one at a time from a refill buffer;
//! [`count_path`] opens a file, undoes its compression and folds every record
//! into a [`Counts`].
//!
//! ```rust,no_run
//! let counts = fqcount::count_path(Some("reads.fastq.gz"))?;
//! println!("{}", counts);
//! # Ok::<(), fqcount::Error>(())
//! ```

use std::io::Read;

use log::debug;

mod buffer;
pub mod counts;
pub mod decode;
mod error;
mod records;

pub use crate::counts::{count_path, count_reads, Counts};
pub use crate::decode::{open_path, parse_path};
pub use crate::error::{Error, Result};
pub use crate::records::{IdxRecord, IdxRecordResult, RefRecord};

use crate::buffer::Buffer;

const BUFSIZE: usize = 64 * 1024;


/// Pull-based parser over a decompressed fastq stream.
///
/// The reader is owned by the parser and closed when it is dropped.
pub struct Parser<R: Read> {
    reader: R,
    buffer: Buffer,
    n_records: u64,
}


impl<R: Read> Parser<R> {
    pub fn new(reader: R) -> Parser<R> {
        Parser::with_capacity(BUFSIZE, reader)
    }

    /// Create a parser with an initial buffer of `capacity` bytes. The buffer
    /// grows if a record does not fit.
    pub fn with_capacity(capacity: usize, reader: R) -> Parser<R> {
        Parser {
            reader,
            buffer: Buffer::new(capacity),
            n_records: 0,
        }
    }

    /// Number of records handed out so far.
    pub fn n_records(&self) -> u64 {
        self.n_records
    }

    /// Make room in the buffer and read once. Return `false` at end of stream.
    fn fill_buffer(&mut self) -> Result<bool> {
        self.buffer.clean();
        if self.buffer.n_free() == 0 {
            self.buffer.grow();
            debug!("Record does not fit, parse buffer grown to {} bytes",
                   self.buffer.capacity());
        }

        let n_read = self.buffer.read_into(&mut self.reader)?;
        Ok(n_read > 0)
    }

    /// Call `func` on each record until the stream ends or `func` returns
    /// `false`.
    ///
    /// Returns `Ok(true)` if the whole stream was consumed and `Ok(false)` if
    /// `func` stopped early. A stream ending inside a record is an
    /// [`Error::Truncated`].
    pub fn each<F>(&mut self, mut func: F) -> Result<bool>
        where F: FnMut(RefRecord) -> bool
    {
        let mut eof = false;
        loop {
            loop {
                let buffer = self.buffer.data();
                match IdxRecord::from_buffer(buffer, eof) {
                    IdxRecordResult::EmptyBuffer if eof => return Ok(true),
                    IdxRecordResult::Incomplete { lines } if eof => {
                        return Err(Error::Truncated {
                            record: self.n_records + 1,
                            lines,
                        });
                    }
                    IdxRecordResult::EmptyBuffer | IdxRecordResult::Incomplete { .. } => break,
                    IdxRecordResult::Record(record) => {
                        self.n_records += 1;
                        let go_on = func(record.to_ref_record(buffer));
                        self.buffer.consume(record.len());
                        if !go_on {
                            return Ok(false);
                        }
                    }
                }
            }

            eof = !self.fill_buffer()?;
        }
    }
}


#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read, Result};
    use super::{Error, Parser};

    /// Hands out its data one byte per read call.
    struct Trickle<'a>(&'a [u8]);

    impl<'a> Read for Trickle<'a> {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
            let data = self.0;
            match (data.split_first(), buf.first_mut()) {
                (Some((&byte, rest)), Some(dest)) => {
                    *dest = byte;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn correct() {
        let data = Cursor::new(b"@hi\nNN\n+\n++\n@hi\nNN\n+\n++\n");
        let mut parser = Parser::new(data);
        let mut count = 0;
        let ok = parser.each(|record| {
            assert_eq!(record.head(), b"@hi");
            assert_eq!(record.seq(), b"NN");
            assert_eq!(record.qual(), b"++");
            count += 1;
            true
        });
        assert!(ok.unwrap());
        assert_eq!(count, 2);
        assert_eq!(parser.n_records(), 2);
    }

    #[test]
    fn empty() {
        let mut parser = Parser::new(Cursor::new(b""));
        assert!(parser.each(|_| panic!("no records expected")).unwrap());
        assert_eq!(parser.n_records(), 0);
    }

    #[test]
    fn truncated() {
        let inputs: [&[u8]; 3] = [
            b"@hi\nNN\n+\n++\n@hi\n",
            b"@hi\nNN\n+\n++\n@hi\nNN\n",
            b"@hi\nNN\n+\n++\n@hi\nNN\n+\n",
        ];
        for (i, data) in inputs.iter().enumerate() {
            let mut parser = Parser::new(Cursor::new(*data));
            let mut count = 0;
            match parser.each(|_| { count += 1; true }) {
                Err(Error::Truncated { record, lines }) => {
                    assert_eq!(record, 2);
                    assert_eq!(lines, i + 1);
                }
                other => panic!("expected truncation error, got {:?}", other),
            }
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn truncated_without_final_newline() {
        let mut parser = Parser::new(Cursor::new(b"@hi\nNN\n+"));
        match parser.each(|_| true) {
            Err(Error::Truncated { record: 1, lines: 3 }) => {}
            other => panic!("expected truncation error, got {:?}", other),
        }
    }

    #[test]
    fn missing_final_newline() {
        let mut parser = Parser::new(Cursor::new(b"@hi\nNN\n+\n++\n@hi\nNNN\n+\n+++"));
        let mut seqs = Vec::new();
        assert!(parser.each(|record| { seqs.push(record.seq().to_vec()); true }).unwrap());
        assert_eq!(seqs, vec![b"NN".to_vec(), b"NNN".to_vec()]);
    }

    #[test]
    fn length_mismatch_is_not_checked() {
        let mut parser = Parser::new(Cursor::new(b"@hi\nNN\n+\n+\n"));
        let mut count = 0;
        assert!(parser.each(|_| { count += 1; true }).unwrap());
        assert_eq!(count, 1);
    }

    #[test]
    fn stop_early() {
        let data = Cursor::new(b"@a\nA\n+\n!\n@b\nC\n+\n!\n@c\nG\n+\n!\n");
        let mut parser = Parser::new(data);
        let mut heads = Vec::new();
        let finished = parser.each(|record| {
            heads.push(record.head().to_vec());
            heads.len() < 2
        }).unwrap();
        assert!(!finished);
        assert_eq!(heads, vec![b"@a".to_vec(), b"@b".to_vec()]);

        // the parser resumes after the last record handed out
        let mut rest = Vec::new();
        assert!(parser.each(|record| { rest.push(record.head().to_vec()); true }).unwrap());
        assert_eq!(rest, vec![b"@c".to_vec()]);
    }

    #[test]
    fn record_longer_than_buffer() {
        let seq = vec![b'A'; 1000];
        let mut data = b"@long\n".to_vec();
        data.extend_from_slice(&seq);
        data.extend_from_slice(b"\n+\n");
        data.extend_from_slice(&vec![b'I'; 1000]);
        data.extend_from_slice(b"\n@short\nAC\n+\nII\n");

        let mut parser = Parser::with_capacity(16, Cursor::new(data));
        let mut lengths = Vec::new();
        assert!(parser.each(|record| { lengths.push(record.seq().len()); true }).unwrap());
        assert_eq!(lengths, vec![1000, 2]);
    }

    #[test]
    fn one_byte_reads() {
        let data = b"@r1\r\nACGT\r\n+\r\n!!!!\r\n@r2\r\nACGTACGT\r\n+\r\n!!!!!!!!\r\n";
        let mut parser = Parser::with_capacity(8, Trickle(data));
        let mut lengths = Vec::new();
        assert!(parser.each(|record| { lengths.push(record.seq().len()); true }).unwrap());
        assert_eq!(lengths, vec![4, 8]);
    }
}
