//! Read and base totals.

use std::fmt;
use std::io::Read;
use std::path::Path;

use log::{info, warn};

use crate::{parse_path, Error, Parser, RefRecord, Result};


/// Number of reads and the sum of their sequence lengths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub reads: u64,
    pub bases: u64,
}


impl Counts {
    pub fn new() -> Counts {
        Counts::default()
    }

    #[inline]
    pub fn add(&mut self, record: &RefRecord) {
        self.reads += 1;
        self.bases += record.seq().len() as u64;
    }
}


/// The two-line report, `reads <n>` and `bases <n>`, without a final newline.
impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "reads {}", self.reads)?;
        write!(f, "bases {}", self.bases)
    }
}


fn count_parser<R: Read>(parser: &mut Parser<R>) -> Result<Counts> {
    let mut counts = Counts::new();
    let result = parser.each(|record| {
        counts.add(&record);
        true
    });

    match result {
        Ok(_) => {
            info!("Counted {} reads with {} bases", counts.reads, counts.bases);
            Ok(counts)
        }
        Err(e @ Error::Truncated { .. }) => {
            warn!("Input ends inside a record; {} complete reads with {} bases came before it",
                  counts.reads, counts.bases);
            Err(e)
        }
        Err(e) => Err(e),
    }
}


/// Count the records of an uncompressed fastq stream.
pub fn count_reads<R: Read>(reader: R) -> Result<Counts> {
    count_parser(&mut Parser::new(reader))
}


/// Count the records of a fastq file, decompressing it if needed.
///
/// `None` or `-` reads from stdin.
pub fn count_path<P: AsRef<Path>>(path: Option<P>) -> Result<Counts> {
    parse_path(path, |mut parser| count_parser(&mut parser))?
}
