//! Open fastq input and undo its compression.

use std::fs::File;
use std::io::{self, Cursor, ErrorKind, Read};
use std::path::Path;

use log::debug;
use niffler::compression::Format;

use crate::{Error, Parser, Result};

// Longest magic number niffler looks at. Shorter input is never compressed.
const MAGIC_LEN: usize = 5;


/// Open `path` (stdin for `None` or `-`) and return a reader over the
/// decompressed content.
///
/// Gzip input is decompressed, uncompressed input is passed through.
pub fn open_path<P: AsRef<Path>>(path: Option<P>) -> Result<Box<dyn Read>> {
    let path: Option<&Path> = path.as_ref().map(|p| p.as_ref());
    let input: Box<dyn Read> = match path {
        None => Box::new(io::stdin()),
        Some(p) if p == Path::new("-") => Box::new(io::stdin()),
        Some(p) => {
            let file = File::open(p).map_err(|source| Error::Open {
                path: p.to_path_buf(),
                source,
            })?;
            debug!("Opened input file {:?}", p);
            Box::new(file)
        }
    };
    decompress(input)
}


/// Wrap `input` in the decoder matching its magic number.
pub fn decompress<'a>(mut input: Box<dyn Read + 'a>) -> Result<Box<dyn Read + 'a>> {
    let mut magic = [0u8; MAGIC_LEN];
    let mut n_magic = 0;
    while n_magic < MAGIC_LEN {
        match input.read(&mut magic[n_magic..]) {
            Ok(0) => break,
            Ok(n) => n_magic += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    let input = Cursor::new(magic[..n_magic].to_vec()).chain(input);

    if n_magic < MAGIC_LEN {
        debug!("Input has only {} bytes, reading it as is", n_magic);
        return Ok(Box::new(input));
    }

    let (reader, format) = niffler::get_reader(Box::new(input))?;
    match format {
        Format::No => debug!("Input is not compressed"),
        format => debug!("Detected {:?} compression", format),
    }
    Ok(reader)
}


/// Open `path` like [`open_path`] and pass a [`Parser`] over it to `func`.
///
/// # Examples
///
/// ```rust,no_run
/// use fqcount::parse_path;
///
/// let n_long = parse_path(Some("reads.fq.gz"), |mut parser| {
///     let mut n_long = 0;
///     parser.each(|record| {
///         if record.seq().len() > 100 {
///             n_long += 1;
///         }
///         true
///     }).map(|_| n_long)
/// })??;
/// println!("{}", n_long);
/// # Ok::<(), fqcount::Error>(())
/// ```
pub fn parse_path<P, F, O>(path: Option<P>, func: F) -> Result<O>
    where P: AsRef<Path>,
          F: FnOnce(Parser<Box<dyn Read>>) -> O
{
    let reader = open_path(path)?;
    Ok(func(Parser::new(reader)))
}
