#![allow(dead_code)]

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;

pub const TWO_READS: &[u8] = b"@read1\nACGT\n+\n!!!!\n@read2\nACGTACGT\n+\n!!!!!!!!\n";

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Write `data` to a temporary file as is.
pub fn write_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

/// Write `data` gzip compressed to a temporary file.
pub fn gz_file(data: &[u8]) -> NamedTempFile {
    write_file(&gzip(data))
}

/// `n` records whose sequence lengths are 1, 2, ..., n.
pub fn records(n: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 1..=n {
        writeln!(out, "@read{}", i).unwrap();
        out.extend(std::iter::repeat(b'A').take(i));
        out.extend_from_slice(b"\n+\n");
        out.extend(std::iter::repeat(b'I').take(i));
        out.push(b'\n');
    }
    out
}
