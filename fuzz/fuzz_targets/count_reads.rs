#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let lines = data.iter().filter(|&&c| c == b'\n').count()
        + usize::from(data.last().map_or(false, |&c| c != b'\n'));

    match fqcount::count_reads(Cursor::new(data)) {
        Ok(counts) => {
            assert_eq!(lines % 4, 0);
            assert_eq!(counts.reads as usize, lines / 4);
            assert!(counts.bases as usize <= data.len());
        }
        Err(fqcount::Error::Truncated { record, lines: found }) => {
            assert_eq!(lines % 4, found);
            assert_eq!(record as usize, lines / 4 + 1);
        }
        Err(e) => panic!("unexpected error {:?}", e),
    }
});
