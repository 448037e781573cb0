use crate::error::{BootstrapError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// An I/O error from one side of a record copy.
#[derive(Debug)]
pub enum CopyError {
    Read(std::io::Error),
    Write(std::io::Error),
}

/// Copies tab-separated records from `input` to `output`, replacing the first
/// field of every record with `label`. Other fields and the record order are
/// unchanged. Works on bytes, so the data need not be UTF-8.
/// Returns the number of records written.
pub fn rewrite_first_column(
    mut input: impl BufRead,
    output: &mut impl Write,
    label: &[u8],
) -> std::result::Result<u64, CopyError> {
    let mut line: Vec<u8> = vec![];
    let mut n_records = 0_u64;
    loop {
        line.clear();
        let bytes_read = input.read_until(b'\n', &mut line).map_err(CopyError::Read)?;
        if bytes_read == 0 {
            break; // End of stream
        }

        // Drop the line terminator, "\n" or "\r\n"
        let mut record = line.as_slice();
        if let Some(r) = record.strip_suffix(b"\n") {
            record = r;
        }
        if let Some(r) = record.strip_suffix(b"\r") {
            record = r;
        }

        // Rest of the record starts at the first tab, if any
        let rest = match record.iter().position(|&c| c == b'\t') {
            Some(tab) => &record[tab..],
            None => &[],
        };
        output
            .write_all(label)
            .and_then(|_| output.write_all(rest))
            .and_then(|_| output.write_all(b"\n"))
            .map_err(CopyError::Write)?;
        n_records += 1;
    }
    Ok(n_records)
}

/// Writes `source` to `target` with the first column of every record set to
/// `sequence_number`.
pub fn materialize_draw(source: &Path, target: &Path, sequence_number: usize) -> Result<u64> {
    let input = File::open(source).map_err(|e| BootstrapError::io(source, e))?;
    let output = File::create(target).map_err(|e| BootstrapError::io(target, e))?;

    let mut writer = BufWriter::new(output);
    let label = sequence_number.to_string();
    let n_records = rewrite_first_column(BufReader::new(input), &mut writer, label.as_bytes())
        .map_err(|e| match e {
            CopyError::Read(e) => BootstrapError::io(source, e),
            CopyError::Write(e) => BootstrapError::io(target, e),
        })?;
    writer.flush().map_err(|e| BootstrapError::io(target, e))?;

    Ok(n_records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn rewrite(input: &[u8], label: &str) -> (Vec<u8>, u64) {
        let mut out: Vec<u8> = vec![];
        let input = Cursor::new(input.to_vec());
        let n = rewrite_first_column(input, &mut out, label.as_bytes()).unwrap();
        (out, n)
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rewrite_first_column() {
        let input = b"1\t1234\t5678\t3\tACGT\n1\t9000\t9100\t1\tGG\n";
        let (out, n) = rewrite(input, "17");
        assert_eq!(n, 2);
        assert_eq!(out, b"17\t1234\t5678\t3\tACGT\n17\t9000\t9100\t1\tGG\n");
    }

    #[test]
    fn test_rewrite_edge_cases() {
        // Single column, no final newline, CRLF, empty line, non-UTF-8 bytes
        let input = b"scaffold_9\nx\t\xff\xfe\t\r\n\nlast\tline";
        let (out, n) = rewrite(input, "3");
        assert_eq!(n, 4);
        assert_eq!(out, b"3\n3\t\xff\xfe\t\n3\n3\tline\n");

        let (out, n) = rewrite(b"", "1");
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_copy_errors_name_their_side() {
        let mut out: Vec<u8> = vec![];
        let result = rewrite_first_column(BufReader::new(BrokenReader), &mut out, b"1");
        assert!(matches!(result, Err(CopyError::Read(_))));

        let result = rewrite_first_column(Cursor::new(b"a\tb\n".to_vec()), &mut BrokenWriter, b"1");
        assert!(matches!(result, Err(CopyError::Write(_))));
    }

    #[test]
    fn test_materialize_unreadable_source() {
        // A directory opens fine but fails on read, and it is still there afterwards
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("A.MSMC.txt");
        std::fs::create_dir(&source).unwrap();
        let target = dir.path().join("1.MSMC.txt");

        match materialize_draw(&source, &target, 1) {
            Err(BootstrapError::Io { path, .. }) => assert_eq!(path, source),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_materialize_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("A.MSMC.txt");
        std::fs::write(&source, "A\t1\n").unwrap();
        let target = dir.path().join("no_such_dir/1.MSMC.txt");

        match materialize_draw(&source, &target, 1) {
            Err(BootstrapError::Io { path, .. }) => assert_eq!(path, target),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_materialize_draw() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("C.MSMC.txt");
        let target = dir.path().join("1.MSMC.txt");
        std::fs::write(&source, "scaffold_C\t10\t20\t2\nscaffold_C\t30\t40\t5\n").unwrap();

        let n = materialize_draw(&source, &target, 1).unwrap();
        assert_eq!(n, 2);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "1\t10\t20\t2\n1\t30\t40\t5\n");

        // Overwrites an existing file
        std::fs::write(&source, "x\ty\n").unwrap();
        materialize_draw(&source, &target, 1).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "1\ty\n");
    }

    #[test]
    fn test_materialize_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gone.MSMC.txt");
        let result = materialize_draw(&source, &dir.path().join("1.MSMC.txt"), 1);
        match result {
            Err(BootstrapError::Io { path, .. }) => assert_eq!(path, source),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }
}
