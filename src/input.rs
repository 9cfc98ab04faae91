use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Result;

/// Reads a whole file into its lines, without line terminators
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let lines = BufReader::new(file).lines().collect::<std::io::Result<Vec<_>>>()?;
    log::debug!("Read {} lines from {}", lines.len(), path.as_ref().display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn missing_file_is_io_error() {
        let err = read_lines("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn reads_lines_without_terminators() {
        let path = std::env::temp_dir().join(format!("hill_paths_input_{}.txt", std::process::id()));
        std::fs::write(&path, "abc\r\nde\nf").unwrap();
        let lines = read_lines(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(lines, vec!["abc", "de", "f"]);
    }
}
