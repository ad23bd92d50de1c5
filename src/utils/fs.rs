use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::utils::error::{DocpageError, Result};

/// Check if a path exists and is a file
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Read page input from a file, or from stdin when the path is `-`
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if path == Path::new("-") {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        return Ok(contents);
    }

    if !is_file(path) {
        return Err(DocpageError::Generic(format!(
            "Input file not found: {}", path.display()
        )));
    }

    read_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Title").unwrap();

        let contents = read_input(file.path()).unwrap();
        assert_eq!(contents, "# Title");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input("/definitely/not/here.md").unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }
}
