use std::fmt;
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

/// The high score lives in the working directory as a bare decimal
/// integer, the format the game has always used.
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

#[derive(Debug)]
pub enum HighScoreError {
    Io(io::Error),
    Parse(ParseIntError),
}

impl fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighScoreError::Io(e) => write!(f, "IO error: {}", e),
            HighScoreError::Parse(e) => write!(f, "not a valid high score: {}", e),
        }
    }
}

impl std::error::Error for HighScoreError {}

impl From<io::Error> for HighScoreError {
    fn from(e: io::Error) -> Self {
        HighScoreError::Io(e)
    }
}

impl From<ParseIntError> for HighScoreError {
    fn from(e: ParseIntError) -> Self {
        HighScoreError::Parse(e)
    }
}

/// Reads the stored high score. A missing or unparseable file is an
/// error for the caller to surface; there is no fallback value.
pub fn load<P: AsRef<Path>>(path: P) -> Result<u32, HighScoreError> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.trim().parse()?)
}

/// Overwrites the stored high score with the decimal string of `value`.
pub fn save<P: AsRef<Path>>(path: P, value: u32) -> Result<(), HighScoreError> {
    fs::write(path, value.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn loads_a_stored_score() {
        let path = temp_path("serpent_load_test.txt");
        fs::write(&path, "7").unwrap();
        assert_eq!(load(&path).unwrap(), 7);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn trailing_whitespace_is_accepted() {
        let path = temp_path("serpent_newline_test.txt");
        fs::write(&path, "12\n").unwrap();
        assert_eq!(load(&path).unwrap(), 12);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_overwrites_with_decimal_text() {
        let path = temp_path("serpent_save_test.txt");
        fs::write(&path, "7").unwrap();
        save(&path, 10).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "10");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(temp_path("serpent_missing_test.txt")).unwrap_err();
        assert!(matches!(err, HighScoreError::Io(_)));
    }

    #[test]
    fn garbage_content_is_a_parse_error() {
        let path = temp_path("serpent_garbage_test.txt");
        fs::write(&path, "not a number").unwrap();
        assert!(matches!(load(&path).unwrap_err(), HighScoreError::Parse(_)));
        fs::remove_file(&path).unwrap();
    }
}
