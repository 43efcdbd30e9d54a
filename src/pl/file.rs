//! Whole-file reads and writes of sentence text.

use std::fs;
use std::path::Path;

use super::parse::parse;
use crate::err::ErrorKind;
use crate::sentence::Sentence;

/// Read all of `path` and parse it as one sentence.
///
/// A failed read is an [ErrorKind::Io], kept apart from [ErrorKind::Parse].
pub fn read_sentence(path: impl AsRef<Path>) -> Result<Sentence, ErrorKind> {
    let path = path.as_ref();
    let text = read_text(path)?;
    Ok(parse(&text)?)
}

pub fn read_text(path: impl AsRef<Path>) -> Result<String, ErrorKind> {
    let path = path.as_ref();
    log::info!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| ErrorKind::io(path, e))
}

/// Write `text` to `path`, replacing anything already there.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<(), ErrorKind> {
    let path = path.as_ref();
    log::info!("Writing {} bytes to {}", text.len(), path.display());
    fs::write(path, text).map_err(|e| ErrorKind::io(path, e))
}

#[cfg(test)]
mod file_test {
    use std::path::PathBuf;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{read_sentence, read_text, write_text};
    use crate::err::{ErrorKind, ParseError};
    use crate::pl::parse::parse;
    use crate::pl::random::random_instance;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("prop_cnf_{}_{name}", std::process::id()))
    }

    #[test]
    fn write_then_read() {
        let path = scratch("instance.cnf");
        let instance = random_instance(12, &mut StdRng::seed_from_u64(1));
        write_text(&path, &instance).unwrap();
        assert_eq!(read_text(&path).unwrap(), instance);
        assert_eq!(read_sentence(&path).unwrap(), parse(&instance).unwrap());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_overwrites() {
        let path = scratch("overwrite.cnf");
        write_text(&path, "(A v B v C) ^\n(D v E v F)").unwrap();
        write_text(&path, "~A").unwrap();
        assert_eq!(read_text(&path).unwrap(), "~A");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_io() {
        let path = scratch("does_not_exist.cnf");
        match read_sentence(&path) {
            Err(ErrorKind::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected an io error, got {other:?}"),
        }
    }

    #[test]
    fn bad_contents_are_parse() {
        let path = scratch("bad.cnf");
        write_text(&path, "(A v B").unwrap();
        let result = read_sentence(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ErrorKind::Parse(ParseError::ParenthesisMismatch(_)))
        ));
    }

    #[test]
    fn unwritable_path_is_io() {
        let path = scratch("no_such_dir").join("out.cnf");
        assert!(matches!(
            write_text(&path, "A"),
            Err(ErrorKind::Io { .. })
        ));
    }
}
