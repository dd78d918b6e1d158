use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Where data is loaded from, or stored to.
// FUTURE maybe this should be a url?
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
)]
pub enum Source {
    File(PathBuf),
}

impl Source {
    pub fn try_from_existing_file(path: PathBuf) -> Result<Source, SourceError> {
        if !path.exists() {
            return Err(SourceError::PathDoesNotExist(path));
        }
        if !path.is_file() {
            return Err(SourceError::PathIsNotAFile(path));
        }
        Ok(Source::File(path))
    }

    /// No checks are made that the path exists, use this for output files.
    pub fn from_path(path: PathBuf) -> Source {
        Source::File(path)
    }

    pub fn path(&self) -> &Path {
        match self {
            Source::File(path) => path,
        }
    }

    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.path()
            .extension()
            .map(|extension| {
                extension
                    .to_string_lossy()
                    .to_lowercase()
            })
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => f.write_str(path.display().to_string().as_str()),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("Path does not exist. path: {0}")]
    PathDoesNotExist(PathBuf),
    #[error("Path is not a file. path: {0}")]
    PathIsNotAFile(PathBuf),
}

#[cfg(test)]
mod source_tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use crate::source::{Source, SourceError};
    use crate::test::build_temp_file;

    #[rstest]
    #[case("parts.csv", Some("csv"))]
    #[case("parts.JSON", Some("json"))]
    #[case("parts", None)]
    fn extension(#[case] path: &str, #[case] expected_result: Option<&str>) {
        // given
        let source = Source::from_path(PathBuf::from(path));

        // when
        let result = source.extension();

        // then
        assert_eq!(result.as_deref(), expected_result);
    }

    #[test]
    fn existing_file() -> anyhow::Result<()> {
        // given
        let temp_dir = tempfile::tempdir()?;
        let (path, _file_name) = build_temp_file(&temp_dir, "parts", "csv");
        std::fs::write(&path, "Name,Description\n")?;

        // when
        let result = Source::try_from_existing_file(path.clone())?;

        // then
        assert_eq!(result, Source::File(path.clone()));
        assert_eq!(result.path(), path.as_path());

        Ok(())
    }

    #[test]
    fn directory_is_not_a_file() -> anyhow::Result<()> {
        // given
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().to_path_buf();

        // when
        let result = Source::try_from_existing_file(path.clone());

        // then
        assert_eq!(result, Err(SourceError::PathIsNotAFile(path)));

        Ok(())
    }

    #[test]
    fn missing_file() {
        // given
        let missing = PathBuf::from("/definitely/not/here/parts.csv");

        // when
        let result = Source::try_from_existing_file(missing.clone());

        // then
        assert_eq!(result, Err(SourceError::PathDoesNotExist(missing)));
    }
}
