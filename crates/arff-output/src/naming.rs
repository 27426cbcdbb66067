//! Output file and relation naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Suffix stripped from file names when deriving a relation name.
pub const ARFF_SUFFIX: &str = ".arff";

/// Prefix of the per-attribute min/max output.
pub const MINMAX_PREFIX: &str = "MinMax";

/// Prefix of the normalized dataset output.
pub const NORMALIZED_PREFIX: &str = "MinMaxNormalize";

/// Relation name written in the header of `path`: its file name without the
/// `.arff` suffix.
pub fn relation_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(ARFF_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// `prefix` concatenated onto the file name of `input`.
pub fn prefixed_file_name(input: &Path, prefix: &str) -> Result<OsString> {
    let file_name = input.file_name().ok_or_else(|| OutputError::NoFileName {
        path: input.to_path_buf(),
    })?;
    let mut name = OsString::from(prefix);
    name.push(file_name);
    Ok(name)
}

/// Destinations of the two output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub minmax: PathBuf,
    pub normalized: PathBuf,
}

impl OutputPaths {
    /// `MinMax<name>` and `MinMaxNormalize<name>` for an input named `<name>`.
    ///
    /// Files land in `output_dir` when given, otherwise next to the input.
    pub fn for_input(input: &Path, output_dir: Option<&Path>) -> Result<Self> {
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        Ok(Self {
            minmax: dir.join(prefixed_file_name(input, MINMAX_PREFIX)?),
            normalized: dir.join(prefixed_file_name(input, NORMALIZED_PREFIX)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_strips_arff_suffix() {
        assert_eq!(relation_name(Path::new("MinMaxmmtest.arff")), "MinMaxmmtest");
        assert_eq!(relation_name(Path::new("out/MinMaxNormalizeiris.arff")), "MinMaxNormalizeiris");
        assert_eq!(relation_name(Path::new("data.txt")), "data.txt");
        assert_eq!(relation_name(Path::new(".arff")), ".arff");
    }

    #[test]
    fn prefix_is_concatenated_onto_file_name() {
        assert_eq!(
            prefixed_file_name(Path::new("mmtest.arff"), MINMAX_PREFIX).unwrap(),
            OsString::from("MinMaxmmtest.arff")
        );
        assert!(prefixed_file_name(Path::new("/"), MINMAX_PREFIX).is_err());
    }

    #[test]
    fn outputs_sit_next_to_input() {
        let paths = OutputPaths::for_input(Path::new("mmtest.arff"), None).unwrap();
        assert_eq!(paths.minmax, PathBuf::from("MinMaxmmtest.arff"));
        assert_eq!(paths.normalized, PathBuf::from("MinMaxNormalizemmtest.arff"));

        let paths = OutputPaths::for_input(Path::new("data/iris.arff"), None).unwrap();
        assert_eq!(paths.minmax, Path::new("data").join("MinMaxiris.arff"));
    }

    #[test]
    fn output_dir_overrides_input_dir() {
        let paths =
            OutputPaths::for_input(Path::new("data/iris.arff"), Some(Path::new("out"))).unwrap();
        assert_eq!(paths.normalized, Path::new("out").join("MinMaxNormalizeiris.arff"));
    }
}
