use std::ffi::OsString;
use std::path::PathBuf;

use predicates::function::{function, FnPredicate};
use tempfile::TempDir;

/// Returns the full path and the file name of a file in the temporary directory.
///
/// The file is not created.
pub fn build_temp_file(temp_dir: &TempDir, prefix: &str, extension: &str) -> (PathBuf, OsString) {
    let mut path = PathBuf::from(temp_dir.path());
    let file_name = format!("{}.{}", prefix, extension);
    path.push(&file_name);

    (path, OsString::from(file_name))
}

/// Splits each argument on whitespace, so that `"--size L"` becomes `["--size", "L"]`.
pub fn prepare_args(args: Vec<&str>) -> Vec<&str> {
    args.into_iter()
        .flat_map(|arg| arg.split_whitespace())
        .collect()
}

/// A predicate that prints the output it is given and always succeeds, for use with `assert_cmd`, e.g. `.stdout(print("stdout"))`.
pub fn print(message: &str) -> FnPredicate<impl Fn(&[u8]) -> bool + '_, [u8]> {
    function(move |content: &[u8]| {
        println!("{}:\n{}", message, String::from_utf8_lossy(content));
        true
    })
}
