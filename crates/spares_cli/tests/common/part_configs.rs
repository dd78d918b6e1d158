use std::path::PathBuf;

use indoc::indoc;
use tempfile::TempDir;
use util::test::build_temp_file;

pub fn write_mountain_csv(temp_dir: &TempDir) -> std::io::Result<PathBuf> {
    let (path, _file_name) = build_temp_file(temp_dir, "mountain", "csv");

    std::fs::write(&path, indoc! {r#"
        "Name","Description","NeedsSpare"
        "chain","10-speed",""
        "tire_size","2.1",""
        "front_shock","Manitou","false"
        "rear_shock","Fox",""
    "#})?;

    Ok(path)
}

pub fn write_mountain_json(temp_dir: &TempDir) -> std::io::Result<PathBuf> {
    let (path, _file_name) = build_temp_file(temp_dir, "mountain", "json");

    std::fs::write(&path, indoc! {r#"
        [
            ["chain", "10-speed"],
            ["tire_size", "2.1"],
            ["front_shock", "Manitou", false],
            ["rear_shock", "Fox"]
        ]
    "#})?;

    Ok(path)
}
