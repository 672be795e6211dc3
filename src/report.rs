use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::types::model::place::PlaceRecord;

/// Write one completed search as a pretty-printed JSON array and return the
/// absolute path of the file. The file name concatenates the landmark, the
/// radius and the keyword the way the operator typed them.
pub fn write_report(
    dir: &Path,
    landmark_name: &str,
    radius: u32,
    keyword: &str,
    places: &[PlaceRecord],
) -> Result<PathBuf> {
    let path = dir.join(format!("{landmark_name}方圓{radius}公尺{keyword}介紹.json"));
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, places)?;
    writer.flush()?;
    Ok(fs::canonicalize(&path)?)
}
