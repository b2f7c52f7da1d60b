use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, trace};

use super::error::DatasetError;
use super::sample::{Label, Sample};
use super::split::DatasetSplit;

/// Largest identity a filename may carry. 0 is background.
pub const MAX_PID: i64 = 1936;

/// Identity marking an image that belongs to no split.
pub const JUNK_PID: i64 = -1;

pub const IMAGE_EXTENSION: &str = "jpg";

static PID_CAMID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([-0-9]+)_c([0-9]{1,3})").expect("pid/camid regex should compile"));

/// Extracts `(pid, camid)` from an image filename, with camid made 0-based.
///
/// Returns `Ok(None)` for junk images (pid -1).
pub fn parse_labels(path: &Path) -> Result<Option<(i64, i64)>, DatasetError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DatasetError::FilenameMismatch { path: path.to_owned() })?;

    let captures = PID_CAMID_PATTERN
        .captures(file_name)
        .ok_or_else(|| DatasetError::FilenameMismatch { path: path.to_owned() })?;

    let pid = parse_int(path, &captures[1])?;
    if pid == JUNK_PID {
        return Ok(None);
    }
    if !(0..=MAX_PID).contains(&pid) {
        return Err(DatasetError::IdentityOutOfRange { path: path.to_owned(), pid });
    }

    let camid = parse_int(path, &captures[2])? - 1;
    Ok(Some((pid, camid)))
}

fn parse_int(path: &Path, value: &str) -> Result<i64, DatasetError> {
    value.parse().map_err(|_| DatasetError::InvalidLabel {
        path: path.to_owned(),
        value: value.to_string(),
    })
}

pub fn namespaced(dataset_name: &str, value: i64) -> String {
    format!("{}_{}", dataset_name, value)
}

/// Scans `dir` for `*.jpg` images and labels each one from its filename.
///
/// Train samples get dataset-prefixed labels, query and gallery samples keep raw integers.
/// The first malformed filename aborts the scan, nothing is returned for the directory.
pub fn process_dir(
    dir: &Path,
    dataset_name: &str,
    split: DatasetSplit,
    sort_dataset: bool,
) -> Result<Vec<Sample>, DatasetError> {
    debug!(dir = %dir.display(), %split, "scanning split directory");

    let mut img_paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()?;
    img_paths.retain(|path| is_image(path));

    if sort_dataset {
        img_paths.sort_unstable();
    }

    let mut data = Vec::with_capacity(img_paths.len());
    let mut junk = 0usize;
    for img_path in img_paths {
        let Some((pid, camid)) = parse_labels(&img_path)? else {
            trace!(path = %img_path.display(), "skipping junk image");
            junk += 1;
            continue;
        };

        let sample = if split.is_train() {
            Sample::new(
                img_path,
                Label::Named(namespaced(dataset_name, pid)),
                Label::Named(namespaced(dataset_name, camid)),
            )
        } else {
            Sample::new(img_path, pid, camid)
        };
        data.push(sample);
    }

    info!(dataset = dataset_name, %split, samples = data.len(), junk, "split loaded");
    Ok(data)
}

// Hidden files (e.g. `._` AppleDouble copies) are never dataset images
fn is_image(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == IMAGE_EXTENSION)
        .unwrap_or(false)
}
