use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub root: PathBuf,
    pub sort_dataset: bool,
}

impl DatasetConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    // read_dir gives no ordering guarantee, sorting makes scans reproducible across filesystems
    pub fn with_sort_dataset(mut self, sort_dataset: bool) -> Self {
        self.sort_dataset = sort_dataset;
        self
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("datasets"),
            sort_dataset: false,
        }
    }
}
