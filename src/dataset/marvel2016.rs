use std::path::{Path, PathBuf};

use super::config::DatasetConfig;
use super::error::DatasetError;
use super::parser::process_dir;
use super::reid_dataset::ReidDataset;
use super::sample::Sample;
use super::split::DatasetSplit;

pub const DATASET_DIR: &str = "marvel2016";
pub const DATASET_NAME: &str = "marvel2016";

/// MARVEL maritime vessel dataset (Gundogdu et al., ACCV 2016), laid out like Market-1501.
///
/// 1501 identities plus background, 6257 train, 2706 query and 8083 gallery images.
pub struct Marvel2016 {
    dataset_dir: PathBuf,
    train: Vec<Sample>,
    query: Vec<Sample>,
    gallery: Vec<Sample>,
}

impl Marvel2016 {
    pub fn new(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let dataset_dir = config.root.join(DATASET_DIR);

        let train_dir = dataset_dir.join(DatasetSplit::Train.dir_name());
        let query_dir = dataset_dir.join(DatasetSplit::Query.dir_name());
        let gallery_dir = dataset_dir.join(DatasetSplit::Gallery.dir_name());

        check_before_run(&[&dataset_dir, &train_dir, &query_dir, &gallery_dir])?;

        let train = process_dir(&train_dir, DATASET_NAME, DatasetSplit::Train, config.sort_dataset)?;
        let query = process_dir(&query_dir, DATASET_NAME, DatasetSplit::Query, config.sort_dataset)?;
        let gallery = process_dir(&gallery_dir, DATASET_NAME, DatasetSplit::Gallery, config.sort_dataset)?;

        Ok(Marvel2016 {
            dataset_dir,
            train,
            query,
            gallery,
        })
    }

    pub fn dataset_dir(&self) -> &Path {
        &self.dataset_dir
    }
}

impl ReidDataset for Marvel2016 {
    fn name(&self) -> &str {
        DATASET_NAME
    }

    fn train(&self) -> &[Sample] {
        &self.train
    }

    fn query(&self) -> &[Sample] {
        &self.query
    }

    fn gallery(&self) -> &[Sample] {
        &self.gallery
    }
}

fn check_before_run(required: &[&Path]) -> Result<(), DatasetError> {
    for path in required {
        if !path.exists() {
            return Err(DatasetError::DirectoryNotFound(path.display().to_string()));
        }
    }
    Ok(())
}
