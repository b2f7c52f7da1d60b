//! Filename-labelled re-identification datasets.
//!
//! Scans `<root>/<dataset>/{train,query,test}/*.jpg`, reads identity and camera labels from
//! names such as `0037_c2s1_000151_01.jpg`, and exposes the train, query and gallery splits.

pub mod dataset;

pub use dataset::config::DatasetConfig;
pub use dataset::error::DatasetError;
pub use dataset::info::{dataset_stats, print_dataset_info, SplitStats};
pub use dataset::marvel2016::Marvel2016;
pub use dataset::parser::{parse_labels, process_dir, MAX_PID};
pub use dataset::registry::{DatasetConstructor, DatasetRegistry};
pub use dataset::reid_dataset::ReidDataset;
pub use dataset::sample::{Label, Sample};
pub use dataset::split::DatasetSplit;
