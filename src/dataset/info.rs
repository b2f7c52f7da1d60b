use std::collections::HashSet;

use super::reid_dataset::ReidDataset;
use super::sample::Sample;
use super::split::DatasetSplit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitStats {
    pub num_pids: usize,
    pub num_images: usize,
    pub num_cams: usize,
}

impl SplitStats {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let pids: HashSet<_> = samples.iter().map(|s| &s.pid).collect();
        let cams: HashSet<_> = samples.iter().map(|s| &s.camid).collect();
        SplitStats {
            num_pids: pids.len(),
            num_images: samples.len(),
            num_cams: cams.len(),
        }
    }
}

pub fn dataset_stats(dataset: &dyn ReidDataset) -> [(DatasetSplit, SplitStats); 3] {
    DatasetSplit::ALL.map(|split| (split, SplitStats::from_samples(dataset.split(split))))
}

pub fn print_dataset_info(dataset: &dyn ReidDataset) {
    println!("Dataset Information: {}", dataset.name());
    println!("-------------------");
    println!("  {:<8} | {:>6} | {:>8} | {:>7}", "subset", "# ids", "# images", "# cams");
    println!("  ---------------------------------------");
    for (split, stats) in dataset_stats(dataset) {
        println!(
            "  {:<8} | {:>6} | {:>8} | {:>7}",
            split.to_string(),
            stats.num_pids,
            stats.num_images,
            stats.num_cams
        );
    }
    println!();
    println!("Total size: {}", dataset.len());
}
