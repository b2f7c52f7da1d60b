use super::sample::Sample;
use super::split::DatasetSplit;

/// A re-identification dataset whose splits were scanned at construction.
pub trait ReidDataset {
    fn name(&self) -> &str;
    fn train(&self) -> &[Sample];
    fn query(&self) -> &[Sample];
    fn gallery(&self) -> &[Sample];

    fn split(&self, split: DatasetSplit) -> &[Sample] {
        match split {
            DatasetSplit::Train => self.train(),
            DatasetSplit::Query => self.query(),
            DatasetSplit::Gallery => self.gallery(),
        }
    }

    fn len(&self) -> usize {
        self.train().len() + self.query().len() + self.gallery().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
