use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DatasetSplit {
    Train,
    Query,
    Gallery,
}

impl DatasetSplit {
    pub const ALL: [DatasetSplit; 3] = [DatasetSplit::Train, DatasetSplit::Query, DatasetSplit::Gallery];

    /// Directory holding this split under the dataset root. The gallery lives in `test`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Query => "query",
            DatasetSplit::Gallery => "test",
        }
    }

    pub fn is_train(&self) -> bool {
        matches!(self, DatasetSplit::Train)
    }
}

impl fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Query => "query",
            DatasetSplit::Gallery => "gallery",
        };
        f.write_str(name)
    }
}
