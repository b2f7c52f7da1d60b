use std::fmt;
use std::path::{Path, PathBuf};

/// An identity or camera label.
///
/// Query and gallery samples keep the integer parsed from the filename. Train samples carry
/// the integer prefixed with the dataset name, so label spaces stay disjoint when several
/// datasets are merged for joint training.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Id(i64),
    Named(String),
}

impl Label {
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Label::Id(id) => Some(*id),
            Label::Named(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Label::Id(_) => None,
            Label::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Id(id) => write!(f, "{}", id),
            Label::Named(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Label {
    fn from(id: i64) -> Self {
        Label::Id(id)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::Named(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub path: PathBuf,
    pub pid: Label,
    pub camid: Label,
}

impl Sample {
    pub fn new(path: PathBuf, pid: impl Into<Label>, camid: impl Into<Label>) -> Self {
        Sample {
            path,
            pid: pid.into(),
            camid: camid.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The (path, pid, camid) shape downstream consumers expect.
    pub fn as_tuple(&self) -> (&Path, &Label, &Label) {
        (&self.path, &self.pid, &self.camid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display() {
        assert_eq!(Label::Id(37).to_string(), "37");
        assert_eq!(Label::Named("marvel2016_37".into()).to_string(), "marvel2016_37");
    }

    #[test]
    fn label_accessors() {
        assert_eq!(Label::Id(4).as_id(), Some(4));
        assert_eq!(Label::Id(4).as_name(), None);
        assert_eq!(Label::from("a_1".to_string()).as_name(), Some("a_1"));
    }
}
