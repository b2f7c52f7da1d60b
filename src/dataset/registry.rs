use std::collections::HashMap;

use super::config::DatasetConfig;
use super::error::DatasetError;
use super::marvel2016::Marvel2016;
use super::reid_dataset::ReidDataset;

pub type DatasetConstructor = fn(&DatasetConfig) -> Result<Box<dyn ReidDataset>, DatasetError>;

/// Name to constructor mapping, populated with explicit `register` calls at startup.
#[derive(Default)]
pub struct DatasetRegistry {
    constructors: HashMap<String, DatasetConstructor>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every dataset this crate ships.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .constructors
            .insert("Marvel2016".to_string(), build_marvel2016);
        registry
    }

    pub fn register(&mut self, name: &str, constructor: DatasetConstructor) -> Result<(), DatasetError> {
        if self.constructors.contains_key(name) {
            return Err(DatasetError::DuplicateDataset(name.to_string()));
        }
        self.constructors.insert(name.to_string(), constructor);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    pub fn build(&self, name: &str, config: &DatasetConfig) -> Result<Box<dyn ReidDataset>, DatasetError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| DatasetError::UnknownDataset(name.to_string()))?;
        constructor(config)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn build_marvel2016(config: &DatasetConfig) -> Result<Box<dyn ReidDataset>, DatasetError> {
    Ok(Box::new(Marvel2016::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample::Sample;

    struct Empty;

    impl ReidDataset for Empty {
        fn name(&self) -> &str {
            "empty"
        }
        fn train(&self) -> &[Sample] {
            &[]
        }
        fn query(&self) -> &[Sample] {
            &[]
        }
        fn gallery(&self) -> &[Sample] {
            &[]
        }
    }

    fn build_empty(_: &DatasetConfig) -> Result<Box<dyn ReidDataset>, DatasetError> {
        Ok(Box::new(Empty))
    }

    #[test]
    fn builtin_has_marvel2016() {
        let registry = DatasetRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["Marvel2016"]);
    }

    #[test]
    fn register_and_build() {
        let mut registry = DatasetRegistry::new();
        assert!(!registry.contains("Empty"));
        registry.register("Empty", build_empty).unwrap();
        assert!(registry.contains("Empty"));

        let dataset = registry.build("Empty", &DatasetConfig::default()).unwrap();
        assert_eq!(dataset.name(), "empty");
        assert!(dataset.is_empty());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = DatasetRegistry::with_builtin();
        let err = registry.register("Marvel2016", build_empty).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateDataset(name) if name == "Marvel2016"));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = DatasetRegistry::with_builtin();
        let err = registry.build("Market1501", &DatasetConfig::default()).err().unwrap();
        assert!(matches!(err, DatasetError::UnknownDataset(_)));
    }
}
