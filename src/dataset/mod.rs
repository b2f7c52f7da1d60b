pub mod config;
pub mod error;
pub mod info;
pub mod marvel2016;
pub mod parser;
pub mod registry;
pub mod reid_dataset;
pub mod sample;
pub mod split;
