//! Shared test utilities and fixtures for dataset loader tests

use std::fs;
use std::path::{Path, PathBuf};


/// Write a dataset CSV file into a test directory and return its path
pub fn write_dataset(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A small valid dataset with the full required column set
pub fn valid_dataset_csv() -> &'static str {
    "name,state,city,address,lattitude,longitude,type\n\
     Indiranagar Hub,Karnataka,Bengaluru,100 Feet Road,12.9719,77.6412,DC\n\
     Koramangala Point,Karnataka,Bengaluru,80 Feet Road,12.9352,77.6245,AC\n\
     Whitefield Plaza,Karnataka,Bengaluru,ITPL Main Road,12.9698,77.7500,DC\n"
}

/// A dataset mixing valid rows with rows that must be dropped
pub fn mixed_validity_dataset_csv() -> &'static str {
    "name,state,city,address,lattitude,longitude,type\n\
     Good One,Karnataka,Bengaluru,1 First Street,12.90,77.60,AC\n\
     Bad Latitude,Karnataka,Bengaluru,2 Second Street,abc,77.61,AC\n\
     Good Two,Karnataka,Bengaluru,3 Third Street,12.92,77.62,DC\n\
     Empty Longitude,Karnataka,Bengaluru,4 Fourth Street,12.93,,DC\n\
     Infinite Latitude,Karnataka,Bengaluru,5 Fifth Street,inf,77.64,AC\n"
}
