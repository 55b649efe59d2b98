use lazy_static::lazy_static;
use serde::Deserialize;
use shared_kernel::configuration::config;
use std::path::PathBuf;

#[derive(Deserialize)]
pub struct Settings {
    pub location_data: LocationDataSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationDataSettings {
    pub file: PathBuf,
}

lazy_static! {
    pub static ref SETTINGS_CONFIG: Settings = config::<Settings>().unwrap();
}
