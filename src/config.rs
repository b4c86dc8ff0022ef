// ⚙️ Run configuration - where to read and where to write

use std::path::PathBuf;

pub const DEFAULT_USERS_FILE: &str = "users.json";
pub const DEFAULT_COMPANIES_FILE: &str = "companies.json";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub users_path: PathBuf,
    pub companies_path: PathBuf,
    pub output_path: PathBuf,
}

impl RunConfig {
    pub fn new(
        users_path: impl Into<PathBuf>,
        companies_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        RunConfig {
            users_path: users_path.into(),
            companies_path: companies_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::new(DEFAULT_USERS_FILE, DEFAULT_COMPANIES_FILE, DEFAULT_OUTPUT_FILE)
    }
}
