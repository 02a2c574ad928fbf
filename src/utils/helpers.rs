use crate::error::IngestionError;
use crate::models::SeedRecord;
use std::path::Path;

pub fn load_seed_file(file_path: impl AsRef<Path>) -> Result<Vec<SeedRecord>, IngestionError> {
    let raw_data = std::fs::read_to_string(file_path)?;
    let records: Vec<SeedRecord> = serde_json::from_str(&raw_data)?;
    Ok(records)
}

pub fn is_remote_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_remote_sources() {
        assert!(is_remote_source("https://s3.amazonaws.com/seed.json"));
        assert!(is_remote_source("http://localhost:9000/seed.json"));
        assert!(!is_remote_source("./data/seed.json"));
        assert!(!is_remote_source("/var/seed.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_seed_file("/definitely/not/here/seed.json");

        assert!(matches!(result, Err(IngestionError::Read(_))));
    }
}
