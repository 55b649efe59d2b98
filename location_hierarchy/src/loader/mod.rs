use crate::tree::LocationTree;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read the location data file")]
    Io(#[from] std::io::Error),
    #[error("The location data file is not a valid province-to-village hierarchy")]
    Malformed(#[from] serde_json::Error),
    #[error("The location data file contains no provinces")]
    EmptyDocument,
}

/// Reads the hierarchy from `path`. Any failure here is a startup failure
/// for the embedding application; lookups never observe a partially loaded
/// tree.
#[tracing::instrument]
pub fn from_path(path: &Path) -> Result<LocationTree, LoadError> {
    let file = File::open(path)?;
    let tree = from_reader(BufReader::new(file))?;
    tracing::info!(
        provinces = tree.province_count(),
        villages = tree.village_count(),
        "Loaded the location hierarchy"
    );
    Ok(tree)
}

pub fn from_reader(reader: impl Read) -> Result<LocationTree, LoadError> {
    let tree: LocationTree = serde_json::from_reader(reader)?;
    if tree.is_empty() {
        return Err(LoadError::EmptyDocument);
    }
    Ok(tree)
}

pub fn from_document(document: &str) -> Result<LocationTree, LoadError> {
    from_reader(document.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::{from_document, from_path, LoadError};
    use rstest::rstest;
    use std::path::Path;

    #[test]
    fn test_well_formed_document_loads() {
        let tree = from_document(
            r#"{"ProvinceA": {"DistrictX": {"SectorY": {"CellZ": ["Village1"]}}}}"#,
        )
        .expect("document to load");

        assert_eq!(tree.province_count(), 1);
        assert_eq!(tree.village_count(), 1);
    }

    #[rstest]
    #[case::district_level_is_a_list(r#"{"ProvinceA": ["DistrictX"]}"#)]
    #[case::leaf_is_not_a_list_of_names(
        r#"{"ProvinceA": {"DistrictX": {"SectorY": {"CellZ": [1, 2]}}}}"#
    )]
    #[case::truncated(r#"{"ProvinceA"#)]
    fn test_malformed_document_is_rejected(#[case] document: &str) {
        let result = from_document(document);
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_document_without_provinces_is_rejected() {
        let result = from_document("{}");
        assert!(matches!(result, Err(LoadError::EmptyDocument)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = from_path(Path::new("data/does_not_exist.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
