use crate::config::SETTINGS_CONFIG;
use crate::loader;
use crate::tree::LocationTree;
use anyhow::Context;
use entities::locations::{
    AddressPath, AddressSelection, CellName, DistrictName, ProvinceName, SectorName, VillageName,
};
use std::sync::Arc;

/// Handle to the process-wide location hierarchy. Cloning is cheap and every
/// clone reads the same immutable tree, so form handlers share one instance
/// without any coordination.
#[derive(Clone)]
pub struct LocationHierarchy {
    tree: Arc<LocationTree>,
}

impl LocationHierarchy {
    /// Loads the hierarchy from the configured data file, once, at startup.
    /// A missing or malformed file is fatal for the embedding application,
    /// never an empty tree.
    pub fn new() -> anyhow::Result<Self> {
        let file = &SETTINGS_CONFIG.location_data.file;
        let tree = loader::from_path(file).with_context(|| {
            format!(
                "Failed to load the location hierarchy from {}",
                file.display()
            )
        })?;
        Ok(Self::from_tree(tree))
    }

    pub fn from_tree(tree: LocationTree) -> Self {
        Self {
            tree: Arc::new(tree),
        }
    }

    pub fn provinces(&self) -> Vec<ProvinceName> {
        self.tree.provinces()
    }

    pub fn districts(&self, province: &str) -> Vec<DistrictName> {
        self.tree.districts(province)
    }

    pub fn sectors(&self, province: &str, district: &str) -> Vec<SectorName> {
        self.tree.sectors(province, district)
    }

    pub fn cells(&self, province: &str, district: &str, sector: &str) -> Vec<CellName> {
        self.tree.cells(province, district, sector)
    }

    pub fn villages(
        &self,
        province: &str,
        district: &str,
        sector: &str,
        cell: &str,
    ) -> Vec<VillageName> {
        self.tree.villages(province, district, sector, cell)
    }

    /// Validation for submitted addresses: true only when the path resolves
    /// segment by segment down to the village.
    pub fn is_valid_address(&self, path: &AddressPath) -> bool {
        self.tree.contains(path)
    }

    /// Option set for the next unfilled level of an address form.
    pub fn options_for(&self, selection: &AddressSelection) -> Vec<String> {
        self.tree.next_options(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::LocationHierarchy;
    use entities::locations::AddressPath;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref TRACING: () = shared_kernel::tracing::config_telemetry("location_hierarchy");
    }

    fn hierarchy() -> LocationHierarchy {
        lazy_static::initialize(&TRACING);
        LocationHierarchy::new().expect("the bundled data file to load")
    }

    #[test]
    fn test_bundled_hierarchy_loads_with_all_provinces() {
        let provinces = hierarchy().provinces();

        assert_eq!(provinces.len(), 5);
        assert_eq!(provinces[0].inner(), "Kigali City");
    }

    #[test]
    fn test_every_province_resolves_to_districts() {
        let hierarchy = hierarchy();

        for province in hierarchy.provinces() {
            let districts = hierarchy.districts(province.as_ref());
            assert!(!districts.is_empty(), "province {province} has no districts");
        }
    }

    #[test]
    fn test_every_full_path_ends_in_villages() {
        let hierarchy = hierarchy();

        for province in hierarchy.provinces() {
            for district in hierarchy.districts(province.as_ref()) {
                for sector in hierarchy.sectors(province.as_ref(), district.as_ref()) {
                    for cell in
                        hierarchy.cells(province.as_ref(), district.as_ref(), sector.as_ref())
                    {
                        let villages = hierarchy.villages(
                            province.as_ref(),
                            district.as_ref(),
                            sector.as_ref(),
                            cell.as_ref(),
                        );
                        assert!(!villages.is_empty(), "cell {cell} has no villages");
                    }
                }
            }
        }
    }

    #[test]
    fn test_submitted_address_is_checked_to_the_village() {
        let hierarchy = hierarchy();
        let address = AddressPath {
            province: "Kigali City".into(),
            district: "Gasabo".into(),
            sector: "Remera".into(),
            cell: "Rukiri I".into(),
            village: "Amajyambere".into(),
        };
        assert!(hierarchy.is_valid_address(&address));

        let mismatched = AddressPath {
            village: "Gatobotobo".into(),
            ..address
        };
        assert!(!hierarchy.is_valid_address(&mismatched));
    }
}
