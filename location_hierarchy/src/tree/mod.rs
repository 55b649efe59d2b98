use entities::locations::{
    AddressPath, AddressSelection, CellName, DistrictName, ProvinceName, SectorName, VillageName,
};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Deserialize;

type DistrictMap = IndexMap<DistrictName, SectorMap>;
type SectorMap = IndexMap<SectorName, CellMap>;
type CellMap = IndexMap<CellName, Vec<VillageName>>;

/// The whole administrative hierarchy, keyed province → district → sector →
/// cell, with the village lists as leaves. Constructed once at startup and
/// only ever read afterwards. Iteration order is the document order of the
/// backing data file, which is also the order the dropdowns present.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct LocationTree {
    provinces: IndexMap<ProvinceName, DistrictMap>,
}

impl LocationTree {
    pub fn provinces(&self) -> Vec<ProvinceName> {
        self.provinces.keys().cloned().collect_vec()
    }

    /// District names under the given province. An empty or unknown province
    /// resolves to no districts rather than an error: the consuming form
    /// treats "no options yet" as a normal state, not a failure.
    pub fn districts(&self, province: &str) -> Vec<DistrictName> {
        self.provinces
            .get(province)
            .map(|districts| districts.keys().cloned().collect_vec())
            .unwrap_or_default()
    }

    pub fn sectors(&self, province: &str, district: &str) -> Vec<SectorName> {
        self.sectors_under(province, district)
            .map(|sectors| sectors.keys().cloned().collect_vec())
            .unwrap_or_default()
    }

    pub fn cells(&self, province: &str, district: &str, sector: &str) -> Vec<CellName> {
        self.cells_under(province, district, sector)
            .map(|cells| cells.keys().cloned().collect_vec())
            .unwrap_or_default()
    }

    pub fn villages(
        &self,
        province: &str,
        district: &str,
        sector: &str,
        cell: &str,
    ) -> Vec<VillageName> {
        self.cells_under(province, district, sector)
            .and_then(|cells| cells.get(cell))
            .cloned()
            .unwrap_or_default()
    }

    /// True when every segment of the submitted address resolves, village
    /// included.
    pub fn contains(&self, path: &AddressPath) -> bool {
        let villages = self.villages(
            path.province.as_ref(),
            path.district.as_ref(),
            path.sector.as_ref(),
            path.cell.as_ref(),
        );
        villages.contains(&path.village)
    }

    /// Option set for the first level the form has not chosen yet; this is
    /// what drives the cascading dropdowns. A stale upstream choice simply
    /// resolves to an empty set, which the form renders as "no options".
    pub fn next_options(&self, selection: &AddressSelection) -> Vec<String> {
        let AddressSelection {
            province,
            district,
            sector,
            cell,
        } = selection;
        match (province, district, sector, cell) {
            (None, ..) => self.provinces().into_iter().map_into().collect_vec(),
            (Some(province), None, ..) => self
                .districts(province.as_ref())
                .into_iter()
                .map_into()
                .collect_vec(),
            (Some(province), Some(district), None, _) => self
                .sectors(province.as_ref(), district.as_ref())
                .into_iter()
                .map_into()
                .collect_vec(),
            (Some(province), Some(district), Some(sector), None) => self
                .cells(province.as_ref(), district.as_ref(), sector.as_ref())
                .into_iter()
                .map_into()
                .collect_vec(),
            (Some(province), Some(district), Some(sector), Some(cell)) => self
                .villages(
                    province.as_ref(),
                    district.as_ref(),
                    sector.as_ref(),
                    cell.as_ref(),
                )
                .into_iter()
                .map_into()
                .collect_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn village_count(&self) -> usize {
        self.provinces
            .values()
            .flat_map(|districts| districts.values())
            .flat_map(|sectors| sectors.values())
            .flat_map(|cells| cells.values())
            .map(|villages| villages.len())
            .sum()
    }

    fn sectors_under(&self, province: &str, district: &str) -> Option<&SectorMap> {
        self.provinces
            .get(province)
            .and_then(|districts| districts.get(district))
    }

    fn cells_under(&self, province: &str, district: &str, sector: &str) -> Option<&CellMap> {
        self.sectors_under(province, district)
            .and_then(|sectors| sectors.get(sector))
    }
}
