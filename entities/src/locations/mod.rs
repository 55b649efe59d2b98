use serde::{Deserialize, Serialize};
use shared_kernel::string_key;

string_key!(ProvinceName);
string_key!(DistrictName);
string_key!(SectorName);
string_key!(CellName);
string_key!(VillageName);

/// An address specified all the way down to the village, as submitted by a
/// borrower or organization form.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddressPath {
    pub province: ProvinceName,
    pub district: DistrictName,
    pub sector: SectorName,
    pub cell: CellName,
    pub village: VillageName,
}

/// The state of an address form while the user is still choosing. Levels are
/// filled top-down; the form owns resetting everything below a changed level.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AddressSelection {
    pub province: Option<ProvinceName>,
    pub district: Option<DistrictName>,
    pub sector: Option<SectorName>,
    pub cell: Option<CellName>,
}

impl AddressSelection {
    pub fn province(province: impl Into<ProvinceName>) -> Self {
        Self {
            province: Some(province.into()),
            ..Default::default()
        }
    }

    pub fn district(self, district: impl Into<DistrictName>) -> Self {
        Self {
            district: Some(district.into()),
            ..self
        }
    }

    pub fn sector(self, sector: impl Into<SectorName>) -> Self {
        Self {
            sector: Some(sector.into()),
            ..self
        }
    }

    pub fn cell(self, cell: impl Into<CellName>) -> Self {
        Self {
            cell: Some(cell.into()),
            ..self
        }
    }
}
