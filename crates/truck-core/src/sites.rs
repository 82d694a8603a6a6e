//! Fixed locations the truck can drive to.

use crate::{GeoPoint, TruckError, TruckResult};

/// The truck's home base and its indexed customer list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sites {
    pub base: GeoPoint,
    pub customers: Vec<GeoPoint>,
}

impl Sites {
    pub fn new(base: GeoPoint, customers: Vec<GeoPoint>) -> Self {
        Self { base, customers }
    }

    /// Base in Redmond and ten parks around Seattle.
    pub fn seattle() -> Self {
        Self {
            base: GeoPoint::new(47.644702, -122.130137),
            customers: vec![
                GeoPoint::new(47.645892, -122.336954), // Gasworks Park
                GeoPoint::new(47.688741, -122.402965), // Golden Gardens Park
                GeoPoint::new(47.551093, -122.249266), // Seward Park
                GeoPoint::new(47.555698, -122.065996), // Lake Sammamish Park
                GeoPoint::new(47.663747, -122.120879), // Marymoor Park
                GeoPoint::new(47.857295, -122.316355), // Meadowdale Beach Park
                GeoPoint::new(47.530250, -122.393055), // Lincoln Park
                GeoPoint::new(47.503266, -122.200194), // Gene Coulon Park
                GeoPoint::new(47.591094, -122.226833), // Luther Burbank Park
                GeoPoint::new(47.544120, -122.221673), // Pioneer Park
            ],
        }
    }

    /// Look up a customer by the (possibly negative) index a remote command
    /// carries.
    pub fn customer(&self, index: i64) -> TruckResult<GeoPoint> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.customers.get(i).copied())
            .ok_or(TruckError::CustomerNotFound(index))
    }
}

impl Default for Sites {
    fn default() -> Self {
        Self::seattle()
    }
}
