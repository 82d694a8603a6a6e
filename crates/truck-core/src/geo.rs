//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Route interpolation runs over
//! many small steps per tick and the arrival radius is only 10 m, so single
//! precision would visibly quantise positions at city scale.

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// The truck counts as arrived once it is closer than this to its destination.
pub const ARRIVAL_RADIUS_M: f64 = 10.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Degrees → radians.
#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// No antimeridian handling: every coordinate the truck visits is in the
    /// continental US.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lon = to_radians(other.lon - self.lon);
        let d_lat = to_radians(other.lat - self.lat);

        let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
            + to_radians(self.lat).cos()
                * to_radians(other.lat).cos()
                * ((d_lon / 2.0).sin() * (d_lon / 2.0).sin());

        let angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        angle * EARTH_RADIUS_M
    }

    /// Linear interpolation towards `other`; `t` is expected in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + t * (other.lat - self.lat),
            lon: self.lon + t * (other.lon - self.lon),
        }
    }
}

/// `true` iff `current` is strictly within [`ARRIVAL_RADIUS_M`] of `destination`.
#[inline]
pub fn has_arrived(current: GeoPoint, destination: GeoPoint) -> bool {
    current.distance_m(destination) < ARRIVAL_RADIUS_M
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
