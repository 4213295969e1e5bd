use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Location {
        Location { lat, lon }
    }

    /// Check if the coordinate lies on the globe
    ///
    /// Latitude has to be in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

#[cfg(test)]
mod test {
    use crate::location::Location;

    #[test]
    fn default_is_origin() {
        assert_eq!(Location::default(), Location::new(0.0, 0.0));
    }

    #[test]
    fn validity() {
        assert!(Location::new(52.5, 13.4).is_valid());
        assert!(Location::new(-90.0, 180.0).is_valid());
        assert!(!Location::new(90.5, 0.0).is_valid());
        assert!(!Location::new(0.0, -180.1).is_valid());
        assert!(!Location::new(f64::NAN, 0.0).is_valid());
    }
}
