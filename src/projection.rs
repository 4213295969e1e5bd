use std::f64::consts::PI;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Highest latitude the square web mercator map covers
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Maps locations onto the unit square and back
///
/// `x` grows towards east, `y` grows towards south.
pub trait Projection: Copy + 'static {
    fn project(&self, location: &Location) -> Vector2<f64> {
        let lambda = location.lon.to_radians();
        let phi = location.lat.to_radians();
        let (x, y) = self._project(lambda, phi);
        Vector2::new(x, y)
    }

    fn unproject(&self, point: Vector2<f64>) -> Location {
        let (lambda, phi) = self._unproject(point.x, point.y);
        Location::new(phi.to_degrees(), lambda.to_degrees())
    }

    fn _project(&self, lambda: f64, phi: f64) -> (f64, f64);

    fn _unproject(&self, x: f64, y: f64) -> (f64, f64);
}

/// Equirectangular projection
#[derive(Copy, Clone, Debug)]
pub struct Simple;
impl Projection for Simple {
    #[inline]
    fn _project(&self, lambda: f64, phi: f64) -> (f64, f64) {
        ((lambda + PI) / (2.0 * PI), (PI / 2.0 - phi) / PI)
    }

    #[inline]
    fn _unproject(&self, x: f64, y: f64) -> (f64, f64) {
        (x * 2.0 * PI - PI, PI / 2.0 - y * PI)
    }
}

/// Spherical mercator as used by slippy map tiles
#[derive(Copy, Clone, Debug)]
pub struct WebMercator;
impl Projection for WebMercator {
    #[inline]
    fn _project(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let max = MAX_MERCATOR_LAT.to_radians();
        let phi = phi.clamp(-max, max);
        let x = (lambda + PI) / (2.0 * PI);
        let y = (PI - (PI / 4.0 + phi / 2.0).tan().ln()) / (2.0 * PI);
        (x, y)
    }

    #[inline]
    fn _unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let lambda = x * 2.0 * PI - PI;
        let phi = 2.0 * (PI - y * 2.0 * PI).exp().atan() - PI / 2.0;
        (lambda, phi)
    }
}

/// Projection selectable at runtime, e.g. from a scene file
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnyProjection {
    Simple,
    #[default]
    WebMercator,
}
impl Projection for AnyProjection {
    #[inline]
    fn _project(&self, lambda: f64, phi: f64) -> (f64, f64) {
        match self {
            AnyProjection::Simple => Simple._project(lambda, phi),
            AnyProjection::WebMercator => WebMercator._project(lambda, phi),
        }
    }

    #[inline]
    fn _unproject(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            AnyProjection::Simple => Simple._unproject(x, y),
            AnyProjection::WebMercator => WebMercator._unproject(x, y),
        }
    }
}
