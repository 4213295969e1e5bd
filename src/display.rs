//! The host markers are drawn by
//!
//! A map knows three pixel spaces:
//! - *inner* coordinates are aligned to the tiles and move with the map
//! - *outer* (object) coordinates are aligned to the viewport
//! - *screen* coordinates are the outer ones shifted by the viewport's position on screen

use nalgebra::Vector2;

use crate::canvas::Canvas;
use crate::location::Location;
use crate::projection::Projection;

/// Position in pixels
pub type ScreenPosition = Vector2<f32>;

/// Side length of a single tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Projection provider of a map
pub trait MapDisplay {
    /// Location to inner, i.e. tile aligned, coordinates
    fn inner_object_from_location(&self, location: &Location) -> ScreenPosition;

    /// Location to outer, i.e. viewport aligned, coordinates
    fn object_from_location(&self, location: &Location) -> ScreenPosition;

    /// Location to screen coordinates
    fn screen_position(&self, location: &Location) -> ScreenPosition;

    /// Screen coordinates to location
    ///
    /// Used to move markers around by dragging them.
    fn location_from_screen(&self, position: ScreenPosition) -> Location;
}

/// A display together with the graphics contexts for both of its coordinate systems
pub struct Map<D: MapDisplay, C: Canvas> {
    pub display: D,

    /// Canvas for the inner coordinate system
    pub inner: C,

    /// Canvas for the outer coordinate system
    pub outer: C,
}

impl<D: MapDisplay, C: Canvas> Map<D, C> {
    pub fn new(display: D, inner: C, outer: C) -> Self {
        Map {
            display,
            inner,
            outer,
        }
    }

    /// Unwrap the canvases, dropping the display
    pub fn into_canvases(self) -> (C, C) {
        (self.inner, self.outer)
    }
}

/// Slippy map viewport
#[derive(Copy, Clone, Debug)]
pub struct TileDisplay<P: Projection> {
    pub projection: P,

    /// Location shown in the viewport's center
    pub center: Location,

    /// Each zoom level doubles the map's size
    pub zoom: f64,

    pub width: f32,
    pub height: f32,

    /// Viewport's top left corner on screen
    pub offset: ScreenPosition,

    /// Margin the inner canvas extends beyond the viewport on every side
    pub inner_padding: f32,
}

impl<P: Projection> TileDisplay<P> {
    pub fn new(projection: P, center: Location, zoom: f64, width: f32, height: f32) -> Self {
        TileDisplay {
            projection,
            center,
            zoom,
            width,
            height,
            offset: ScreenPosition::zeros(),
            inner_padding: 0.0,
        }
    }

    /// Size of the whole world in pixels at the current zoom
    #[inline]
    fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    fn world_pixel(&self, location: &Location) -> Vector2<f64> {
        self.projection.project(location) * self.world_size()
    }

    #[inline]
    fn half_size(&self) -> Vector2<f64> {
        Vector2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl<P: Projection> MapDisplay for TileDisplay<P> {
    fn inner_object_from_location(&self, location: &Location) -> ScreenPosition {
        self.object_from_location(location).add_scalar(self.inner_padding)
    }

    fn object_from_location(&self, location: &Location) -> ScreenPosition {
        let object = self.world_pixel(location) - self.world_pixel(&self.center) + self.half_size();
        object.map(|f| f as f32)
    }

    fn screen_position(&self, location: &Location) -> ScreenPosition {
        self.object_from_location(location) + self.offset
    }

    fn location_from_screen(&self, position: ScreenPosition) -> Location {
        let object = (position - self.offset).map(|f| f as f64);
        let world = object - self.half_size() + self.world_pixel(&self.center);
        self.projection.unproject(world / self.world_size())
    }
}
