use crate::canvas::Canvas;
use crate::display::{Map, MapDisplay, ScreenPosition};
use crate::geo;
use crate::location::Location;

/// Anything owning a single geographic location
pub trait Located {
    fn location(&self) -> Location;

    fn set_location(&mut self, location: Location);

    #[inline]
    fn set_lat_lon(&mut self, lat: f64, lon: f64) {
        self.set_location(Location::new(lat, lon));
    }

    /// Distance to another location in kilometres
    fn distance_to(&self, location: &Location) -> f64 {
        geo::distance(&self.location(), location)
    }
}

/// Implements [`Located`] for structs storing their location in a `location` field
macro_rules! impl_located {
    ($($T:ty),*) => {
        $(
            impl $crate::marker::Located for $T {
                #[inline]
                fn location(&self) -> $crate::location::Location {
                    self.location
                }

                #[inline]
                fn set_location(&mut self, location: $crate::location::Location) {
                    self.location = location;
                }
            }
        )*
    };
}
pub(crate) use impl_located;

/// A visual element placed on a map
///
/// Implementors provide the `render_*` hooks and [`contains_point`];
/// the map-level methods resolve the marker's position through the map's display
/// and hand it to those hooks.
///
/// [`contains_point`]: Marker::contains_point
pub trait Marker: Located {
    /// Draw in inner coordinates i.e. moving with the tiles
    fn render_inner(&self, canvas: &mut impl Canvas, x: f32, y: f32);

    /// Draw in outer coordinates i.e. fixed to the viewport, e.g. labels
    fn render_outer(&self, canvas: &mut impl Canvas, x: f32, y: f32);

    /// Check whether `(check_x, check_y)` lies inside this marker placed at `(x, y)`
    ///
    /// All four values are screen coordinates.
    fn contains_point(&self, check_x: f32, check_y: f32, x: f32, y: f32) -> bool;

    /// Override to draw depending on the display's state
    fn render_inner_with(
        &self,
        canvas: &mut impl Canvas,
        x: f32,
        y: f32,
        _display: &impl MapDisplay,
    ) {
        self.render_inner(canvas, x, y);
    }

    /// Override to draw depending on the display's state
    fn render_outer_with(
        &self,
        canvas: &mut impl Canvas,
        x: f32,
        y: f32,
        _display: &impl MapDisplay,
    ) {
        self.render_outer(canvas, x, y);
    }

    /// Draw onto the map's inner canvas
    fn draw(&self, map: &mut Map<impl MapDisplay, impl Canvas>) {
        let Map { display, inner, .. } = map;
        let position = display.inner_object_from_location(&self.location());
        self.render_inner_with(inner, position.x, position.y, &*display);
    }

    /// Draw onto the map's outer canvas
    fn draw_outer(&self, map: &mut Map<impl MapDisplay, impl Canvas>) {
        let Map { display, outer, .. } = map;
        let position = display.object_from_location(&self.location());
        self.render_outer_with(outer, position.x, position.y, &*display);
    }

    fn screen_position(&self, display: &impl MapDisplay) -> ScreenPosition {
        display.screen_position(&self.location())
    }

    /// Check whether a point given in screen coordinates lies inside this marker
    fn is_inside(&self, display: &impl MapDisplay, check_x: f32, check_y: f32) -> bool {
        let position = self.screen_position(display);
        self.contains_point(check_x, check_y, position.x, position.y)
    }
}
