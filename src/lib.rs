use serde::{Deserialize, Serialize};

use crate::canvas::Recorder;
use crate::display::{Map, MapDisplay, ScreenPosition, TileDisplay};
use crate::location::Location;
use crate::manager::MarkerSet;
use crate::marker::Marker;
use crate::markers::AnyMarker;
use crate::projection::AnyProjection;

pub mod canvas;
pub mod display;
pub mod geo;
pub mod location;
pub mod manager;
pub mod marker;
pub mod markers;
pub mod projection;

/// Highest zoom level slippy map tiles exist for
pub const MAX_ZOOM: f64 = 22.0;

/// A map view together with the markers placed on it
#[derive(Serialize, Deserialize, Debug)]
pub struct Scene {
    pub center: Location,
    pub zoom: f64,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub projection: AnyProjection,
    #[serde(default)]
    pub inner_padding: f32,
    pub markers: Vec<AnyMarker>,
}

impl Scene {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!(
                "Viewport must have a positive size, got {}x{}",
                self.width, self.height
            ));
        }
        if !(0.0..=MAX_ZOOM).contains(&self.zoom) {
            return Err(format!("Zoom {} is outside of 0..={MAX_ZOOM}", self.zoom));
        }
        if !self.center.is_valid() {
            return Err(format!("Invalid center {:?}", self.center));
        }
        if !(self.inner_padding.is_finite() && self.inner_padding >= 0.0) {
            return Err(format!(
                "Inner padding must be finite and non-negative, got {}",
                self.inner_padding
            ));
        }
        for (index, marker) in self.markers.iter().enumerate() {
            marker
                .validate()
                .map_err(|err| format!("Marker {index}: {err}"))?;
        }
        Ok(())
    }

    /// Build the display described by this scene
    pub fn display(&self) -> TileDisplay<AnyProjection> {
        let mut display = TileDisplay::new(
            self.projection,
            self.center,
            self.zoom,
            self.width,
            self.height,
        );
        display.inner_padding = self.inner_padding;
        display
    }
}

/// Everything drawn for a scene
#[derive(Serialize, Debug, Default)]
pub struct Frame {
    pub inner: Recorder,
    pub outer: Recorder,
}

/// Render all of a scene's markers
pub fn render(scene: Scene) -> Result<(Frame, MarkerSet, TileDisplay<AnyProjection>), String> {
    scene.validate()?;
    let display = scene.display();
    let markers: MarkerSet = scene.markers.into_iter().collect();

    let mut map = Map::new(display, Recorder::new(), Recorder::new());
    markers.draw(&mut map);
    log::info!(
        "Rendered {} markers into {} inner and {} outer commands",
        markers.len(),
        map.inner.commands.len(),
        map.outer.commands.len()
    );

    let (inner, outer) = map.into_canvases();
    Ok((Frame { inner, outer }, markers, display))
}

/// Screen position of every marker, handy for picking points to hit test
pub fn screen_positions(
    markers: &MarkerSet,
    display: &impl MapDisplay,
) -> Vec<ScreenPosition> {
    markers
        .iter()
        .map(|marker| marker.screen_position(display))
        .collect()
}
