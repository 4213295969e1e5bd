use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::display::{Map, MapDisplay};
use crate::location::Location;
use crate::marker::Marker;
use crate::markers::AnyMarker;

/// Indexes of markers hit by a single point
///
/// Markers rarely overlap, so a few hits are kept on the stack.
pub type Hits = SmallVec<[usize; 4]>;

/// An ordered collection of markers drawn together
///
/// Markers added later are drawn on top of earlier ones.
#[derive(Clone, Debug)]
pub struct MarkerSet<M: Marker = AnyMarker> {
    markers: Vec<M>,
    pub visible: bool,
}

impl<M: Marker> Default for MarkerSet<M> {
    fn default() -> Self {
        MarkerSet {
            markers: Vec::new(),
            visible: true,
        }
    }
}

impl<M: Marker> MarkerSet<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, marker: M) {
        self.markers.push(marker);
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&M> {
        self.markers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.markers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut M> {
        self.markers.iter_mut()
    }

    /// Draw every marker's inner part followed by every marker's outer part
    ///
    /// Does nothing while the set is hidden.
    pub fn draw(&self, map: &mut Map<impl MapDisplay, impl Canvas>) {
        if !self.visible {
            return;
        }
        for marker in self.markers.iter() {
            marker.draw(map);
        }
        for marker in self.markers.iter() {
            marker.draw_outer(map);
        }
        log::trace!("Drew {} markers", self.markers.len());
    }

    /// Indexes of all markers containing the point given in screen coordinates
    pub fn hits(&self, display: &impl MapDisplay, x: f32, y: f32) -> Hits {
        let hits: Hits = self
            .markers
            .iter()
            .enumerate()
            .filter(|(_, marker)| marker.is_inside(display, x, y))
            .map(|(index, _)| index)
            .collect();
        log::debug!("({x}, {y}) hit {} markers", hits.len());
        hits
    }

    /// The topmost marker containing the point given in screen coordinates
    pub fn first_hit(&self, display: &impl MapDisplay, x: f32, y: f32) -> Option<&M> {
        self.markers
            .iter()
            .rev()
            .find(|marker| marker.is_inside(display, x, y))
    }

    /// The marker closest to a location
    pub fn nearest(&self, location: &Location) -> Option<&M> {
        self.markers
            .iter()
            .map(|marker| (marker, marker.distance_to(location)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(marker, _)| marker)
    }
}

impl<M: Marker> FromIterator<M> for MarkerSet<M> {
    fn from_iter<T: IntoIterator<Item = M>>(iter: T) -> Self {
        MarkerSet {
            markers: iter.into_iter().collect(),
            visible: true,
        }
    }
}

impl<M: Marker> Extend<M> for MarkerSet<M> {
    fn extend<T: IntoIterator<Item = M>>(&mut self, iter: T) {
        self.markers.extend(iter);
    }
}
