//! The concrete kinds of markers

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Color, Style};
use crate::display::MapDisplay;
use crate::location::Location;
use crate::marker::{impl_located, Located, Marker};

/// Radius of a [`PointMarker`] if none is given
pub const DEFAULT_RADIUS: f32 = 5.0;

/// Width of a single character relative to the font size
///
/// Used to estimate a label's extent without any font metrics.
const CHAR_WIDTH: f32 = 0.6;

/// Gap between a label's anchor and its text
const LABEL_OFFSET: f32 = 4.0;

fn default_radius() -> f32 {
    DEFAULT_RADIUS
}

fn default_font_size() -> f32 {
    12.0
}

/// A filled circle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PointMarker {
    #[serde(default)]
    pub location: Location,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default)]
    pub style: Style,
}

impl PointMarker {
    pub fn new(location: Location) -> Self {
        PointMarker {
            location,
            ..Default::default()
        }
    }
}

impl Default for PointMarker {
    fn default() -> Self {
        PointMarker {
            location: Location::default(),
            radius: DEFAULT_RADIUS,
            style: Style::default(),
        }
    }
}

impl Marker for PointMarker {
    fn render_inner(&self, canvas: &mut impl Canvas, x: f32, y: f32) {
        self.style.apply(canvas);
        canvas.ellipse(x, y, self.radius * 2.0, self.radius * 2.0);
    }

    fn render_outer(&self, _canvas: &mut impl Canvas, _x: f32, _y: f32) {}

    fn contains_point(&self, check_x: f32, check_y: f32, x: f32, y: f32) -> bool {
        (Vector2::new(check_x, check_y) - Vector2::new(x, y)).norm() <= self.radius
    }
}

/// An axis aligned rectangle centered on its location
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RectMarker {
    #[serde(default)]
    pub location: Location,
    pub size: Vector2<f32>,
    #[serde(default)]
    pub style: Style,
}

impl RectMarker {
    pub fn new(location: Location, width: f32, height: f32) -> Self {
        RectMarker {
            location,
            size: Vector2::new(width, height),
            style: Style::default(),
        }
    }
}

impl Default for RectMarker {
    fn default() -> Self {
        RectMarker::new(Location::default(), 2.0 * DEFAULT_RADIUS, 2.0 * DEFAULT_RADIUS)
    }
}

impl Marker for RectMarker {
    fn render_inner(&self, canvas: &mut impl Canvas, x: f32, y: f32) {
        self.style.apply(canvas);
        let half = self.size / 2.0;
        canvas.rect(x - half.x, y - half.y, self.size.x, self.size.y);
    }

    fn render_outer(&self, _canvas: &mut impl Canvas, _x: f32, _y: f32) {}

    /// If the point lies exactly on the edge it is said to be contained.
    fn contains_point(&self, check_x: f32, check_y: f32, x: f32, y: f32) -> bool {
        let half = self.size / 2.0;
        x - half.x <= check_x
            && check_x <= x + half.x
            && y - half.y <= check_y
            && check_y <= y + half.y
    }
}

/// A text fixed to the screen next to a small dot moving with the map
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LabelMarker {
    #[serde(default)]
    pub location: Location,
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub style: Style,
}

impl LabelMarker {
    pub fn new(location: Location, text: impl Into<String>) -> Self {
        LabelMarker {
            location,
            text: text.into(),
            font_size: default_font_size(),
            style: Style::default(),
        }
    }

    /// Estimated size of the rendered text
    pub fn text_size(&self) -> Vector2<f32> {
        Vector2::new(
            self.text.chars().count() as f32 * CHAR_WIDTH * self.font_size,
            self.font_size,
        )
    }
}

impl Marker for LabelMarker {
    fn render_inner(&self, canvas: &mut impl Canvas, x: f32, y: f32) {
        self.style.apply(canvas);
        canvas.ellipse(x, y, LABEL_OFFSET, LABEL_OFFSET);
    }

    fn render_outer(&self, canvas: &mut impl Canvas, x: f32, y: f32) {
        canvas.fill(self.style.stroke.unwrap_or(Color::BLACK));
        canvas.text(&self.text, x + LABEL_OFFSET, y, self.font_size);
    }

    /// Tests against the text's box which sits on the baseline through `(x, y)`
    fn contains_point(&self, check_x: f32, check_y: f32, x: f32, y: f32) -> bool {
        let size = self.text_size();
        let left = x + LABEL_OFFSET;
        left <= check_x && check_x <= left + size.x && y - size.y <= check_y && check_y <= y
    }
}

/// Any of the markers above, as found in scene files
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyMarker {
    Point(PointMarker),
    Rect(RectMarker),
    Label(LabelMarker),
}

/// Accept only finite, non-negative sizes
fn check_size(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be finite and non-negative, got {value}"))
    }
}

impl AnyMarker {
    /// Check the location lies on the globe and all sizes are usable
    pub fn validate(&self) -> Result<(), String> {
        if !self.location().is_valid() {
            return Err(format!("invalid location {:?}", self.location()));
        }
        let style = match self {
            AnyMarker::Point(point) => {
                check_size("radius", point.radius)?;
                &point.style
            }
            AnyMarker::Rect(rect) => {
                check_size("width", rect.size.x)?;
                check_size("height", rect.size.y)?;
                &rect.style
            }
            AnyMarker::Label(label) => {
                check_size("font_size", label.font_size)?;
                &label.style
            }
        };
        check_size("stroke_weight", style.stroke_weight)
    }
}

impl From<PointMarker> for AnyMarker {
    fn from(marker: PointMarker) -> Self {
        AnyMarker::Point(marker)
    }
}
impl From<RectMarker> for AnyMarker {
    fn from(marker: RectMarker) -> Self {
        AnyMarker::Rect(marker)
    }
}
impl From<LabelMarker> for AnyMarker {
    fn from(marker: LabelMarker) -> Self {
        AnyMarker::Label(marker)
    }
}

impl_located!(PointMarker, RectMarker, LabelMarker);

/// Forward a method call to whichever marker is inside
macro_rules! dispatch {
    ($self:ident.$method:ident($($arg:expr),*)) => {
        match $self {
            AnyMarker::Point(marker) => marker.$method($($arg),*),
            AnyMarker::Rect(marker) => marker.$method($($arg),*),
            AnyMarker::Label(marker) => marker.$method($($arg),*),
        }
    };
}

impl Located for AnyMarker {
    fn location(&self) -> Location {
        dispatch!(self.location())
    }

    fn set_location(&mut self, location: Location) {
        dispatch!(self.set_location(location))
    }
}

impl Marker for AnyMarker {
    fn render_inner(&self, canvas: &mut impl Canvas, x: f32, y: f32) {
        dispatch!(self.render_inner(canvas, x, y))
    }

    fn render_outer(&self, canvas: &mut impl Canvas, x: f32, y: f32) {
        dispatch!(self.render_outer(canvas, x, y))
    }

    fn contains_point(&self, check_x: f32, check_y: f32, x: f32, y: f32) -> bool {
        dispatch!(self.contains_point(check_x, check_y, x, y))
    }

    fn render_inner_with(
        &self,
        canvas: &mut impl Canvas,
        x: f32,
        y: f32,
        display: &impl MapDisplay,
    ) {
        dispatch!(self.render_inner_with(canvas, x, y, display))
    }

    fn render_outer_with(
        &self,
        canvas: &mut impl Canvas,
        x: f32,
        y: f32,
        display: &impl MapDisplay,
    ) {
        dispatch!(self.render_outer_with(canvas, x, y, display))
    }
}

#[cfg(test)]
mod test {
    use crate::canvas::{Command, Recorder};
    use crate::display::{Map, ScreenPosition};
    use crate::location::Location;
    use crate::marker::test::MockDisplay;
    use crate::marker::{Located, Marker};
    use crate::markers::{AnyMarker, LabelMarker, PointMarker, RectMarker, DEFAULT_RADIUS};

    #[test]
    fn point_marker_radius() {
        let marker = PointMarker {
            radius: 5.0,
            ..Default::default()
        };
        let display = MockDisplay::at(100.0, 100.0);
        assert!(marker.is_inside(&display, 103.0, 103.0));
        assert!(marker.is_inside(&display, 105.0, 100.0));
        assert!(!marker.is_inside(&display, 110.0, 110.0));
    }

    #[test]
    fn point_marker_draws_circle() {
        let mut map = Map::new(MockDisplay::at(0.0, 0.0), Recorder::new(), Recorder::new());
        PointMarker::new(Location::new(1.0, 1.0)).draw(&mut map);
        PointMarker::default().draw_outer(&mut map);

        assert_eq!(
            map.inner.commands.last(),
            Some(&Command::Ellipse {
                x: 1000.0,
                y: 1000.0,
                width: DEFAULT_RADIUS * 2.0,
                height: DEFAULT_RADIUS * 2.0,
            })
        );
        assert!(map.outer.commands.is_empty());
    }

    #[test]
    fn rect_marker_contains_edges() {
        let marker = RectMarker::new(Location::default(), 20.0, 10.0);
        assert!(marker.contains_point(50.0, 50.0, 50.0, 50.0));
        assert!(marker.contains_point(60.0, 55.0, 50.0, 50.0));
        assert!(marker.contains_point(40.0, 45.0, 50.0, 50.0));
        assert!(!marker.contains_point(60.1, 50.0, 50.0, 50.0));
        assert!(!marker.contains_point(50.0, 44.9, 50.0, 50.0));
    }

    #[test]
    fn rect_marker_is_centered() {
        let mut recorder = Recorder::new();
        RectMarker::new(Location::default(), 20.0, 10.0).render_inner(&mut recorder, 50.0, 50.0);
        assert_eq!(
            recorder.commands.last(),
            Some(&Command::Rect {
                x: 40.0,
                y: 45.0,
                width: 20.0,
                height: 10.0
            })
        );
    }

    #[test]
    fn label_marker_draws_text_outside() {
        let label = LabelMarker::new(Location::new(52.39, 13.06), "Potsdam");
        let mut map = Map::new(MockDisplay::at(10.0, 10.0), Recorder::new(), Recorder::new());
        label.draw(&mut map);
        label.draw_outer(&mut map);

        assert!(!map
            .inner
            .commands
            .iter()
            .any(|command| matches!(command, Command::Text { .. })));
        assert!(matches!(
            map.outer.commands.last(),
            Some(Command::Text { text, x, .. }) if text == "Potsdam" && *x == -986.0
        ));
    }

    #[test]
    fn label_marker_hit_box() {
        // 4 chars at 10px => 24px wide, 10px high
        let label = LabelMarker {
            font_size: 10.0,
            ..LabelMarker::new(Location::default(), "Cafe")
        };
        assert!((label.text_size().x - 24.0).abs() < 1e-4);
        assert!(label.contains_point(10.0, 95.0, 0.0, 100.0));
        assert!(!label.contains_point(10.0, 101.0, 0.0, 100.0));
        assert!(!label.contains_point(2.0, 95.0, 0.0, 100.0));
        assert!(!label.contains_point(29.0, 95.0, 0.0, 100.0));
    }

    #[test]
    fn any_marker_dispatches() {
        let mut marker = AnyMarker::from(PointMarker::default());
        marker.set_lat_lon(1.0, 2.0);
        assert_eq!(marker.location(), Location::new(1.0, 2.0));
        let display = MockDisplay::at(0.0, 0.0);
        assert!(marker.is_inside(&display, 1.0, 1.0));
        assert_eq!(marker.screen_position(&display), ScreenPosition::new(0.0, 0.0));
    }

    #[test]
    fn any_marker_validate() {
        assert!(AnyMarker::from(PointMarker::default()).validate().is_ok());
        assert!(AnyMarker::from(RectMarker::new(Location::default(), 0.0, 3.0))
            .validate()
            .is_ok());

        let negative = AnyMarker::from(PointMarker {
            radius: -1.0,
            ..Default::default()
        });
        assert!(negative.validate().unwrap_err().starts_with("radius"));

        let not_a_number = AnyMarker::from(RectMarker::new(Location::default(), f32::NAN, 3.0));
        assert!(not_a_number.validate().unwrap_err().starts_with("width"));

        let huge = AnyMarker::from(LabelMarker {
            font_size: f32::INFINITY,
            ..LabelMarker::new(Location::default(), "Hi")
        });
        assert!(huge.validate().unwrap_err().starts_with("font_size"));

        let off_globe = AnyMarker::from(PointMarker::new(Location::new(91.0, 0.0)));
        assert!(off_globe.validate().unwrap_err().starts_with("invalid location"));
    }

    #[test]
    fn any_marker_from_json() {
        let markers: Vec<AnyMarker> = serde_json::from_str(
            r#"[
                {"kind": "point", "location": {"lat": 1.0, "lon": 2.0}},
                {"kind": "rect", "size": [4.0, 2.0]},
                {"kind": "label", "text": "Hi", "font_size": 8.0}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            markers,
            vec![
                PointMarker::new(Location::new(1.0, 2.0)).into(),
                RectMarker::new(Location::default(), 4.0, 2.0).into(),
                LabelMarker {
                    font_size: 8.0,
                    ..LabelMarker::new(Location::default(), "Hi")
                }
                .into(),
            ]
        );
    }
}
