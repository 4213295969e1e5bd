use clap::{ArgAction, Parser, ValueEnum};
use geomarker::location::Location;
use geomarker::marker::Located;
use geomarker::{render, Frame, Scene};
use serde::Serialize;

#[derive(ValueEnum, Debug, Copy, Clone, Default)]
pub enum Format {
    #[default]
    Json,

    #[cfg(feature = "message-pack")]
    MessagePack,
}
impl Format {
    pub fn write(
        &self,
        mut writer: impl std::io::Write,
        data: &impl serde::Serialize,
    ) -> Result<(), String> {
        match self {
            Format::Json => serde_json::to_writer(writer, data).map_err(|error| error.to_string()),
            #[cfg(feature = "message-pack")]
            Format::MessagePack => {
                rmp_serde::encode::write(&mut writer, data).map_err(|error| error.to_string())
            }
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Scene file (json) to render
    file: String,

    /// Screen position to hit test the markers with
    #[clap(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    hit: Option<Vec<f32>>,

    /// Location to find the nearest marker to
    #[clap(
        long,
        num_args = 2,
        value_names = ["LAT", "LON"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    nearest: Option<Vec<f64>>,

    /// Data format when writing to stdout
    #[clap(value_enum, short, long, default_value_t = Default::default())]
    format: Format,
}

#[derive(Serialize, Debug)]
struct Output {
    #[serde(flatten)]
    frame: Frame,

    /// Indexes of the markers containing the `--hit` position
    #[serde(skip_serializing_if = "Option::is_none")]
    hits: Option<Vec<usize>>,

    /// Location and distance in km of the marker nearest to `--nearest`
    #[serde(skip_serializing_if = "Option::is_none")]
    nearest: Option<(Location, f64)>,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let Args {
        file,
        hit,
        nearest,
        format,
    } = Args::parse();

    let file = std::fs::File::open(file).map_err(|err| err.to_string())?;
    let scene: Scene = serde_json::from_reader(file).map_err(|err| err.to_string())?;

    let (frame, markers, display) = render(scene)?;

    let hits = match hit.as_deref() {
        Some(&[x, y]) => Some(markers.hits(&display, x, y).into_vec()),
        Some(values) => return Err(format!("--hit expects X Y, got {values:?}")),
        None => None,
    };
    let nearest = match nearest.as_deref() {
        Some(&[lat, lon]) => {
            let location = Location::new(lat, lon);
            markers
                .nearest(&location)
                .map(|marker| (marker.location(), marker.distance_to(&location)))
        }
        Some(values) => return Err(format!("--nearest expects LAT LON, got {values:?}")),
        None => None,
    };

    let output = Output {
        frame,
        hits,
        nearest,
    };
    format.write(std::io::stdout(), &output)?;

    Ok(())
}
