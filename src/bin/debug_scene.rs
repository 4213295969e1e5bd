use geomarker::display::MapDisplay;
use geomarker::marker::Located;
use geomarker::Scene;

fn main() {
    let Some(file) = std::env::args().skip(1).next() else {
        eprintln!("Missing scene file");
        return;
    };
    let content = match std::fs::read_to_string(file) {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("Unable to read file:\n{err}");
            return;
        }
    };
    let scene: Scene = match serde_json::from_str(&content) {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("Unable to parse file:\n{err}");
            return;
        }
    };
    println!("{scene:#?}");

    if let Err(err) = scene.validate() {
        eprintln!("Invalid scene:\n{err}");
        return;
    }

    // Where each marker ends up on screen
    let display = scene.display();
    for (index, marker) in scene.markers.iter().enumerate() {
        let position = display.screen_position(&marker.location());
        println!("{index}: ({}, {})", position.x, position.y);
    }
}
