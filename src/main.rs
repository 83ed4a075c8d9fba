//! Demo window: drag to spin and tilt, release to coast.
//!
//! Usage: `trackball [options.toml]`

use std::path::Path;

use trackball::{TrackballOptions, Viewer};

fn main() {
    env_logger::init();

    // Optional TOML preset; anything it leaves out keeps its default.
    let options = match std::env::args().nth(1) {
        Some(path) => match TrackballOptions::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => TrackballOptions::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
