use std::path::PathBuf;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // The first argument selects the photo directory; without one the
    // built-in sample gallery is shown.
    let photos_dir = std::env::args_os().nth(1).map(PathBuf::from);
    photo_wall::run_app(photos_dir)
}
