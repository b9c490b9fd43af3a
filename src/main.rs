//! Native viewer: `scrollscape [options.toml]`.

use std::path::Path;

use scrollscape::{Options, Viewer};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("failed to load {path}: {e}; using defaults");
                Options::default()
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("viewer exited: {e}");
        std::process::exit(1);
    }
}
