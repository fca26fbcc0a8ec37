use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

fn main() {
    let Some(script) = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .filter(|p| p.is_file())
    else {
        eprintln!(
            "Usage: {} <script.json>",
            std::env::current_exe()
                .ok()
                .as_deref()
                .and_then(Path::file_name)
                .and_then(OsStr::to_str)
                .unwrap_or("slidetabs-replay")
        );
        std::process::exit(2);
    };

    slidetabs_core::init_logging();

    if let Err(e) = slidetabs_replay::run(&script) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
