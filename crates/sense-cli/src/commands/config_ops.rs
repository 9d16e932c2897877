use std::path::Path;

use sense_engine::settings::{Settings, DEFAULT_SETTINGS_TOML};

pub fn settings_export() {
    print!("{DEFAULT_SETTINGS_TOML}");
}

pub fn settings_validate(file: &str) {
    let s = die!(Settings::open(Path::new(file)), "Error: {}");
    let d = &s.disambiguation;
    println!(
        "OK: window={}, scheme={}, pair_threshold={}, context_threshold={}, trace={}",
        d.window, d.scheme, d.pair_threshold, d.context_threshold, d.trace
    );
}
