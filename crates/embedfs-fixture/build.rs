#[path = "src/fixture.rs"]
mod fixture;

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=testdata");
    println!("cargo:rerun-if-changed=src/fixture.rs");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    for (file, config) in [
        ("assets.rs", fixture::config()),
        ("private_assets.rs", fixture::private_config()),
    ] {
        let source = embedfs::generate(&config).expect("failed to render testdata");
        fs::write(out_dir.join(file), source).expect("failed to write generated module");
    }
}
