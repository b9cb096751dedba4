//! Generation inputs shared by the build script and the tests.

use embedfs::Config;

/// Embedded tree, relative to this crate's manifest
pub const ROOT: &str = "testdata";
/// Fixed modification time so the output doesn't depend on checkout time
pub const MOD_TIME: i64 = 1_500_000_000;

/// Public, compressed module `assets`
pub fn config() -> Config {
    Config::new([ROOT])
        .prefix(ROOT)
        .mod_time(MOD_TIME.to_string())
        .invocation("--prefix testdata --modtime 1500000000 testdata")
}

/// Crate-private, uncompressed module `private_assets`
pub fn private_config() -> Config {
    Config::new([ROOT])
        .module("private_assets")
        .prefix(ROOT)
        .mod_time(MOD_TIME.to_string())
        .private(true)
        .no_compression(true)
}
