const DEFAULTS_PATH: &str = "src/default_settings.toml";

/// Fails the build when the shipped defaults cannot be parsed or lack a
/// section the settings schema requires.
fn main() {
    println!("cargo:rerun-if-changed={DEFAULTS_PATH}");

    let table: toml::Table = include_str!("src/default_settings.toml")
        .parse()
        .unwrap_or_else(|e| panic!("{DEFAULTS_PATH} is not valid TOML: {e}"));

    for section in ["form", "labels", "batch"] {
        if !table.contains_key(section) {
            panic!("{DEFAULTS_PATH} is missing the [{section}] table");
        }
    }
}
