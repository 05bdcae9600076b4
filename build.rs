use std::env;

const CHIP_FEATURE_PREFIX: &str = "CARGO_FEATURE_TM4C123";

fn main() {
    let chips: Vec<String> = env::vars()
        .map(|(name, _)| name)
        .filter(|name| name.starts_with(CHIP_FEATURE_PREFIX))
        .map(|name| name["CARGO_FEATURE_".len()..].to_ascii_lowercase())
        .collect();

    let chip = match chips.as_slice() {
        [chip] => chip,
        [] => panic!("No tm4c123xx Cargo feature enabled"),
        _ => panic!("Multiple tm4c123xx Cargo features enabled: {:?}", chips),
    };

    println!("cargo:rustc-env=TM4C123_CHIP={}", chip);
    println!("cargo:rerun-if-changed=build.rs");
}
