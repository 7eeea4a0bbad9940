use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let config_path = crate_dir.join("cbindgen.toml");

    println!("cargo:rerun-if-changed={}", config_path.display());
    println!("cargo:rerun-if-changed=src");

    let header_dir = crate_dir.join("include");
    std::fs::create_dir_all(&header_dir)?;

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(cbindgen::Config::from_file(&config_path)?)
        .generate()?;
    bindings.write_to_file(header_dir.join("torus.h"));
    Ok(())
}
