use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // cortex-m-rt's link.x does `INCLUDE memory.x`, so it has to be on the search path.
    let memory_src = manifest_dir.join("memory.x");
    fs::copy(&memory_src, out_dir.join("memory.x")).expect("copy memory.x -> OUT_DIR");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={}", memory_src.display());
    println!("cargo:rerun-if-changed=build.rs");
}
