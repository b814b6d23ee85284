use std::path::PathBuf;

fn main() {
    // Tell Cargo to re-run this build script if configs/ changes
    println!("cargo:rerun-if-changed=configs/");

    // The configs directory is embedded with include_dir! in the library;
    // here we just make sure it exists so the macro has something to embed.
    let configs_path = PathBuf::from("configs");
    if !configs_path.exists() {
        std::fs::create_dir_all(&configs_path)
            .expect("Failed to create configs directory");
    }

    println!("cargo:rustc-env=CONFIGS_DIR={}", configs_path.display());
}
