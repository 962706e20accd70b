// File: crates/statchart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs when shaping labels.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's DirectWrite font lookup reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
