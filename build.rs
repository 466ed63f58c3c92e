use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // footer copyright
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
