fn main() {
    // Shown in the footer
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Embedded content: project write-ups and the content profile table
    println!("cargo:rerun-if-changed=projects");
    println!("cargo:rerun-if-changed=config/profiles.json");
    println!("cargo:rerun-if-changed=build.rs");
}
