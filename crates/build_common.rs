// README-to-rustdoc helper shared by the crate build scripts.
// Include with: include!("../build_common.rs");
//
// The including build.rs must import std::env, std::fs and std::path::Path.

/// Copy the crate README into `OUT_DIR/README_GENERATED.md` with links that
/// rustdoc can resolve.
///
/// `src/foo.rs` style links become module links, and `../../README.md` links
/// point at the workspace repository URL when one is configured.
fn emit_readme_doc() {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let Ok(crate_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let Ok(out_dir) = env::var("OUT_DIR") else {
        return;
    };

    let readme = fs::read_to_string(Path::new(&crate_dir).join("README.md"))
        .unwrap_or_else(|_| String::new());

    let mut doc = readme.replace("](src/", "](").replace(".rs)", ")");
    if let Some(url) = workspace_repository(&crate_dir) {
        doc = doc.replace("](../../README.md", &format!("]({url}"));
    }

    if let Err(e) = fs::write(Path::new(&out_dir).join("README_GENERATED.md"), doc) {
        println!("cargo:warning=failed to write README_GENERATED.md: {e}");
    }
}

/// `repository = "..."` from the workspace manifest, if present.
fn workspace_repository(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        let value = line.strip_prefix("repository")?.trim_start().strip_prefix('=')?;
        let value = value.trim().trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}
