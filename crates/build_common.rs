// README-to-rustdoc step shared by every crate's build.rs.
// Pulled in with: include!("../build_common.rs");
//
// The including build.rs must import std::env, std::fs and std::path::Path.

/// Copy the crate README into OUT_DIR with links rewritten for rustdoc.
///
/// READMEs link to source files (`src/foo.rs`) so they read well on a
/// forge. In rustdoc those links must name modules instead, so the `src/`
/// prefix and the `.rs` suffix are dropped. A crate without a README gets
/// an empty page.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let content = fs::read_to_string(&readme_path).unwrap_or_default();
    let rustdoc_content = rewrite_source_links(&content);

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).expect("OUT_DIR is writable");
}

/// `[x](src/ports/mod.rs)` becomes `[x](ports/mod)`.
fn rewrite_source_links(content: &str) -> String {
    content.replace("](src/", "](").replace(".rs)", ")")
}
