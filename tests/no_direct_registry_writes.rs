// tests/no_direct_registry_writes.rs
// Fails if UI code takes mutable access to the data model. All registry and
// history mutation must flow through the request events handled in
// grid::systems::logic.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

#[test]
fn ui_never_mutates_the_registry_directly() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let ui_dir = Path::new(manifest_dir).join("src").join("ui");

    let mut files = Vec::new();
    collect_rs_files(&ui_dir, &mut files);
    assert!(!files.is_empty(), "no UI sources found under src/ui");

    // Patterns indicating mutable access to the data model from UI systems
    let bad_patterns = [
        "ResMut<GridRegistry>",
        "ResMut<GridHistory>",
        "ResMut<SaveIndicator>",
        "registry.row_mut(",
        "registry.restore(",
        ".column_mut(",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for pat in &bad_patterns {
            if content.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("Direct data-model mutation found in UI code:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!(
                "  {} contains pattern '{}': emit a Request* event instead\n",
                file, pat
            ));
        }
        panic!("{}", msg);
    }
}
