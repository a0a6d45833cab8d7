//! Archive packing against real assembled projects.

use shotcraft_codegen::ProjectAssembler;
use shotcraft_core::{ComponentDescriptor, FileContent, RouteEntry, VirtualFileTree};
use shotcraft_packaging::{DEFAULT_ROOT_FOLDER, compute_sha256, pack, package, unpack};
use std::io::Cursor;
use tempfile::TempDir;

fn assembled_project() -> VirtualFileTree {
    let descriptors = vec![
        ComponentDescriptor::new(
            "MainPage",
            "export class MainPage {}",
            "<h1>Main</h1>",
            "h1 { color: red; }",
        ),
        ComponentDescriptor::new("AboutPage", "export class AboutPage {}", "<p>About</p>", ""),
    ];
    let routes = vec![
        RouteEntry::new("", "MainPage"),
        RouteEntry::new("about", "AboutPage"),
    ];
    ProjectAssembler::new().assemble(&descriptors, Some(&routes))
}

#[test]
fn test_archive_round_trip() {
    let tree = assembled_project();
    let bytes = pack(&tree, DEFAULT_ROOT_FOLDER).unwrap();
    let restored = unpack(&bytes, DEFAULT_ROOT_FOLDER).unwrap();

    assert_eq!(restored.len(), tree.len());
    for (path, content) in tree.iter() {
        assert_eq!(
            restored.get(path).map(FileContent::as_bytes),
            Some(content.as_bytes()),
            "content mismatch for {path}"
        );
    }
    let original: Vec<&str> = tree.paths().collect();
    let unpacked: Vec<&str> = restored.paths().collect();
    assert_eq!(original, unpacked);
}

#[test]
fn test_entries_live_under_root_folder() {
    let bytes = pack(&assembled_project(), "my_app").unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert!(archive.file_names().all(|name| name.starts_with("my_app/")));
    assert!(
        archive
            .file_names()
            .any(|name| name == "my_app/src/app/main-page/main-page.component.ts")
    );
    assert!(archive.file_names().any(|name| name == "my_app/src/assets/.gitkeep"));
}

#[test]
fn test_entries_are_deflated() {
    let bytes = pack(&assembled_project(), DEFAULT_ROOT_FOLDER).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let entry = archive
        .by_name("generated_angular_project/package.json")
        .unwrap();
    assert_eq!(entry.compression(), zip::CompressionMethod::Deflated);
}

#[test]
fn test_deterministic_bytes() {
    let tree = assembled_project();
    let first = pack(&tree, DEFAULT_ROOT_FOLDER).unwrap();
    let second = pack(&assembled_project(), DEFAULT_ROOT_FOLDER).unwrap();

    assert_eq!(first, second);
    assert_eq!(compute_sha256(&first), compute_sha256(&second));
}

#[test]
fn test_binary_content_written_verbatim() {
    let mut tree = VirtualFileTree::new();
    let image = vec![0x89, b'P', b'N', b'G', 0x00, 0xff, 0xfe];
    tree.insert("src/assets/logo.png", image.clone());
    tree.insert("README.md", "# hi\n");

    let bytes = pack(&tree, "root").unwrap();
    let restored = unpack(&bytes, "root").unwrap();

    assert_eq!(
        restored.get("src/assets/logo.png"),
        Some(&FileContent::Binary(image))
    );
    assert_eq!(restored.get_text("README.md"), Some("# hi\n"));
}

#[test]
fn test_unicode_text_is_utf8() {
    let mut tree = VirtualFileTree::new();
    tree.insert("src/app/app.component.html", "<p>Grüße 👋</p>");

    let bytes = pack(&tree, "root").unwrap();
    let restored = unpack(&bytes, "root").unwrap();
    assert_eq!(restored.get_text("src/app/app.component.html"), Some("<p>Grüße 👋</p>"));
}

#[test]
fn test_empty_tree_packs() {
    let bytes = pack(&VirtualFileTree::new(), "root").unwrap();
    assert!(unpack(&bytes, "root").unwrap().is_empty());
}

#[test]
fn test_unpack_rejects_foreign_root() {
    let bytes = pack(&assembled_project(), "one").unwrap();
    assert!(unpack(&bytes, "two").is_err());
}

#[test]
fn test_package_writes_archive_and_checksum() {
    let temp = TempDir::new().unwrap();
    let packaged = package(&assembled_project(), DEFAULT_ROOT_FOLDER).unwrap();
    let archive_path = temp.path().join("out").join("project.zip");

    packaged.write_to(&archive_path).unwrap();
    let checksum_path = packaged.write_checksum(&archive_path).unwrap();

    assert_eq!(std::fs::read(&archive_path).unwrap(), packaged.bytes);
    assert_eq!(checksum_path, temp.path().join("out").join("project.zip.sha256"));
    let checksum = std::fs::read_to_string(checksum_path).unwrap();
    assert_eq!(checksum, format!("{}  project.zip\n", packaged.sha256));
    assert_eq!(compute_sha256(&std::fs::read(&archive_path).unwrap()), packaged.sha256);
}

#[test]
fn test_truncated_archive_is_rejected() {
    let bytes = pack(&assembled_project(), "root").unwrap();
    let truncated = &bytes[..bytes.len() / 2];
    let err = unpack(truncated, "root").unwrap_err();
    assert!(err.to_string().starts_with("Packaging failed"));
}

/// Flip the stored CRC-32 of the first central directory record.
fn corrupt_first_checksum(bytes: &mut [u8]) {
    let record = bytes
        .windows(4)
        .position(|window| window == b"PK\x01\x02")
        .unwrap();
    bytes[record + 16] ^= 0xff;
}

#[test]
fn test_checksum_mismatch_is_rejected() {
    let mut bytes = pack(&assembled_project(), "root").unwrap();
    corrupt_first_checksum(&mut bytes);

    let err = unpack(&bytes, "root").unwrap_err();
    assert!(matches!(err, shotcraft_core::Error::Packaging { .. }));
    assert!(err.to_string().contains("Invalid checksum"), "{err}");
}

#[test]
fn test_traversing_names_are_rejected() {
    let mut tree = VirtualFileTree::new();
    tree.insert("src/app/../../../escape.ts", "x");
    let err = pack(&tree, "root").unwrap_err();
    assert!(err.to_string().contains("Unsafe archive entry path"), "{err}");

    let err = pack(&assembled_project(), "../root").unwrap_err();
    assert!(matches!(err, shotcraft_core::Error::Packaging { .. }));
}

#[test]
fn test_hostile_component_names_stay_under_root() {
    let descriptors = vec![
        ComponentDescriptor::new("../../../Evil", "export class Evil {}", "<p></p>", ""),
        ComponentDescriptor::new("..", "export class Dots {}", "<p></p>", ""),
    ];
    let tree = ProjectAssembler::new().assemble(&descriptors, None);
    let bytes = pack(&tree, "root").unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert!(
        archive
            .file_names()
            .all(|name| name.starts_with("root/") && !name.split('/').any(|part| part == ".."))
    );
    assert!(archive.file_names().any(|name| name == "root/src/app/-evil/-evil.component.ts"));
}
