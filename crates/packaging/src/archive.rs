//! ZIP serialization of project trees.
//!
//! This module handles:
//! - Writing every tree entry under a single top-level folder
//! - Fixed timestamps and permissions so identical trees give identical bytes
//! - Re-reading the finished archive to verify every entry's CRC-32
//! - SHA256 digests and checksum files for the written archive

use sha2::{Digest, Sha256};
use shotcraft_core::{Error, FileContent, Result, VirtualFileTree};
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Top-level folder used when the caller does not name one.
pub const DEFAULT_ROOT_FOLDER: &str = "generated_angular_project";

/// Permissions recorded for every entry.
const ENTRY_PERMISSIONS: u32 = 0o644;

/// A verified archive together with its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedProject {
    /// Archive bytes.
    pub bytes: Vec<u8>,
    /// SHA256 checksum hex string of `bytes`.
    pub sha256: String,
    /// Number of file entries in the archive.
    pub entry_count: usize,
}

impl PackagedProject {
    /// Line in the standard `sha256sum` format for an archive saved as `file_name`.
    #[must_use]
    pub fn checksum_line(&self, file_name: &str) -> String {
        format!("{}  {file_name}\n", self.sha256)
    }

    /// Write the archive to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.bytes)?;
        tracing::debug!(path = %path.display(), bytes = self.bytes.len(), "Wrote archive");
        Ok(())
    }

    /// Write `{archive}.sha256` next to an archive written at `archive_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `archive_path` has no file name or the checksum
    /// file cannot be written.
    pub fn write_checksum(&self, archive_path: &Path) -> Result<PathBuf> {
        let file_name = archive_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::packaging(format!(
                    "Archive path has no usable file name: {}",
                    archive_path.display()
                ))
            })?;
        let checksum_path = archive_path.with_file_name(format!("{file_name}.sha256"));
        std::fs::write(&checksum_path, self.checksum_line(file_name))?;
        Ok(checksum_path)
    }
}

/// Serialize `tree` into a ZIP archive rooted at `root_folder`.
///
/// Entries are written in the tree's iteration order as
/// `{root_folder}/{path}`, deflate-compressed. The archive is read back
/// before it is returned: any entry that cannot be read, fails its CRC check
/// or differs in name or count from what was written is a packaging error.
///
/// # Errors
///
/// Returns [`Error::Packaging`] if an entry name is absolute or contains a
/// `.`, `..` or backslash component, or if writing or verification fails.
pub fn pack(tree: &VirtualFileTree, root_folder: &str) -> Result<Vec<u8>> {
    let names = tree
        .paths()
        .map(|path| {
            let name = entry_name(root_folder, path);
            check_entry_name(&name).map(|()| name)
        })
        .collect::<Result<Vec<String>>>()?;

    let bytes = write_entries(tree.iter().map(|(_, content)| content), &names)?;
    verify(&bytes, &names)?;

    tracing::debug!(
        root = root_folder,
        entries = names.len(),
        bytes = bytes.len(),
        "Packed project archive"
    );
    Ok(bytes)
}

/// [`pack`] plus the archive's SHA256 digest and entry count.
///
/// # Errors
///
/// Returns [`Error::Packaging`] if writing or verification fails.
pub fn package(tree: &VirtualFileTree, root_folder: &str) -> Result<PackagedProject> {
    let bytes = pack(tree, root_folder)?;
    let sha256 = compute_sha256(&bytes);
    Ok(PackagedProject {
        entry_count: tree.len(),
        sha256,
        bytes,
    })
}

/// Read an archive produced by [`pack`] back into a tree.
///
/// The `root_folder` prefix is stripped from every entry. Entries that are
/// valid UTF-8 come back as text, everything else as binary.
///
/// # Errors
///
/// Returns [`Error::Packaging`] if the archive is unreadable or an entry
/// lies outside `root_folder`.
pub fn unpack(bytes: &[u8], root_folder: &str) -> Result<VirtualFileTree> {
    let mut archive = open(bytes)?;
    let prefix = entry_name(root_folder, "");
    let mut tree = VirtualFileTree::new();

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| Error::packaging(format!("Failed to open entry #{index}: {e}")))?;
        let name = entry.name().to_string();
        let Some(path) = name.strip_prefix(&prefix) else {
            return Err(Error::packaging(format!(
                "Entry {name} is outside root folder {root_folder}"
            )));
        };

        let mut data = Vec::new();
        entry
            .read_to_end(&mut data)
            .map_err(|e| Error::packaging(format!("Failed to read entry {name}: {e}")))?;
        let content = match String::from_utf8(data) {
            Ok(text) => FileContent::Text(text),
            Err(err) => FileContent::Binary(err.into_bytes()),
        };
        tree.insert(path, content);
    }
    Ok(tree)
}

/// SHA256 checksum hex string of `bytes`.
#[must_use]
pub fn compute_sha256(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let hash = hasher.finalize();
    format!("{hash:x}")
}

fn entry_name(root_folder: &str, path: &str) -> String {
    let root = root_folder.trim_end_matches('/');
    if root.is_empty() {
        path.to_string()
    } else {
        format!("{root}/{path}")
    }
}

/// Rejects names that would extract outside the archive root.
///
/// Empty components (`a//b`) are allowed, extractors fold them away.
fn check_entry_name(name: &str) -> Result<()> {
    let escapes = name.starts_with('/')
        || name.contains('\\')
        || name.split('/').any(|part| part == "." || part == "..");
    if escapes {
        return Err(Error::packaging(format!("Unsafe archive entry path: {name}")));
    }
    Ok(())
}

fn write_entries<'a>(
    contents: impl Iterator<Item = &'a FileContent>,
    names: &[String],
) -> Result<Vec<u8>> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_PERMISSIONS);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (content, name) in contents.zip(names) {
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| Error::packaging(format!("Failed to add entry {name}: {e}")))?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| Error::packaging(format!("Failed to write entry {name}: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| Error::packaging(format!("Failed to finalize archive: {e}")))?;
    Ok(cursor.into_inner())
}

fn open(bytes: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>> {
    ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::packaging(format!("Failed to open archive: {e}")))
}

fn verify(bytes: &[u8], expected: &[String]) -> Result<()> {
    let mut archive = open(bytes)?;
    if archive.len() != expected.len() {
        return Err(Error::packaging(format!(
            "Archive has {} entries, expected {}",
            archive.len(),
            expected.len()
        )));
    }

    for (index, name) in expected.iter().enumerate() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| Error::packaging(format!("Failed to open entry {name}: {e}")))?;
        if entry.name() != name {
            return Err(Error::packaging(format!(
                "Entry #{index} is {}, expected {name}",
                entry.name()
            )));
        }
        // Reading to the end makes the reader check the CRC-32
        io::copy(&mut entry, &mut io::sink())
            .map_err(|e| Error::packaging(format!("Entry {name} failed integrity check: {e}")))?;
    }
    Ok(())
}
