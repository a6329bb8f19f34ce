//! Copying bundled resources into the generated project

use super::write_file;
use crate::error::{GenerationError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy a bundled resource byte-for-byte
pub fn copy_resource(source: &Path, target: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(GenerationError::MissingResource(source.to_path_buf()));
    }
    let bytes = std::fs::read(source).map_err(|e| GenerationError::io(source, e))?;
    write_file(target, &bytes)
}

/// List every file under `resources_dir/subdir`, as paths relative to
/// `resources_dir`, sorted for a stable output order
pub fn collect_resources(resources_dir: &Path, subdir: &str) -> Result<Vec<PathBuf>> {
    let root = resources_dir.join(subdir);
    if !root.is_dir() {
        return Err(GenerationError::MissingResource(root));
    }

    let mut resources = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
            GenerationError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(resources_dir) {
            resources.push(relative.to_path_buf());
        }
    }
    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_resources_relative_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let skin = dir.path().join("skin");
        std::fs::create_dir_all(skin.join("nested")).unwrap();
        std::fs::write(skin.join("uiskin.json"), "{}").unwrap();
        std::fs::write(skin.join("uiskin.atlas"), "").unwrap();
        std::fs::write(skin.join("nested/font.fnt"), "").unwrap();

        let resources = collect_resources(dir.path(), "skin").unwrap();
        assert_eq!(
            resources,
            vec![
                PathBuf::from("skin/nested/font.fnt"),
                PathBuf::from("skin/uiskin.atlas"),
                PathBuf::from("skin/uiskin.json"),
            ]
        );
    }

    #[test]
    fn test_collect_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_resources(dir.path(), "skin").unwrap_err();
        assert!(matches!(err, GenerationError::MissingResource(_)));
    }

    #[test]
    fn test_copy_resource_is_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        std::fs::write(&source, [0x89, b'P', b'N', b'G', 0x00, 0xff]).unwrap();

        let target = dir.path().join("out/assets/logo.png");
        copy_resource(&source, &target).unwrap();
        assert_eq!(
            std::fs::read(&target).unwrap(),
            vec![0x89, b'P', b'N', b'G', 0x00, 0xff]
        );
    }

    #[test]
    fn test_copy_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_resource(&dir.path().join("nope"), &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, GenerationError::MissingResource(_)));
    }
}
