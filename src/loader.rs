use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CarouselError;
use crate::slide::Slide;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Scan a directory for image files and turn them into slides, sorted by
/// file name. Non-image entries and subdirectories are skipped. The list may
/// come back empty; rejecting that is the deck's job.
///
/// # Errors
/// Returns [`CarouselError::Scan`] if the directory cannot be read.
pub fn load_slides(
    dir: &Path,
    default_width: u16,
    default_height: u16,
) -> Result<Vec<Slide>, CarouselError> {
    let entries = fs::read_dir(dir).map_err(|source| CarouselError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CarouselError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            if IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                paths.push(path);
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(count = paths.len(), dir = %dir.display(), "scanned slide directory");

    Ok(paths
        .into_iter()
        .map(|path| {
            Slide::new(path.to_string_lossy().into_owned())
                .with_size(default_width, default_height)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn scans_and_sorts_image_files_only() {
        let dir = std::env::temp_dir().join("carousel-loader-sort");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        touch(&dir, "b.png");
        touch(&dir, "a.JPG");
        touch(&dir, "notes.txt");
        fs::create_dir_all(dir.join("sub.png")).unwrap();

        let slides = load_slides(&dir, 200, 200).unwrap();
        let names: Vec<&str> = slides
            .iter()
            .map(|s| s.source.rsplit('/').next().unwrap())
            .collect();
        assert_eq!(names, ["a.JPG", "b.png"]);
        assert_eq!(slides[0].width, Some(200));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_a_scan_error() {
        let result = load_slides(Path::new("/definitely/not/here"), 1, 1);
        assert!(matches!(result, Err(CarouselError::Scan { .. })));
    }

    #[test]
    fn directory_with_no_images_yields_an_empty_list() {
        let dir = std::env::temp_dir().join("carousel-loader-empty");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        touch(&dir, "readme.md");

        let slides = load_slides(&dir, 1, 1).unwrap();
        assert!(slides.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }
}
