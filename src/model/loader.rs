use super::PickedFile;
use crate::error::Result;
use rfd::{AsyncFileDialog, FileHandle};
use std::path::{Path, PathBuf};

/// Advisory filter offered by the file picker. Nothing enforces it; any file
/// the user forces through is accepted and simply fails to render if it is
/// not an image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "gif", "webp"];

pub fn load_image(path: &Path) -> Result<PickedFile> {
    log::info!("Loading image file: {}", path.display());
    let bytes = std::fs::read(path).map_err(|err| {
        log::error!("{}: failed to read image file ({err})", path.display());
        err
    })?;

    Ok(PickedFile {
        name: display_name(path),
        bytes,
    })
}

/// Opens the native picker and reads the chosen file. Cancelling the dialog
/// and read failures both yield `None`.
pub async fn pick_image() -> Option<PickedFile> {
    let handle = AsyncFileDialog::new()
        .set_title("Select Satellite Image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    read_handle(&handle)
}

pub async fn load_dropped(path: PathBuf) -> Option<PickedFile> {
    load_or_skip(&path, "dropped")
}

fn read_handle(handle: &FileHandle) -> Option<PickedFile> {
    load_or_skip(handle.path(), "picked")
}

fn load_or_skip(path: &Path, origin: &str) -> Option<PickedFile> {
    match load_image(path) {
        Ok(file) => Some(file),
        Err(err) => {
            log::warn!("Ignoring {origin} file: {err}");
            None
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_image_reads_bytes_and_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("field.png");
        std::fs::write(&path, [1u8, 2, 3]).expect("failed to write file");

        let file = load_image(&path).expect("file should load");
        assert_eq!(file.name, "field.png");
        assert_eq!(file.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn load_image_reports_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image(&temp_dir.path().join("missing.tif"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn vanished_picked_file_yields_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let handle = FileHandle::from(temp_dir.path().join("vanished.png"));
        assert!(read_handle(&handle).is_none());
    }

    #[test]
    fn picked_file_is_read_through_its_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("scene.tif");
        std::fs::write(&path, [7u8, 8]).expect("failed to write file");

        let file = read_handle(&FileHandle::from(path)).expect("file should load");
        assert_eq!(file.name, "scene.tif");
        assert_eq!(file.bytes, vec![7, 8]);
    }

    #[test]
    fn filter_covers_advertised_formats() {
        for ext in ["jpeg", "png", "tiff"] {
            assert!(IMAGE_EXTENSIONS.contains(&ext));
        }
    }
}
