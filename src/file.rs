// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::ImageFormat;

use crate::config::consts::{FALLBACK_IMAGE_EXT, IMAGES_SUBDIR};
use crate::core::sanitize::{file_ext, file_stem};
use crate::error::ScrapeError;

/// Write cartridge bytes to `<folder>/<filename>`. Creates `folder`.
/// An existing file of the same name is overwritten.
pub fn save_cartridge(bytes: &[u8], filename: &str, folder: &Path) -> Result<PathBuf, ScrapeError> {
    ensure_directory(folder)?;
    let path = folder.join(filename);
    write_file(&path, bytes)?;
    Ok(path)
}

/// Write cover art to `<folder>/images/<name>`. Creates both directories.
/// `filename` is the final image file name (see `image_filename`).
pub fn save_image(bytes: &[u8], filename: &str, folder: &Path) -> Result<PathBuf, ScrapeError> {
    let dir = folder.join(IMAGES_SUBDIR);
    ensure_directory(&dir)?;
    let path = dir.join(filename);
    write_file(&path, bytes)?;
    Ok(path)
}

/// `<cart stem>.<ext>`: extension from the image URL when it names an image
/// format, else sniffed from the bytes, else `png`.
pub fn image_filename(cart_filename: &str, image_url: &str, bytes: &[u8]) -> String {
    let stem = file_stem(cart_filename);
    let ext = ext_from_url(image_url)
        .or_else(|| ext_from_bytes(bytes))
        .unwrap_or_else(|| s!(FALLBACK_IMAGE_EXT));
    format!("{stem}.{ext}")
}

fn ext_from_url(url: &str) -> Option<String> {
    // Drop query/fragment before looking at the last segment
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let last = path.rsplit('/').next()?;
    let ext = file_ext(last)?;
    ImageFormat::from_extension(&ext).map(|_| ext)
}

fn ext_from_bytes(bytes: &[u8]) -> Option<String> {
    let fmt = image::guess_format(bytes).ok()?;
    fmt.extensions_str().first().map(|e| s!(*e))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ScrapeError> {
    fs::write(path, bytes).map_err(|e| ScrapeError::fs(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(ScrapeError::fs(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::fs(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\0\x01\0";

    #[test]
    fn image_name_from_url_extension() {
        assert_eq!(image_filename("panda.tic", "https://tic80.com/cart/1/cover.gif", b""), "panda.gif");
        assert_eq!(image_filename("panda.tic", "https://x.org/c.JPG?size=2", b""), "panda.jpg");
    }

    #[test]
    fn image_name_sniffed_when_url_has_no_ext() {
        assert_eq!(image_filename("panda.tic", "https://x.org/cover", PNG_MAGIC), "panda.png");
        assert_eq!(image_filename("panda.tic", "https://x.org/cover.php", GIF_MAGIC), "panda.gif");
        assert_eq!(image_filename("panda.tic", "https://x.org/cover", b"????"), "panda.png");
    }

    #[test]
    fn saves_create_folders_and_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = tmp.path().join("carts");

        let p = save_cartridge(b"one", "a.tic", &folder).unwrap();
        assert_eq!(p, folder.join("a.tic"));
        save_cartridge(b"two", "a.tic", &folder).unwrap();
        assert_eq!(fs::read(&p).unwrap(), b"two");

        let img = save_image(GIF_MAGIC, "a.gif", &folder).unwrap();
        assert_eq!(img, folder.join("images").join("a.gif"));
        assert!(img.is_file());
    }

    #[test]
    fn folder_that_is_a_file_is_a_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let clash = tmp.path().join("clash");
        fs::write(&clash, b"x").unwrap();

        let err = save_cartridge(b"data", "a.tic", &clash).unwrap_err();
        assert!(matches!(err, ScrapeError::Filesystem { .. }));
    }
}
