//! Storage capability for persisting composed images.
//!
//! The pipeline itself never touches the filesystem; callers hand it a
//! [`Storage`] implementation. [`DirStorage`] is the bundled backend: it
//! writes under an app-named subfolder of a base directory, standing in
//! for a platform gallery location.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Folder created under the storage root, mirroring the gallery album
/// the composed codes are filed into.
pub const APP_FOLDER: &str = "QRCodeGenerator";

/// A sink for encoded image bytes.
///
/// `allocate` reserves a destination for a named object of the given
/// mime type; `write` fills it and returns a locator the host can open
/// or display.
pub trait Storage {
    type Handle;
    type Location;

    fn allocate(&self, name: &str, mime_type: &str) -> io::Result<Self::Handle>;
    fn write(&self, handle: Self::Handle, bytes: &[u8]) -> io::Result<Self::Location>;
}

/// Filesystem-backed storage rooted at a directory.
///
/// Files land in `<base>/QRCodeGenerator/<name>.<ext>`, with the
/// extension derived from the mime type. The subfolder is created on
/// first allocation.
#[derive(Debug, Clone)]
pub struct DirStorage {
    base: PathBuf,
}

impl DirStorage {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        DirStorage {
            base: base.as_ref().to_path_buf(),
        }
    }

    fn extension_for(mime_type: &str) -> &str {
        match mime_type {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            _ => "bin",
        }
    }
}

impl Storage for DirStorage {
    type Handle = PathBuf;
    type Location = PathBuf;

    fn allocate(&self, name: &str, mime_type: &str) -> io::Result<Self::Handle> {
        let directory = self.base.join(APP_FOLDER);
        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }
        let filename = format!("{name}.{}", Self::extension_for(mime_type));
        Ok(directory.join(filename))
    }

    fn write(&self, handle: Self::Handle, bytes: &[u8]) -> io::Result<Self::Location> {
        fs::write(&handle, bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), handle.display());
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "logoqr-test-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn allocate_creates_app_subfolder() {
        let base = temp_base("alloc");
        let storage = DirStorage::new(&base);
        let handle = storage.allocate("code", "image/png").unwrap();
        assert!(base.join(APP_FOLDER).is_dir());
        assert_eq!(handle.file_name().unwrap(), "code.png");
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn write_round_trips_bytes() {
        let base = temp_base("write");
        let storage = DirStorage::new(&base);
        let handle = storage.allocate("roundtrip", "image/png").unwrap();
        let location = storage.write(handle, b"not really a png").unwrap();
        assert_eq!(fs::read(&location).unwrap(), b"not really a png");
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn unknown_mime_gets_bin_extension() {
        let base = temp_base("mime");
        let storage = DirStorage::new(&base);
        let handle = storage.allocate("blob", "application/octet-stream").unwrap();
        assert_eq!(handle.extension().unwrap(), "bin");
        let _ = fs::remove_dir_all(&base);
    }
}
