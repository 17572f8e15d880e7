use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Extension of persisted phoneme inventories.
pub const INVENTORY_EXTENSION: &str = "bin";

/// A persisted inventory found in a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryFile {
	/// Registry name, the file stem (`"elvish"` for `data/elvish.bin`).
	pub name: String,
	pub path: PathBuf,
}

impl InventoryFile {
	/// Describes `path` as an inventory file, or `None` when it is not one.
	pub fn from_path(path: PathBuf) -> Option<Self> {
		if !path.is_file() || path.extension() != Some(OsStr::new(INVENTORY_EXTENSION)) {
			return None;
		}
		let name = path.file_stem()?.to_string_lossy().into_owned();
		Some(Self { name, path })
	}
}

/// Resolves the folder an inventory registry reads from.
///
/// `"."` and `"./"` become the current working directory, anything else
/// is kept relative.
pub fn resolve_folder<P: AsRef<Path>>(folder: P) -> PathBuf {
	let folder = folder.as_ref();
	if folder == Path::new(".") {
		env::current_dir().unwrap_or_else(|_| folder.to_path_buf())
	} else {
		folder.to_path_buf()
	}
}

/// Lists the inventory files of `folder`, sorted by name so that loading
/// order does not depend on directory iteration order.
pub fn inventory_files<P: AsRef<Path>>(folder: P) -> io::Result<Vec<InventoryFile>> {
	let mut files = Vec::new();
	for entry in fs::read_dir(folder)? {
		files.extend(InventoryFile::from_path(entry?.path()));
	}
	files.sort_by(|a, b| a.name.cmp(&b.name));
	Ok(files)
}
