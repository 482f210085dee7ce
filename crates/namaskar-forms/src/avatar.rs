//! Profile photo upload gate
//!
//! The gate only decides accept/reject from the byte size. Producing a
//! preview for display lives in [`crate::preview`].

use std::fmt;
use std::io;
use std::path::Path;

/// Smallest accepted photo, in bytes (100 KiB).
pub const MIN_AVATAR_SIZE: u64 = 100 * 1024;
/// Largest accepted photo, in bytes (2 MiB).
pub const MAX_AVATAR_SIZE: u64 = 2 * 1024 * 1024;

/// An uploaded photo with its original name and content type.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarFile {
	pub file_name: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl AvatarFile {
	pub fn new(
		file_name: impl Into<String>,
		content_type: impl Into<String>,
		bytes: Vec<u8>,
	) -> Self {
		Self {
			file_name: file_name.into(),
			content_type: content_type.into(),
			bytes,
		}
	}

	/// Read a photo from disk, guessing the content type from its extension.
	///
	/// The whole file is read. Use [`AvatarGate::open`] to check the size
	/// before anything is loaded.
	pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
		let path = path.as_ref();
		let bytes = std::fs::read(path)?;
		let file_name = path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_else(|| "avatar".to_string());
		let content_type = mime_guess::from_path(path)
			.first_or_octet_stream()
			.essence_str()
			.to_string();
		Ok(Self {
			file_name,
			content_type,
			bytes,
		})
	}

	pub fn size(&self) -> u64 {
		self.bytes.len() as u64
	}
}

// Photo bytes are not useful in debug output.
impl fmt::Debug for AvatarFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AvatarFile")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("size", &self.size())
			.finish()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvatarError {
	#[error("File size should be {} to {}", human_size(.min), human_size(.max))]
	SizeOutOfRange { size: u64, min: u64, max: u64 },
}

/// Failure to load a photo from disk through the gate
#[derive(Debug, thiserror::Error)]
pub enum AvatarLoadError {
	#[error("Failed to read photo: {0}")]
	Io(#[from] io::Error),

	#[error(transparent)]
	Rejected(#[from] AvatarError),
}

/// Accept/reject decision for candidate photos.
///
/// Both bounds are inclusive.
///
/// # Examples
///
/// ```
/// use namaskar_forms::AvatarGate;
///
/// let gate = AvatarGate::default();
/// assert!(gate.check(500 * 1024).is_ok());
/// assert!(gate.check(50 * 1024).is_err());
/// assert_eq!(
///     gate.check(3 * 1024 * 1024).unwrap_err().to_string(),
///     "File size should be 100KB to 2MB"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarGate {
	min: u64,
	max: u64,
}

impl AvatarGate {
	pub fn new(min: u64, max: u64) -> Self {
		Self { min, max }
	}

	pub fn min(&self) -> u64 {
		self.min
	}

	pub fn max(&self) -> u64 {
		self.max
	}

	pub fn check(&self, size: u64) -> Result<(), AvatarError> {
		if size < self.min || size > self.max {
			return Err(AvatarError::SizeOutOfRange {
				size,
				min: self.min,
				max: self.max,
			});
		}
		Ok(())
	}

	/// Pass `file` through when its size is within bounds
	pub fn admit(&self, file: AvatarFile) -> Result<AvatarFile, AvatarError> {
		self.check(file.size())?;
		Ok(file)
	}

	/// Load a photo from disk, rejecting it by its metadata size first.
	///
	/// Out-of-range files are never read into memory.
	pub fn open(&self, path: impl AsRef<Path>) -> Result<AvatarFile, AvatarLoadError> {
		let path = path.as_ref();
		let size = std::fs::metadata(path)?.len();
		self.check(size)?;
		// Size can change between the metadata call and the read.
		let file = AvatarFile::from_path(path)?;
		Ok(self.admit(file)?)
	}
}

impl Default for AvatarGate {
	fn default() -> Self {
		Self::new(MIN_AVATAR_SIZE, MAX_AVATAR_SIZE)
	}
}

fn human_size(bytes: &u64) -> String {
	let bytes = *bytes;
	const KIB: u64 = 1024;
	const MIB: u64 = 1024 * 1024;
	if bytes >= MIB && bytes % MIB == 0 {
		format!("{}MB", bytes / MIB)
	} else if bytes >= KIB && bytes % KIB == 0 {
		format!("{}KB", bytes / KIB)
	} else {
		format!("{} bytes", bytes)
	}
}
