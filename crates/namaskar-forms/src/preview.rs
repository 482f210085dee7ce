//! Display previews for accepted photos

use crate::avatar::AvatarFile;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode a photo as a `data:` URL suitable for an `<img src>`.
///
/// # Examples
///
/// ```
/// use namaskar_forms::{AvatarFile, preview};
///
/// let file = AvatarFile::new("dot.png", "image/png", vec![1, 2, 3]);
/// assert_eq!(preview::data_url(&file), "data:image/png;base64,AQID");
/// ```
pub fn data_url(file: &AvatarFile) -> String {
	format!(
		"data:{};base64,{}",
		file.content_type,
		STANDARD.encode(&file.bytes)
	)
}
