//! The image intake allow-list.
//!
//! Only these four declared types are offered for selection. Filtering
//! happens at the intake boundary: a file outside the allow-list is
//! never forwarded, and no error is reported for it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An accepted upload media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    /// `image/jpeg` (`.jpg`, `.jpeg`)
    Jpeg,
    /// `image/png`
    Png,
    /// `image/gif`
    Gif,
    /// `image/webp`
    Webp,
}

impl MediaType {
    /// All accepted types, in the order shown to the user.
    pub const ALL: [Self; 4] = [Self::Jpeg, Self::Png, Self::Gif, Self::Webp];

    /// Comma-joined extension list for a file picker `accept` attribute.
    pub const PICKER_ACCEPT: &'static str = ".jpg,.jpeg,.png,.gif,.webp";

    /// The canonical MIME type string.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// Filename extensions mapping to this type.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
            Self::Gif => &["gif"],
            Self::Webp => &["webp"],
        }
    }

    /// Look up a declared MIME type, ignoring case and any parameters
    /// (`image/png; charset=binary` matches `image/png`).
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        Self::ALL
            .into_iter()
            .find(|t| t.mime().eq_ignore_ascii_case(essence))
    }

    /// Look up a type by filename extension, ignoring case.
    ///
    /// Returns `None` for extensionless names and anything outside the
    /// allow-list.
    #[must_use]
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::ALL
            .into_iter()
            .find(|t| t.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mime_round_trips_through_lookup() {
        for t in MediaType::ALL {
            assert_eq!(MediaType::from_mime(t.mime()), Some(t));
        }
    }

    #[test]
    fn from_mime_ignores_case_and_parameters() {
        assert_eq!(MediaType::from_mime("IMAGE/PNG"), Some(MediaType::Png));
        assert_eq!(
            MediaType::from_mime("image/jpeg; charset=binary"),
            Some(MediaType::Jpeg)
        );
    }

    #[test]
    fn from_mime_rejects_types_outside_the_allow_list() {
        assert_eq!(MediaType::from_mime("image/bmp"), None);
        assert_eq!(MediaType::from_mime("image/svg+xml"), None);
        assert_eq!(MediaType::from_mime("application/pdf"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn from_filename_maps_both_jpeg_spellings() {
        assert_eq!(MediaType::from_filename("a.jpg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_filename("a.JPEG"), Some(MediaType::Jpeg));
        assert_eq!(
            MediaType::from_filename("photo.webp"),
            Some(MediaType::Webp)
        );
    }

    #[test]
    fn from_filename_rejects_unknown_and_extensionless() {
        assert_eq!(MediaType::from_filename("scan.tiff"), None);
        assert_eq!(MediaType::from_filename("README"), None);
        assert_eq!(MediaType::from_filename("archive.png.zip"), None);
    }

    #[test]
    fn serde_representation_is_stable() {
        let json = serde_json::to_string(&MediaType::Webp).unwrap();
        assert_eq!(json, "\"Webp\"");
        let back: MediaType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MediaType::Webp);
    }

    #[test]
    fn picker_accept_covers_every_extension() {
        for t in MediaType::ALL {
            for ext in t.extensions() {
                assert!(
                    MediaType::PICKER_ACCEPT.contains(&format!(".{ext}")),
                    "{ext} missing from PICKER_ACCEPT"
                );
            }
        }
    }
}
