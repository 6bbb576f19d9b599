use url::Url;

use crate::error::Error;

/// Host serving gallery pages.
pub const GALLERY_HOST: &str = "i9i9.to";

/// Host serving the image files themselves.
pub const IMAGE_HOST: &str = "i.i9i9.to";

/// A validated gallery page URL and the numeric id taken from its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRef {
    raw_url: String,
    id: String,
}

impl GalleryRef {
    /// Validates a gallery page URL of the form
    /// `http(s)://i9i9.to/c/<digits>` and extracts the id.
    ///
    /// The id is the leading digit run of the segment after `c`;
    /// trailing non-digit characters in that segment are tolerated.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidUrl(input.to_string());

        let url = Url::parse(input).map_err(|_| invalid())?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if url.host_str() != Some(GALLERY_HOST) {
            return Err(invalid());
        }

        let mut segments = url.path_segments().ok_or_else(invalid)?;
        if segments.next() != Some("c") {
            return Err(invalid());
        }

        let id: String = segments
            .next()
            .unwrap_or("")
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();

        if id.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            raw_url: input.to_string(),
            id,
        })
    }

    pub fn url(&self) -> &str {
        &self.raw_url
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// URL of the image at a 1-based index within this gallery.
    pub fn image_url(&self, index: usize) -> String {
        format!("https://{IMAGE_HOST}/image/{}/{index}.jpg", self.id)
    }
}

/// Extracts the final non-empty path segment of a URL as the local
/// filename. Pure; fails with [`Error::FilenameNotFound`] when the path
/// is empty or ends in `/`.
pub fn file_name_of(raw_url: &str) -> Result<String, Error> {
    let url = Url::parse(raw_url).map_err(|_| Error::InvalidUrl(raw_url.to_string()))?;

    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::FilenameNotFound(raw_url.to_string()))
}
