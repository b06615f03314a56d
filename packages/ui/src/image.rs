//! Client-side checks on a picked plant image.

use api::ImageUpload;

const MIB: u64 = 1024 * 1024;

/// Upper bound on an uploadable image, from `[ui] max_image_bytes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImagePolicy {
    pub max_bytes: u64,
}

impl ImagePolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// `Err` carries the message shown under the file input.
    pub fn check(&self, file_name: &str, size: u64) -> Result<(), String> {
        if size > self.max_bytes {
            tracing::info!("Rejected image {} ({} bytes)", file_name, size);
            return Err(format!(
                "Image is too large ({}). The limit is {}.",
                human_size(size),
                human_size(self.max_bytes)
            ));
        }
        Ok(())
    }
}

impl From<&store::DashboardConfig> for ImagePolicy {
    fn from(config: &store::DashboardConfig) -> Self {
        Self::new(config.ui.max_image_bytes)
    }
}

/// What the image field currently holds, shared by the picker and the form.
///
/// A rejected pick is kept as an error rather than an empty field, so the form
/// cannot go out without the image the user meant to send.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageSelection {
    upload: Option<ImageUpload>,
    error: Option<String>,
}

impl ImageSelection {
    /// Size-check a picked file before its bytes are read.
    /// Returns whether the caller should go on and read it.
    pub fn offer(&mut self, policy: &ImagePolicy, file_name: &str, size: u64) -> bool {
        match policy.check(file_name, size) {
            Ok(()) => true,
            Err(message) => {
                self.reject(message);
                false
            }
        }
    }

    pub fn accept(&mut self, upload: ImageUpload) {
        self.upload = Some(upload);
        self.error = None;
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.upload = None;
        self.error = Some(message.into());
    }

    /// The input was emptied.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn upload(&self) -> Option<&ImageUpload> {
        self.upload.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The image part to send, or the reason submission is blocked.
    pub fn for_submit(&self) -> Result<Option<ImageUpload>, String> {
        match &self.error {
            Some(message) => Err(message.clone()),
            None => Ok(self.upload.clone()),
        }
    }
}

fn human_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{} KB", bytes.div_ceil(1024))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceiling() {
        let policy = ImagePolicy::from(&store::DashboardConfig::default());
        assert!(policy.check("small.jpg", 5 * MIB).is_ok());
        assert!(policy.check("edge.jpg", 20 * MIB).is_ok());

        let err = policy.check("huge.jpg", 25 * MIB).unwrap_err();
        assert_eq!(err, "Image is too large (25.0 MB). The limit is 20.0 MB.");
    }

    fn upload(name: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            content_type: Some("image/jpeg".to_string()),
            bytes: vec![0xff, 0xd8],
        }
    }

    #[test]
    fn test_oversized_image_blocks_submit() {
        let policy = ImagePolicy::from(&store::DashboardConfig::default());
        let mut selection = ImageSelection::default();
        assert_eq!(selection.for_submit(), Ok(None));

        selection.accept(upload("fern.jpg"));
        assert!(!selection.offer(&policy, "huge.jpg", 25 * MIB));

        // The earlier pick must not go out in place of the refused one
        assert!(selection.upload().is_none());
        let blocked = selection.for_submit().unwrap_err();
        assert!(blocked.starts_with("Image is too large"), "{blocked}");
        assert_eq!(selection.error(), Some(blocked.as_str()));
    }

    #[test]
    fn test_new_pick_lifts_the_block() {
        let policy = ImagePolicy::new(MIB);
        let mut selection = ImageSelection::default();
        assert!(!selection.offer(&policy, "huge.jpg", 2 * MIB));

        assert!(selection.offer(&policy, "small.jpg", 1024));
        selection.accept(upload("small.jpg"));
        assert_eq!(selection.for_submit(), Ok(Some(upload("small.jpg"))));

        selection.clear();
        assert_eq!(selection.for_submit(), Ok(None));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(1), "1 KB");
        assert_eq!(human_size(1536 * 1024), "1.5 MB");
    }
}
