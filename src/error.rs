//! Error types for the ripescan library

use thiserror::Error;

/// Result type alias for ripescan operations
pub type Result<T> = std::result::Result<T, ClassificationError>;

/// Error types for ripeness classification operations
#[derive(Error, Debug)]
pub enum ClassificationError {
    /// Color input did not match the accepted hex format
    #[error("Invalid color format: {reason}")]
    InvalidColorFormat { reason: String },

    /// Image data could not be read or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No pixels passed the saturation/value filter
    #[error("No classifiable color detected: {reason}")]
    NoColorDetected { reason: String },

    /// Dominant hue fell outside every stage range
    #[error("Hue {hue:.1}\u{b0} is outside the classifiable range")]
    HueOutOfClassifiableRange { hue: f32 },
}

impl ClassificationError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image load error without an underlying cause
    pub fn image_load_message(message: impl Into<String>) -> Self {
        Self::ImageLoad {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid color format error
    pub fn invalid_color(reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a user-correctable condition
    ///
    /// Every classification error is terminal for the request; retrying with
    /// the same input reproduces the same failure. Input-shaped errors can be
    /// resolved by supplying a different color or photo.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClassificationError::InvalidColorFormat { .. }
                | ClassificationError::NoColorDetected { .. }
                | ClassificationError::ImageLoad { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ClassificationError::InvalidColorFormat { .. } => {
                "Please provide a valid hex color (e.g., #FF0000 or FF0000).".to_string()
            }
            ClassificationError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            ClassificationError::NoColorDetected { .. } => {
                "Could not find a clear color in the image. Please try a clearer photo.".to_string()
            }
            ClassificationError::HueOutOfClassifiableRange { .. } => {
                "Could not classify the supplied color. Please sample the banana skin directly."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_recoverable() {
        assert!(ClassificationError::invalid_color("bad").is_recoverable());
        assert!(ClassificationError::image_load_message("empty").is_recoverable());
        assert!(ClassificationError::NoColorDetected {
            reason: "all gray".into()
        }
        .is_recoverable());
        assert!(!ClassificationError::HueOutOfClassifiableRange { hue: 240.0 }.is_recoverable());
    }

    #[test]
    fn test_user_messages_are_nonempty() {
        let errors = [
            ClassificationError::invalid_color("bad"),
            ClassificationError::image_load_message("empty"),
            ClassificationError::NoColorDetected {
                reason: "all gray".into(),
            },
            ClassificationError::HueOutOfClassifiableRange { hue: 240.0 },
        ];
        for err in &errors {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_display_includes_hue() {
        let err = ClassificationError::HueOutOfClassifiableRange { hue: 239.96 };
        assert!(err.to_string().contains("240.0"));
    }
}
