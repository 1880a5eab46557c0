//! Input selection state
//!
//! A front end offers two mutually exclusive input modes: an uploaded
//! image or an explicitly picked color. Modeling the selection as a single
//! enum makes the both-selected state unrepresentable.

/// Which input the user has currently selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSelection {
    /// Nothing selected yet; submission is disabled
    #[default]
    NoSelection,
    /// An image is selected; any previous color choice is discarded
    ImageSelected,
    /// A color is selected; any previous image choice is discarded
    ColorSelected,
}

impl InputSelection {
    /// Select an image, replacing any color selection
    pub fn select_image(self) -> Self {
        Self::ImageSelected
    }

    /// Select a color, replacing any image selection
    pub fn select_color(self) -> Self {
        Self::ColorSelected
    }

    /// Clear the current selection
    pub fn clear(self) -> Self {
        Self::NoSelection
    }

    /// Whether a classification request can be submitted
    pub fn submit_enabled(self) -> bool {
        !matches!(self, Self::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unselected() {
        let selection = InputSelection::default();
        assert_eq!(selection, InputSelection::NoSelection);
        assert!(!selection.submit_enabled());
    }

    #[test]
    fn test_selections_are_exclusive() {
        let selection = InputSelection::default().select_image().select_color();
        assert_eq!(selection, InputSelection::ColorSelected);

        let selection = selection.select_image();
        assert_eq!(selection, InputSelection::ImageSelected);
    }

    #[test]
    fn test_submit_enabled_iff_selected() {
        assert!(InputSelection::ImageSelected.submit_enabled());
        assert!(InputSelection::ColorSelected.submit_enabled());
        assert!(!InputSelection::ImageSelected.clear().submit_enabled());
    }
}
