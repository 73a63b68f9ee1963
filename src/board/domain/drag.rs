//! Drop reports from the drag layer.

/// A completed drag gesture as the drag library reports it.
///
/// `source` carries the dragged card's id and `target` the drop column's id
/// (which equals the status wire value); both are raw strings until the
/// gesture boundary types them. A canceled gesture or a drop outside any
/// column leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragDropEvent {
    source: Option<String>,
    target: Option<String>,
    canceled: bool,
}

impl DragDropEvent {
    /// Creates a completed drop report.
    #[must_use]
    pub fn dropped(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
            canceled: false,
        }
    }

    /// Creates a canceled gesture report.
    #[must_use]
    pub const fn canceled() -> Self {
        Self {
            source: None,
            target: None,
            canceled: true,
        }
    }

    /// Creates a drop report with no resolved target column.
    #[must_use]
    pub fn without_target(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            target: None,
            canceled: false,
        }
    }

    /// Returns the dragged card id, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the drop column id, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Reports whether the gesture was canceled.
    #[must_use]
    pub const fn is_canceled(&self) -> bool {
        self.canceled
    }
}
