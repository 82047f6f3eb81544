//! Keyboard focus across the widget's controls.

/// The control that receives Enter/Space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The entry field. Enter commits the pending input.
    #[default]
    Input,
    /// The sort-direction button.
    SortButton,
    /// The clear button.
    ClearButton,
}

impl Focus {
    pub const ALL: [Self; 3] = [Self::Input, Self::SortButton, Self::ClearButton];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Input => Self::SortButton,
            Self::SortButton => Self::ClearButton,
            Self::ClearButton => Self::Input,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Input => Self::ClearButton,
            Self::SortButton => Self::Input,
            Self::ClearButton => Self::SortButton,
        }
    }

    #[must_use]
    pub const fn is_button(self) -> bool {
        matches!(self, Self::SortButton | Self::ClearButton)
    }
}
