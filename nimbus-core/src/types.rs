//! Common types shared by the client and CLI

/// State of a paired `--enable`/`--disable` style flag
///
/// Distinguishes "the user explicitly disabled it" from "the user said
/// nothing", which a plain `bool` cannot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Toggle {
    /// Neither flag was given
    #[default]
    Unset,
    /// The positive flag was given
    Enabled,
    /// The negative flag was given
    Disabled,
}

impl Toggle {
    /// Build a toggle from the two halves of a mutually exclusive flag pair
    ///
    /// The parser guarantees at most one is set; if both are, the positive
    /// flag wins.
    pub fn from_flags(enable: bool, disable: bool) -> Self {
        match (enable, disable) {
            (true, _) => Toggle::Enabled,
            (false, true) => Toggle::Disabled,
            (false, false) => Toggle::Unset,
        }
    }

    /// `Some(bool)` if the user set the flag, `None` otherwise
    pub fn as_option(self) -> Option<bool> {
        match self {
            Toggle::Unset => None,
            Toggle::Enabled => Some(true),
            Toggle::Disabled => Some(false),
        }
    }

    /// The user's choice, or `default` if they made none
    pub fn unwrap_or(self, default: bool) -> bool {
        self.as_option().unwrap_or(default)
    }
}
