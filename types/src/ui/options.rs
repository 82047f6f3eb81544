/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for arrows, bullets and borders.
    pub ascii_only: bool,
    pub high_contrast: bool,
}
