/// Errors produced when parsing CSS-like values from configuration strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not a `<n>px`, `<n>%`, bare number or `auto`.
    #[error("Invalid size '{0}': expected '<n>px', '<n>%' or 'auto'")]
    InvalidSize(String),

    /// Not a `#rgb` / `#rrggbb` hex code.
    #[error("Invalid color '{0}': expected a hex code such as '#E3E5EB'")]
    InvalidColor(String),
}
