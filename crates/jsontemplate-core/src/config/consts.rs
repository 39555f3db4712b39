//! Constants shared by the compiler and the expansion engine

/// Default values for [`CompileOptions`](super::CompileOptions)
pub mod defaults {
    /// Meta delimiters, split in half into the left and right markers
    pub const META: &str = "{}";

    /// Separator between a name and its formatter chain
    pub const FORMAT_CHAR: char = '|';

    /// Formatter applied when a substitution names none
    pub const DEFAULT_FORMATTER: &str = "str";
}

/// Characters accepted as the format separator
pub const FORMAT_CHARS: [char; 2] = ['|', ':'];

/// Clause names declared inside sections
pub mod clause {
    /// Runs when section data is missing or falsy, or a list is empty
    pub const OR: &str = "or";

    /// Runs between consecutive iterations of a repeated section
    pub const ALTERNATES_WITH: &str = "alternates with";
}

/// Names recognized in template headers (`meta: <>`)
pub mod header {
    pub const META: &str = "meta";
    pub const FORMAT_CHAR: &str = "format-char";
    pub const DEFAULT_FORMATTER: &str = "default-formatter";

    /// Header value that disables the default formatter
    pub const NONE: &str = "none";
}

/// Name that refers to the innermost scope value itself
pub const CURSOR: &str = "@";
