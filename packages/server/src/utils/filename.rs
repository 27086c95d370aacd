/// Why an uploaded filename was refused.
#[derive(Debug, PartialEq, Eq)]
pub enum FilenameError {
    /// Filename is empty or whitespace-only after stripping directories.
    Empty,
    /// Filename contains null bytes.
    NullByte,
    /// Filename contains control characters (CR, LF, etc.).
    ControlCharacter,
    /// Filename is `.` or `..`.
    PathTraversal,
    /// Filename starts with a dot (hidden file).
    Hidden,
    /// Filename is longer than [`MAX_FILENAME_LEN`] characters.
    TooLong,
}

pub const MAX_FILENAME_LEN: usize = 255;

impl FilenameError {
    /// Returns a human-readable error message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Filename cannot be empty",
            Self::NullByte => "Invalid filename: null bytes are not allowed",
            Self::ControlCharacter => "Invalid filename: control characters are not allowed",
            Self::PathTraversal => "Invalid filename: '.' and '..' are not allowed",
            Self::Hidden => "Invalid filename: hidden files (starting with '.') are not allowed",
            Self::TooLong => "Invalid filename: at most 255 characters are allowed",
        }
    }
}

/// Reduce a client-supplied filename to a safe flat name.
///
/// Some browsers send the full local path, so anything up to the last `/` or
/// `\` is dropped rather than rejected.
pub fn upload_file_name(raw: &str) -> Result<&str, FilenameError> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw).trim();

    if base.is_empty() {
        return Err(FilenameError::Empty);
    }

    if base.contains('\0') {
        return Err(FilenameError::NullByte);
    }

    // Header injection through CRLF in multipart metadata.
    if base.chars().any(|c| c.is_ascii_control()) {
        return Err(FilenameError::ControlCharacter);
    }

    if base == "." || base == ".." {
        return Err(FilenameError::PathTraversal);
    }

    if base.starts_with('.') {
        return Err(FilenameError::Hidden);
    }

    if base.chars().count() > MAX_FILENAME_LEN {
        return Err(FilenameError::TooLong);
    }

    Ok(base)
}
