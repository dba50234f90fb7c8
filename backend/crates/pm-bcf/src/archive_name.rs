use crate::{BcfError, BcfResult};

/// Extension every exported package carries.
pub const ARCHIVE_EXTENSION: &str = ".bcfzip";

/// Derive the archive file name from the requested export name.
///
/// `.bcfzip` is appended unless the name already ends with it. Names must
/// be a single path component.
#[track_caller]
pub fn archive_file_name(name: &str) -> BcfResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == ARCHIVE_EXTENSION
        || trimmed.contains(['/', '\\'])
        || trimmed == "."
        || trimmed == ".."
    {
        return Err(BcfError::invalid_file_name(name));
    }

    if trimmed.ends_with(ARCHIVE_EXTENSION) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}{ARCHIVE_EXTENSION}"))
    }
}
