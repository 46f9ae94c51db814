use std::path::Path;

use crate::EXTENSION;

/// Returns `true` if `path` ends in the `.ini` extension. The comparison is case-sensitive.
pub fn has_ini_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == EXTENSION)
}
