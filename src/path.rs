//! Path manipulation utilities for qa-dispatch

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Replace `/` separators with the host platform's separator.
///
/// On Unix this is the identity; on Windows `vendor/bin/phpcs` becomes
/// `vendor\bin\phpcs`.
pub fn platform_path(path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }
}

/// The `bin` directory under a dependency root.
pub fn bin_dir(root: &Path) -> PathBuf {
    root.join("bin")
}

/// Location of a tool executable under a dependency root.
///
/// The result is `<root>/bin/<binary>` with separators normalized by
/// [`platform_path`].
pub fn tool_path(root: &Path, binary: &str) -> PathBuf {
    let joined = format!("{}/bin/{}", root.to_string_lossy(), binary);
    PathBuf::from(platform_path(&joined))
}

/// Whether a path reported by source control names a file with `extension`.
///
/// The name must end in `.<extension>`, case-sensitively, so `a.php.txt`
/// and `a.PHP` do not match `php`.
pub fn has_extension(path: &str, extension: &str) -> bool {
    path.strip_suffix(extension)
        .map(|stem| stem.ends_with('.'))
        .unwrap_or(false)
}
