//! Executable name extraction and shell family classification.
//!
//! Classification is purely textual: nothing here touches the filesystem or
//! checks that the executable exists.

use super::Shell;

/// Extract the executable name from a path, stripping a trailing `.exe`.
///
/// Both `/` and `\` are treated as directory separators regardless of the host
/// platform, so a Windows launch description classifies the same way on Unix:
/// - `/usr/bin/bash` -> "bash"
/// - `C:\Program Files\PowerShell\7\pwsh.exe` -> "pwsh"
///
/// Only `.exe` is stripped (case-insensitive), not other extensions like the
/// `.9` in `zsh-5.9`. Returns `None` when no file name remains.
pub fn extract_filename_from_path(path: &str) -> Option<&str> {
    let filename = path.rsplit(['/', '\\']).next()?;

    // Don't use Path::file_stem(): it would strip version numbers like ".9"
    let stem_len = filename.len().saturating_sub(4);
    let filename = match filename.get(stem_len..) {
        Some(suffix) if stem_len > 0 && suffix.eq_ignore_ascii_case(".exe") => &filename[..stem_len],
        _ => filename,
    };

    (!filename.is_empty()).then_some(filename)
}

/// Determine the shell family launched by `executable`.
///
/// Matches the lower-cased base name exactly against `pwsh`, `bash` and `zsh`.
/// Versioned binaries (`zsh-5.9`, `bash5`) and other shells yield `None`.
pub fn shell_from_executable(executable: &str) -> Option<Shell> {
    let name = extract_filename_from_path(executable)?;
    match name.to_ascii_lowercase().as_str() {
        "pwsh" => Some(Shell::PowerShell),
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        _ => None,
    }
}
