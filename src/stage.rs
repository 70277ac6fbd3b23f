//! Staging of the files an [`InjectionPlan`](crate::inject::InjectionPlan) declares.
//!
//! The resolver only describes copies. This is the caller-side step that
//! performs them, and it must finish before the shell is spawned.

use std::fs;
use std::io::ErrorKind;

use anyhow::Context;

use crate::inject::FileCopy;
use crate::path::format_path_for_display;

/// Copy each declared file in order, creating destination directories.
///
/// Existing destinations are replaced so an upgraded installation never
/// leaves stale scripts behind. Uses copy-on-write (reflink) when the
/// filesystem supports it. Returns the number of files staged.
pub fn stage_files(files: &[FileCopy]) -> anyhow::Result<usize> {
    for file in files {
        if let Some(parent) = file.dest.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create {}", format_path_for_display(parent))
            })?;
        }

        copy_replacing(file).with_context(|| {
            format!(
                "Failed to stage {} as {}",
                format_path_for_display(&file.source),
                format_path_for_display(&file.dest)
            )
        })?;
        log::debug!(
            "Staged {} -> {}",
            file.source.display(),
            file.dest.display()
        );
    }

    Ok(files.len())
}

fn copy_replacing(file: &FileCopy) -> std::io::Result<()> {
    match reflink_copy::reflink_or_copy(&file.source, &file.dest) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            fs::remove_file(&file.dest)?;
            reflink_copy::reflink_or_copy(&file.source, &file.dest).map(|_| ())
        }
        Err(e) => Err(e),
    }
}
