//! Output path derivation

use std::path::{Path, PathBuf};

/// Suffix appended to the input's base name when deriving the output file
pub const OUTPUT_SUFFIX: &str = "_1080p30fps";

/// Container extension of the output file
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Derive the output path for an input file.
///
/// The output lives in the same directory as the input and is named
/// `<stem>_1080p30fps.mp4`, where `<stem>` is the input's file name with its
/// extension stripped. Inputs without an extension keep their full name as
/// the stem.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{}{}.{}", stem, OUTPUT_SUFFIX, OUTPUT_EXTENSION))
}
