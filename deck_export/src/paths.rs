//! File naming for saved decks and screenshots.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Folder under the data dir that holds saved deck files
pub const SAVED_DECKS_DIR: &str = "SavedDecks";
/// Folder under the data dir that holds deck screenshots
pub const SCREENSHOTS_DIR: &str = "Screenshots";

lazy_static! {
    static ref INVALID_FILE_CHARS: Regex =
        Regex::new(r#"[/\\:*?"<>|\p{Cc}]"#).expect("invalid file name pattern");
}

/// Makes `name` safe to use as a file name on every platform.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced = INVALID_FILE_CHARS.replace_all(name, "_");
    let trimmed = replaced.trim().trim_matches('.').trim();

    if trimmed.is_empty() {
        "deck".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Returns a path for `name` + `extension` inside `base/dir` that does not
/// exist yet, creating the folder when needed. Taken names get `_1`, `_2`, ...
pub fn valid_file_path(
    base: &Path,
    dir: &str,
    name: &str,
    extension: &str,
) -> std::io::Result<PathBuf> {
    let folder = base.join(dir);
    if !folder.exists() {
        std::fs::create_dir_all(&folder)?;
        log::info!("Created directory: {}", folder.display());
    }

    let stem = sanitize_file_name(name);
    let mut path = folder.join(format!("{stem}{extension}"));
    let mut suffix = 1;
    while path.exists() {
        path = folder.join(format!("{stem}_{suffix}{extension}"));
        suffix += 1;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_plain_name() {
        assert_eq!(sanitize_file_name("Zoo Warlock"), "Zoo Warlock");
    }

    #[test]
    fn test_sanitize_replaces_invalid_chars() {
        assert_eq!(sanitize_file_name("Face/Hunter: v2?"), "Face_Hunter_ v2_");
        assert_eq!(sanitize_file_name(r#"a\b*c"d<e>f|g"#), "a_b_c_d_e_f_g");
        assert_eq!(sanitize_file_name("tab\there"), "tab_here");
    }

    #[test]
    fn test_sanitize_trims_dots_and_spaces() {
        assert_eq!(sanitize_file_name("  ..Control.. "), "Control");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_file_name(""), "deck");
        assert_eq!(sanitize_file_name(" . "), "deck");
    }

    #[test]
    fn test_valid_file_path_creates_folder() {
        let temp_dir = TempDir::new().unwrap();
        let path = valid_file_path(temp_dir.path(), SAVED_DECKS_DIR, "Miracle", ".json").unwrap();

        assert!(temp_dir.path().join(SAVED_DECKS_DIR).is_dir());
        assert_eq!(path, temp_dir.path().join(SAVED_DECKS_DIR).join("Miracle.json"));
        assert!(!path.exists());
    }

    #[test]
    fn test_valid_file_path_skips_taken_names() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join(SCREENSHOTS_DIR);
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("Miracle.png"), b"x").unwrap();
        std::fs::write(folder.join("Miracle_1.png"), b"x").unwrap();

        let path = valid_file_path(temp_dir.path(), SCREENSHOTS_DIR, "Miracle", ".png").unwrap();
        assert_eq!(path, folder.join("Miracle_2.png"));
    }
}
