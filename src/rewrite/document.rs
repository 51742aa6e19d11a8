//! In-memory document: one target file's full text during processing.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::RewriteError;
use super::rule::Rule;

/// The full text of one HTML file, mutated through the rule sequence and
/// persisted by overwriting the source path.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    text: String,
    changed: bool,
}

impl Document {
    /// Read the complete file content.
    ///
    /// Fails with [`RewriteError::NotFound`] when the path does not exist
    /// and [`RewriteError::Decode`] when the bytes are not valid UTF-8.
    pub fn load(path: PathBuf) -> Result<Self, RewriteError> {
        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RewriteError::NotFound(path.clone()),
            _ => RewriteError::Io(path.clone(), e),
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|e| RewriteError::Decode(path.clone(), e.utf8_error()))?;
        Ok(Self {
            path,
            text,
            changed: false,
        })
    }

    /// Apply one rule in place. Returns whether this rule changed the text.
    pub fn apply(&mut self, rule: &Rule) -> bool {
        match rule.apply(&self.text) {
            Cow::Borrowed(_) => false,
            Cow::Owned(next) => {
                if next == self.text {
                    return false;
                }
                self.text = next;
                self.changed = true;
                true
            }
        }
    }

    /// Overwrite the source file with the current text.
    ///
    /// Writes to a sibling temporary file and renames it over the original,
    /// so a partial write never corrupts the target.
    pub fn save(&self) -> Result<(), RewriteError> {
        let tmp = self.path.with_extension("html.tmp~");
        fs::write(&tmp, &self.text).map_err(|e| RewriteError::Io(tmp.clone(), e))?;
        fs::rename(&tmp, &self.path).map_err(|e| RewriteError::Io(self.path.clone(), e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether any rule changed the text since load.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::fs;

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(dir.path().join("nope.html")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_invalid_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.html");
        fs::write(&path, [0x3c, 0xff, 0xfe, 0x3e]).unwrap();
        let err = Document::load(path).unwrap_err();
        assert!(matches!(err, RewriteError::Decode(..)));
    }

    #[test]
    fn test_apply_tracks_change_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<body>old</body>").unwrap();

        let mut doc = Document::load(path).unwrap();
        assert!(!doc.changed());

        let miss = Rule::Literal {
            from: "absent".to_string(),
            to: "x".to_string(),
        };
        assert!(!doc.apply(&miss));
        assert!(!doc.changed());

        let hit = Rule::Subst {
            pattern: Regex::new("old").unwrap(),
            replacement: "new".to_string(),
        };
        assert!(doc.apply(&hit));
        assert!(doc.changed());
        assert_eq!(doc.text(), "<body>new</body>");
    }

    #[test]
    fn test_save_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<body>old</body>").unwrap();

        let mut doc = Document::load(path.clone()).unwrap();
        doc.apply(&Rule::Literal {
            from: "old".to_string(),
            to: "new".to_string(),
        });
        doc.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<body>new</body>");
        // No temporary file left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
