//! Configuration access port trait.

use std::path::PathBuf;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Trimmed value, treating blank as absent.
    fn get_trimmed(&self, section: &str, key: &str) -> Option<String> {
        self.get_string(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn get_path(&self, section: &str, key: &str) -> Option<PathBuf> {
        self.get_trimmed(section, key).map(PathBuf::from)
    }
}
