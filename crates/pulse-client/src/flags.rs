use std::collections::HashSet;
use std::path::PathBuf;

use tracing::warn;

use crate::error::Result;

/// Per-post "I voted" flags. This mirrors what the web page keeps in
/// browser local storage: a convenience hint, not a server-side guarantee —
/// deleting the file is the moral equivalent of clearing local storage.
#[derive(Debug, Default)]
pub struct VoteFlags {
    path: Option<PathBuf>,
    flags: HashSet<String>,
}

impl VoteFlags {
    /// Flags that live only as long as this value. Useful for tests and
    /// one-shot tools.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Flags backed by a JSON file, created on first write.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let flags = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring corrupt vote flag store {}: {}", path.display(), e);
                HashSet::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Some(path),
            flags,
        })
    }

    pub fn has_voted(&self, post_id: &str) -> bool {
        self.flags.contains(post_id)
    }

    pub fn set_voted(&mut self, post_id: &str) {
        self.flags.insert(post_id.to_string());
        self.persist();
    }

    pub fn clear_voted(&mut self, post_id: &str) {
        self.flags.remove(post_id);
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        let raw = match serde_json::to_string(&self.flags) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not serialize vote flags: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(path, raw) {
            // The flag is a UX hint only; losing it is survivable.
            warn!("Could not persist vote flags to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_flags_toggle() {
        let mut flags = VoteFlags::in_memory();
        assert!(!flags.has_voted("p1"));

        flags.set_voted("p1");
        assert!(flags.has_voted("p1"));
        assert!(!flags.has_voted("p2"));

        flags.clear_voted("p1");
        assert!(!flags.has_voted("p1"));
    }

    #[test]
    fn flags_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pulse-votes.json");

        let mut flags = VoteFlags::load(&path).unwrap();
        flags.set_voted("p1");
        drop(flags);

        let reloaded = VoteFlags::load(&path).unwrap();
        assert!(reloaded.has_voted("p1"));
        assert!(!reloaded.has_voted("p2"));
    }

    #[test]
    fn corrupt_store_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pulse-votes.json");
        std::fs::write(&path, "not json").unwrap();

        let flags = VoteFlags::load(&path).unwrap();
        assert!(!flags.has_voted("p1"));
    }
}
