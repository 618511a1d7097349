/// A control path that could not be resolved under a control scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPathRecord {
    pub control_path: Box<str>,
    pub scheme: Box<str>,
}

impl MissingPathRecord {
    pub fn new(control_path: impl Into<Box<str>>, scheme: impl Into<Box<str>>) -> Self {
        Self {
            control_path: control_path.into(),
            scheme: scheme.into(),
        }
    }

    pub fn matches(&self, control_path: &str, scheme: &str) -> bool {
        &*self.control_path == control_path && &*self.scheme == scheme
    }
}

/// Append-mostly log of unresolved control paths, deduplicated by
/// (path, scheme). Expected to stay small, so lookups are linear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingPaths(Vec<MissingPathRecord>);

impl MissingPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a miss. Returns `true` if a new record was added.
    pub fn record(&mut self, control_path: &str, scheme: &str) -> bool {
        if self.contains(control_path, scheme) {
            return false;
        }
        self.0.push(MissingPathRecord::new(control_path, scheme));
        true
    }

    /// Removes the first matching record. Returns `true` if one was removed.
    pub fn clear(&mut self, control_path: &str, scheme: &str) -> bool {
        let Some(index) = self.0.iter().position(|r| r.matches(control_path, scheme))
        else {
            return false;
        };
        self.0.remove(index);
        true
    }

    pub fn contains(&self, control_path: &str, scheme: &str) -> bool {
        self.0.iter().any(|r| r.matches(control_path, scheme))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MissingPathRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<MissingPathRecord> for MissingPaths {
    fn from_iter<I: IntoIterator<Item = MissingPathRecord>>(iter: I) -> Self {
        let mut paths = Self::new();
        for record in iter {
            paths.record(&record.control_path, &record.scheme);
        }
        paths
    }
}

impl<'a> IntoIterator for &'a MissingPaths {
    type Item = &'a MissingPathRecord;
    type IntoIter = std::slice::Iter<'a, MissingPathRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_idempotent() {
        let mut missing = MissingPaths::new();
        assert!(missing.record("Button South", "Gamepad"));
        assert!(!missing.record("Button South", "Gamepad"));
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn same_path_under_other_scheme_is_distinct() {
        let mut missing = MissingPaths::new();
        missing.record("Button South", "Gamepad");
        missing.record("Button South", "Joystick");
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn clear_absent_is_noop() {
        let mut missing = MissingPaths::new();
        missing.record("E", "Keyboard&Mouse");
        assert!(!missing.clear("E", "Gamepad"));
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn clear_then_record_again() {
        let mut missing = MissingPaths::new();
        missing.record("E", "Keyboard&Mouse");
        assert!(missing.clear("E", "Keyboard&Mouse"));
        assert!(missing.is_empty());
        missing.record("E", "Keyboard&Mouse");
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn collecting_drops_duplicates() {
        let missing: MissingPaths = [
            MissingPathRecord::new("E", "Keyboard&Mouse"),
            MissingPathRecord::new("E", "Keyboard&Mouse"),
        ]
        .into_iter()
        .collect();
        assert_eq!(missing.len(), 1);
    }
}
