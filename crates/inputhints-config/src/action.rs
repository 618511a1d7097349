use ahash::AHashMap;
use smallvec::SmallVec;

use crate::control_path::human_readable_path;

/// Source of bindings for one input action.
///
/// The glyph resolver only needs the action name, the binding index for a
/// control scheme and the binding's path.
pub trait ActionBindings {
    fn name(&self) -> &str;

    /// Index of the first binding that belongs to the scheme.
    fn binding_index(&self, scheme: &str) -> Option<usize>;

    /// Raw path of the binding, e.g. `<Gamepad>/buttonSouth`.
    fn binding_path(&self, index: usize) -> Option<&str>;

    /// Normalized control path of the binding, e.g. `Button South`.
    fn control_path(&self, index: usize) -> Option<String> {
        self.binding_path(index).map(human_readable_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub path: Box<str>,
    pub schemes: SmallVec<[Box<str>; 2]>,
}

impl Binding {
    pub fn new<S: Into<Box<str>>>(
        path: impl Into<Box<str>>,
        schemes: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            path: path.into(),
            schemes: schemes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn in_scheme(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| &**s == scheme)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAction {
    pub map: Option<Box<str>>,
    pub name: Box<str>,
    pub bindings: Vec<Binding>,
}

impl InputAction {
    pub fn new(name: impl Into<Box<str>>, bindings: Vec<Binding>) -> Self {
        Self {
            map: None,
            name: name.into(),
            bindings,
        }
    }

    #[must_use]
    pub fn with_map(mut self, map: impl Into<Box<str>>) -> Self {
        self.map = Some(map.into());
        self
    }
}

impl ActionBindings for InputAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn binding_index(&self, scheme: &str) -> Option<usize> {
        if scheme.is_empty() {
            return None;
        }
        self.bindings.iter().position(|b| b.in_scheme(scheme))
    }

    fn binding_path(&self, index: usize) -> Option<&str> {
        self.bindings.get(index).map(|b| &*b.path)
    }
}

/// Actions loaded from the hints file, addressable as `Action` or
/// `Map/Action`.
#[derive(Debug, Clone, Default)]
pub struct ActionSet {
    actions: Vec<InputAction>,
    index: AHashMap<Box<str>, usize>,
}

impl ActionSet {
    pub fn new(actions: Vec<InputAction>) -> Self {
        let mut index = AHashMap::with_capacity(actions.len() * 2);
        for (i, action) in actions.iter().enumerate() {
            // First action with a given bare name wins.
            index.entry(action.name.clone()).or_insert(i);
            if let Some(map) = &action.map {
                index
                    .entry(format!("{map}/{}", action.name).into_boxed_str())
                    .or_insert(i);
            }
        }
        Self { actions, index }
    }

    pub fn find(&self, key: &str) -> Option<&InputAction> {
        self.index.get(key).map(|&i| &self.actions[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InputAction> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// All distinct scheme names referenced by bindings, in first-seen order.
    pub fn schemes(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for binding in self.actions.iter().flat_map(|a| a.bindings.iter()) {
            for scheme in &binding.schemes {
                if !out.contains(&&**scheme) {
                    out.push(scheme);
                }
            }
        }
        out
    }
}

impl PartialEq for ActionSet {
    fn eq(&self, other: &Self) -> bool {
        self.actions == other.actions
    }
}

impl<'a> IntoIterator for &'a ActionSet {
    type Item = &'a InputAction;
    type IntoIter = std::slice::Iter<'a, InputAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
