use ahash::AHashMap;

use inputhints_config::ActionSet;

use crate::resolver::{HintResolver, HintsEvent, HintsEventReceiver};

/// Maps text placeholder keys to actions, the way a localization variable
/// group would, and tells the text layer when rendered glyphs went stale.
pub struct HintVariables {
    keys: AHashMap<Box<str>, Box<str>>,
    events: HintsEventReceiver,
}

impl HintVariables {
    pub fn new(resolver: &mut HintResolver) -> Self {
        Self {
            keys: AHashMap::new(),
            events: resolver.subscribe(),
        }
    }

    /// Applies pending device changes and drains resolver events. Returns
    /// `true` if text using these variables should be re-rendered.
    pub fn poll_changed(&mut self, resolver: &mut HintResolver) -> bool {
        resolver.sync();
        let changed = self
            .events
            .try_iter()
            .filter(|event| matches!(event, HintsEvent::Changed))
            .count()
            > 0;
        if changed {
            // Actions may have been edited along with the config.
            self.keys.clear();
        }
        changed
    }

    /// Resolves the action key for a placeholder key, caching the result
    /// under the key that was asked for.
    pub fn action_key(&mut self, actions: &ActionSet, key: &str) -> Option<&str> {
        if !self.keys.contains_key(key) {
            let found = find_action_key(actions, key)?;
            self.keys.insert(key.into(), found);
        }
        self.keys.get(key).map(|k| &**k)
    }

    /// Glyph tag for a placeholder key, or `None` if no action matches.
    pub fn glyph(&mut self, resolver: &mut HintResolver, key: &str) -> Option<String> {
        self.poll_changed(resolver);
        let action_key = self.action_key(&resolver.config().actions, key)?.to_owned();
        resolver.resolve_action(&action_key)
    }
}

/// Finds an action by its exact key first. Failing that, dashes and
/// underscores are read as spaces, so `{pause_menu}` still reaches an
/// action named "pause menu". This is a compatibility shim for placeholder
/// keys that cannot contain spaces, not a naming convention.
fn find_action_key(actions: &ActionSet, key: &str) -> Option<Box<str>> {
    if actions.find(key).is_some() {
        return Some(key.into());
    }
    let spaced = key.replace(['-', '_'], " ");
    actions.find(&spaced).map(|_| spaced.into_boxed_str())
}
