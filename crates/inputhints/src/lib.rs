//! Resolves input actions into context-correct button glyphs.
//!
//! The embedding application owns a [`DeviceState`] and reports the last used
//! device to it. A [`HintResolver`] follows that state, classifies the device
//! into a control type and turns action bindings into glyph tags for the text
//! layer.

mod device;
mod format;
mod lookup;
mod matcher;
mod resolver;
mod variables;

pub use device::{DeviceEvent, DeviceEventReceiver, DeviceId, DeviceState};
pub use format::format_glyph_tag;
pub use lookup::{find_glyph, GlyphMatch};
pub use matcher::select_control_type;
pub use resolver::{HintResolver, HintsEvent, HintsEventReceiver};
pub use variables::HintVariables;

pub use inputhints_config as config;
