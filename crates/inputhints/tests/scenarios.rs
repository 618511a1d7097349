use inputhints::config::{parse_config, Binding, HintsConfig, InputAction};
use inputhints::{select_control_type, DeviceState, HintResolver, HintsEvent};

const HINTS: &str = r#"
version: 1
sprite_format: '<sprite="{0}" name="{1}">'
categories: [Gamepad, Keyboard]
control_types:
  - devices: Gamepad
    scheme: Gamepad
    assets:
      - { category: Gamepad, asset: XboxGlyphs }
  - devices: ""
    scheme: KeyboardMouse
    assets:
      - { category: Keyboard, asset: KeyboardGlyphs }
glyphs:
  - { path: Button South, glyph: A, category: Gamepad }
  - { path: E, glyph: key_e, category: Keyboard }
actions:
  - name: Jump
    bindings:
      - { path: "<Gamepad>/buttonSouth", schemes: [Gamepad] }
      - { path: "<Keyboard>/e", schemes: [KeyboardMouse] }
  - name: Fire
    bindings:
      - { path: "<Mouse>/leftButton", schemes: [KeyboardMouse] }
"#;

fn load() -> HintsConfig {
    parse_config(HINTS).expect("hints should parse")
}

fn resolver_for(device: &str, config: HintsConfig) -> (DeviceState, HintResolver) {
    let mut devices = DeviceState::new();
    devices.set_used_device(Some(device));
    let resolver = HintResolver::new(config, &mut devices);
    (devices, resolver)
}

#[test]
fn device_classification_scenario() {
    let config = load();
    let pick = |device: &str| {
        select_control_type(&config.control_types, Some(device))
            .map(|i| config.control_types[i].scheme())
    };
    assert_eq!(pick("XInputGamepad"), Some("Gamepad"));
    assert_eq!(pick("Mouse"), Some("KeyboardMouse"));
}

#[test]
fn unbound_action_returns_action_name() {
    let (_devices, mut resolver) = resolver_for("XInputGamepad", load());

    assert_eq!(resolver.resolve_action("Fire").as_deref(), Some("[Fire]"));
    assert!(resolver.missing().is_empty());
}

#[test]
fn bound_action_returns_glyph_tag() {
    let (_devices, mut resolver) = resolver_for("XInputGamepad", load());

    assert_eq!(
        resolver.resolve_action("Jump").as_deref(),
        Some(r#"<sprite="XboxGlyphs" name="A">"#)
    );
}

#[test]
fn missing_category_is_recorded_once() {
    let mut config = load();
    config.control_types[0].assets_mut().clear();
    let (_devices, mut resolver) = resolver_for("XInputGamepad", config);

    assert_eq!(resolver.resolve_action("Jump").as_deref(), Some("[Button South]"));
    assert_eq!(resolver.resolve_action("Jump").as_deref(), Some("[Button South]"));
    assert_eq!(resolver.missing().len(), 1);
    assert!(resolver.missing().contains("Button South", "Gamepad"));
}

#[test]
fn resolution_is_idempotent_without_cache() {
    let mut config = load();
    config.control_types[0].assets_mut().clear();
    let (_devices, mut resolver) = resolver_for("XInputGamepad", config);

    // Distinct action objects with the same binding share the missing record.
    for name in ["Jump", "Hop", "Leap"] {
        let action = InputAction::new(name, vec![Binding::new("<Gamepad>/buttonSouth", ["Gamepad"])]);
        assert_eq!(resolver.resolve_glyph(&action), "[Button South]");
        assert_eq!(resolver.resolve_glyph(&action), "[Button South]");
    }
    assert_eq!(resolver.missing().len(), 1);
}

#[test]
fn device_switch_rerenders() {
    let (mut devices, mut resolver) = resolver_for("XInputGamepad", load());
    let events = resolver.subscribe();
    assert_eq!(
        resolver.resolve_action("Jump").as_deref(),
        Some(r#"<sprite="XboxGlyphs" name="A">"#)
    );

    assert!(!devices.set_used_device(Some("XInputGamepad")));
    assert!(!resolver.sync());

    assert!(devices.set_used_device(Some("/Keyboard")));
    assert!(resolver.sync());
    assert_eq!(events.try_iter().collect::<Vec<_>>(), vec![HintsEvent::Changed]);
    assert_eq!(
        resolver.resolve_action("Jump").as_deref(),
        Some(r#"<sprite="KeyboardGlyphs" name="key_e">"#)
    );
}

#[test]
fn secondary_device_does_not_select() {
    let (mut devices, mut resolver) = resolver_for("/Keyboard", load());

    devices.set_coop_used_devices(Some("/Keyboard"), Some("XInputGamepad"));
    assert!(!resolver.sync());
    assert_eq!(
        resolver.resolve_action("Jump").as_deref(),
        Some(r#"<sprite="KeyboardGlyphs" name="key_e">"#)
    );
}

#[test]
fn same_action_name_in_two_maps() {
    let yaml = r#"
version: 1
sprite_format: '<sprite="{0}" name="{1}">'
categories: [Gamepad]
control_types:
  - devices: Gamepad
    scheme: Gamepad
    assets:
      - { category: Gamepad, asset: Xbox }
glyphs:
  - { path: Button South, glyph: A, category: Gamepad }
actions:
  - name: Confirm
    map: Player
    bindings:
      - { path: "<Gamepad>/buttonSouth", schemes: [Gamepad] }
  - name: Confirm
    map: UI
    bindings:
      - { path: "<Gamepad>/buttonNorth", schemes: [Gamepad] }
"#;
    let config = parse_config(yaml).expect("hints should parse");
    let (_devices, mut resolver) = resolver_for("XInputGamepad", config);

    assert_eq!(
        resolver.resolve_action("Player/Confirm").as_deref(),
        Some(r#"<sprite="Xbox" name="A">"#)
    );
    assert_eq!(
        resolver.resolve_action("UI/Confirm").as_deref(),
        Some("[Button North]")
    );
    assert_eq!(resolver.missing().len(), 1);
    assert!(resolver.missing().contains("Button North", "Gamepad"));
}
