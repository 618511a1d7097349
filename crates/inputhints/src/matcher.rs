use inputhints_config::ControlType;

/// Picks the control type for a device.
///
/// Control types are tried in list order and the first whose pattern
/// matches wins. Without a device, or when nothing matches, the last control
/// type is the fallback. Returns `None` only for an empty list.
pub fn select_control_type(
    control_types: &[ControlType],
    device: Option<&str>,
) -> Option<usize> {
    if let Some(device) = device {
        if let Some(index) = control_types.iter().position(|ct| ct.matches(device)) {
            return Some(index);
        }
    }
    control_types.len().checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control_types() -> Vec<ControlType> {
        vec![
            ControlType::new("Gamepad", "Gamepad", []),
            ControlType::new("", "KeyboardMouse", []),
        ]
    }

    #[test]
    fn first_matching_pattern_wins() {
        let cts = control_types();
        let index = select_control_type(&cts, Some("XInputGamepad"));
        assert_eq!(index.map(|i| cts[i].scheme()), Some("Gamepad"));
    }

    #[test]
    fn unmatched_device_falls_back_to_last() {
        let cts = control_types();
        let index = select_control_type(&cts, Some("Mouse"));
        assert_eq!(index.map(|i| cts[i].scheme()), Some("KeyboardMouse"));
    }

    #[test]
    fn no_device_falls_back_to_last() {
        let cts = control_types();
        assert_eq!(select_control_type(&cts, None), Some(1));
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert_eq!(select_control_type(&[], Some("XInputGamepad")), None);
        assert_eq!(select_control_type(&[], None), None);
    }

    #[test]
    fn position_beats_specificity() {
        let cts = vec![
            ControlType::new("Gamepad", "Generic", []),
            ControlType::new("DualSense.*Gamepad", "PlayStation", []),
            ControlType::new("", "KeyboardMouse", []),
        ];
        assert_eq!(select_control_type(&cts, Some("/DualSenseGamepadHID")), Some(0));
    }

    #[test]
    fn malformed_pattern_is_only_reachable_as_fallback() {
        let cts = vec![
            ControlType::new("(Gamepad", "Gamepad", []),
            ControlType::new("Keyboard", "KeyboardMouse", []),
        ];
        assert_eq!(select_control_type(&cts, Some("(Gamepad")), Some(1));

        let cts = vec![
            ControlType::new("Keyboard", "KeyboardMouse", []),
            ControlType::new("(Gamepad", "Gamepad", []),
        ];
        assert_eq!(select_control_type(&cts, Some("/XInputGamepad")), Some(1));
    }
}
