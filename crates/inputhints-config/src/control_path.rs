/// Converts a raw binding path into its human-readable control path.
///
/// The device component (`<Gamepad>`, `*`) is dropped, usages lose their
/// braces, and every remaining component is split into capitalized words:
/// `<Gamepad>/leftStick/up` becomes `Left Stick/Up`.
pub fn human_readable_path(raw: &str) -> String {
    let mut components = raw.split('/').filter(|c| !c.is_empty()).peekable();

    if let Some(first) = components.peek() {
        if first.starts_with('<') || *first == "*" {
            components.next();
        }
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for component in components {
        let component = component
            .strip_prefix('{')
            .and_then(|c| c.strip_suffix('}'))
            .unwrap_or(component);
        if !out.is_empty() {
            out.push('/');
        }
        push_words(&mut out, component);
    }
    out
}

fn push_words(out: &mut String, component: &str) {
    let mut word_len = 0usize;
    let mut prev: Option<char> = None;

    for ch in component.chars() {
        if ch == '_' || ch == ' ' {
            prev = None;
            word_len = 0;
            continue;
        }

        let boundary = match prev {
            None => word_len == 0 && !out.is_empty() && !out.ends_with('/'),
            Some(p) => {
                (ch.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()))
                    || (ch.is_ascii_digit() && p.is_alphabetic() && word_len > 1)
            }
        };
        if boundary {
            out.push(' ');
            word_len = 0;
        }

        if word_len == 0 {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_len += 1;
        prev = Some(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_device_component() {
        assert_eq!(human_readable_path("<Gamepad>/buttonSouth"), "Button South");
        assert_eq!(human_readable_path("<Keyboard>/e"), "E");
        assert_eq!(human_readable_path("*/leftButton"), "Left Button");
        assert_eq!(
            human_readable_path("<XInputController>{LeftHand}/rightTrigger"),
            "Right Trigger"
        );
    }

    #[test]
    fn keeps_nested_components() {
        assert_eq!(human_readable_path("<Gamepad>/leftStick/up"), "Left Stick/Up");
        assert_eq!(human_readable_path("<Mouse>/scroll/y"), "Scroll/Y");
    }

    #[test]
    fn splits_digits() {
        assert_eq!(human_readable_path("<Keyboard>/f1"), "F1");
        assert_eq!(human_readable_path("<Keyboard>/numpad0"), "Numpad 0");
        assert_eq!(human_readable_path("<Keyboard>/digit1"), "Digit 1");
    }

    #[test]
    fn usages_and_plain_paths() {
        assert_eq!(human_readable_path("*/{Submit}"), "Submit");
        assert_eq!(human_readable_path("leftShoulder"), "Left Shoulder");
        assert_eq!(human_readable_path("Button South"), "Button South");
        assert_eq!(human_readable_path("left_shift"), "Left Shift");
        assert_eq!(human_readable_path(""), "");
    }
}
