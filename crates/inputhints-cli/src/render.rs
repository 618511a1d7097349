/// Replaces `{key}` placeholders with the glyph returned for the key.
/// Placeholders without a glyph are kept as written.
pub(crate) fn render_text(
    text: &str,
    mut glyph: impl FnMut(&str) -> Option<String>,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find(['{', '}']).filter(|&i| tail.as_bytes()[i] == b'}')
        else {
            out.push('{');
            rest = tail;
            continue;
        };

        let key = &tail[..close];
        let found = if key.is_empty() { None } else { glyph(key) };
        match found {
            Some(tag) => out.push_str(&tag),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}
