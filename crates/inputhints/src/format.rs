/// Fills a glyph tag template: `{0}` becomes the asset name, `{1}` the glyph
/// name, and `{{`/`}}` are literal braces. Anything else is copied as is.
pub fn format_glyph_tag(template: &str, asset: &str, glyph: &str) -> String {
    let mut out = String::with_capacity(template.len() + asset.len() + glyph.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let (piece, skip) = if tail.starts_with("{{") {
            ("{", 2)
        } else if tail.starts_with("}}") {
            ("}", 2)
        } else if tail.starts_with("{0}") {
            (asset, 3)
        } else if tail.starts_with("{1}") {
            (glyph, 3)
        } else {
            (&tail[..1], 1)
        };
        out.push_str(piece);
        rest = &tail[skip..];
    }

    out.push_str(rest);
    out
}
