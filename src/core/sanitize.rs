// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Icon fonts render glyphs from the Private Use Area; in scraped text they
/// show up as tofu in front of phone numbers and addresses.
pub fn is_icon_glyph(ch: char) -> bool {
    matches!(ch as u32, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}

/// Visible text: icon glyphs dropped, whitespace normalized.
pub fn clean_text(s: &str) -> String {
    let visible: String = s.chars().filter(|&c| !is_icon_glyph(c)).collect();
    normalize_ws(&visible)
}

/// Strip `prefix` (ASCII case-insensitive) if present.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  Acme \n\t Inc  "), "Acme Inc");
    }

    #[test]
    fn icon_glyphs_are_dropped() {
        assert_eq!(clean_text("\u{e0b0}\n  +1 555-0100 "), "+1 555-0100");
    }

    #[test]
    fn prefix_is_case_insensitive() {
        assert_eq!(strip_prefix_ci("MAILTO:a@b.c", "mailto:"), "a@b.c");
        assert_eq!(strip_prefix_ci("a@b.c", "mailto:"), "a@b.c");
        assert_eq!(strip_prefix_ci("ma", "mailto:"), "ma");
    }
}
