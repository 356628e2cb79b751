// src/core/sanitize.rs

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

/// File stem from a display name. Letters of any script and digits are kept,
/// whitespace runs become one '_', everything else is dropped.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

/// Minimal HTML text escaping for the printable page.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_keep_letters_of_any_script() {
        assert_eq!(sanitize_filename("Ali  Hassan", "student"), "Ali_Hassan");
        assert_eq!(sanitize_filename("علي حسن", "student"), "علي_حسن");
        assert_eq!(sanitize_filename("a/b:c", "student"), "abc");
        assert_eq!(sanitize_filename("  ", "student"), "student");
        assert_eq!(sanitize_filename("", "student"), "student");
    }

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  a \t b\n"), "a b");
    }

    #[test]
    fn html_escaping() {
        assert_eq!(escape_html("<b>A&B</b>"), "&lt;b&gt;A&amp;B&lt;/b&gt;");
    }
}
