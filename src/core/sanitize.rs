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

/// Drop a leading `prefix` (ASCII case-insensitive), then trim.
/// `"by Jane Doe"` with `"by "` → `"Jane Doe"`; a bare `"by"` → `""`.
pub fn strip_prefix_ci(s: &str, prefix: &str) -> String {
    let t = s.trim();
    let word = prefix.trim_end();
    match t.get(..word.len()) {
        Some(head) if head.eq_ignore_ascii_case(word) => {
            let rest = &t[word.len()..];
            // a prefix ending in a space must stand alone ("Bystander" stays)
            if rest.is_empty() || rest.starts_with(char::is_whitespace) || word.len() == prefix.len() {
                rest.trim().to_string()
            } else {
                t.to_string()
            }
        }
        _ => t.to_string(),
    }
}

/// File name minus its final extension (`game.v2.tic` → `game.v2`).
pub fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => filename,
        Some(dot) => &filename[..dot],
    }
}

/// Lower-case extension without the dot, if any.
pub fn file_ext(filename: &str) -> Option<String> {
    match filename.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < filename.len() => Some(filename[dot + 1..].to_ascii_lowercase()),
        _ => None,
    }
}
