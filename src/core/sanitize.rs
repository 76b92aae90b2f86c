// src/core/sanitize.rs

/// Collapse runs of whitespace into single spaces and trim the ends.
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

/// First `max` characters of `s` (characters, not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => s[..cut].to_string(),
        None => s.to_string(),
    }
}

/// Everything after the last '/'. A trailing slash yields an empty segment.
pub fn last_path_segment(url: &str) -> String {
    url.rsplit('/').next().unwrap_or("").to_string()
}

/// Hide proxy credentials: keep only what follows the last '@'.
pub fn mask_proxy(proxy: &str) -> &str {
    match proxy.rfind('@') {
        Some(at) => &proxy[at + 1..],
        None => proxy,
    }
}
