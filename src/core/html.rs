// src/core/html.rs
// Case-insensitive tag scanning helpers. Offsets are byte offsets into the
// original string; `to_lower` only touches ASCII so offsets line up.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&out))
}

/// True if `lc[at..]` starts a tag named exactly `name` (`<a` must not match `<abbr`).
fn is_tag_at(lc: &str, at: usize, name: &str, closing: bool) -> bool {
    let prefix_len = if closing { 2 } else { 1 };
    let rest = &lc[at..];
    let opener = if closing { "</" } else { "<" };
    if !rest.starts_with(opener) || !rest[prefix_len..].starts_with(name) {
        return false;
    }
    match rest.as_bytes().get(prefix_len + name.len()) {
        Some(b) => b.is_ascii_whitespace() || *b == b'>' || *b == b'/',
        None => false,
    }
}

/// Tag scanner over one document. The document is lowercased once, so a
/// whole page can be walked without re-lowering it per lookup.
/// Tag names passed to the methods must already be lowercase.
pub struct TagScanner<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> TagScanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: to_lower(src) }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    /// The lowercased document; offsets match `src`.
    pub fn lowered(&self) -> &str {
        &self.lc
    }

    /// Index just past the `>` closing the tag that starts at `at`.
    pub fn tag_end(&self, at: usize) -> Option<usize> {
        self.src.get(at..)?.find('>').map(|g| at + g + 1)
    }

    /// Next `<` at or after `from`.
    pub fn next_lt(&self, from: usize) -> Option<usize> {
        self.lc.get(from..)?.find('<').map(|rel| from + rel)
    }

    pub fn is_open_at(&self, at: usize, name: &str) -> bool {
        is_tag_at(&self.lc, at, name, false)
    }

    /// Next opening tag `<name ...>` at or after `from`.
    /// Returns (start of '<', index just past '>').
    pub fn find_open(&self, name: &str, from: usize) -> Option<(usize, usize)> {
        let mut pos = from;
        while let Some(at) = self.next_lt(pos) {
            if self.is_open_at(at, name) {
                return Some((at, self.tag_end(at)?));
            }
            pos = at + 1;
        }
        None
    }

    /// Given the end of an opening `<name>` tag, find the index just past its
    /// matching `</name>`, honoring nesting of the same tag.
    pub fn block_end(&self, name: &str, open_end: usize) -> Option<usize> {
        let mut depth = 1usize;
        let mut pos = open_end;
        while let Some(at) = self.next_lt(pos) {
            if is_tag_at(&self.lc, at, name, true) {
                depth -= 1;
                let gt = self.tag_end(at)?;
                if depth == 0 {
                    return Some(gt);
                }
                pos = gt;
            } else if self.is_open_at(at, name) {
                let gt = self.tag_end(at)?;
                // self-closing tags do not nest
                if !self.src[at..gt].trim_end_matches('>').ends_with('/') {
                    depth += 1;
                }
                pos = gt;
            } else {
                pos = at + 1;
            }
        }
        None
    }

    /// Start of the innermost `<name>` element that is still open at byte `pos`.
    pub fn enclosing_open(&self, name: &str, pos: usize) -> Option<usize> {
        let mut stack: Vec<usize> = Vec::new();
        let mut i = 0usize;
        while let Some(at) = self.next_lt(i).filter(|&at| at < pos) {
            if is_tag_at(&self.lc, at, name, true) {
                stack.pop();
            } else if self.is_open_at(at, name) {
                stack.push(at);
            }
            i = at + 1;
        }
        stack.pop()
    }
}

/// Value of attribute `attr` inside an opening tag such as `<a href="x">`.
/// Accepts double, single, or no quotes.
pub fn attr_value(open_tag: &str, attr: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let needle = join!(&to_lower(attr), "=");
    let mut from = 0usize;
    let hp = loop {
        let p = lc.get(from..)?.find(&needle)? + from;
        // attribute names must start after whitespace (`data-href=` is not `href=`)
        let prev = lc.as_bytes().get(p.wrapping_sub(1)).copied();
        if p > 0 && prev.is_some_and(|b| b.is_ascii_whitespace()) {
            break p;
        }
        from = p + needle.len();
    };
    let val = open_tag[hp + needle.len()..].trim_start();
    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e)
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
    }.unwrap_or(val.len());
    Some(val[start_off..end].to_string())
}

/// True if the class attribute of `open_tag` contains `class_name` as one of its tokens.
pub fn has_class(open_tag: &str, class_name: &str) -> bool {
    attr_value(open_tag, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class_name)))
        .unwrap_or(false)
}
