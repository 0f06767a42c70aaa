// src/core/vischars.rs
// Visible-text character iterator over an HTML fragment.
// Skips tags (<...>), decodes common entities, collapses ASCII whitespace to a single ' '.

pub struct VisChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

/// Longest entity body we try to decode (`&thinsp;` etc.).
const MAX_ENTITY: usize = 10;

impl<'a> VisChars<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len() } }

    #[inline]
    fn skip_tag(&mut self) {
        // called when current byte is '<'
        self.i += 1;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while self.i < self.n {
            match self.b[self.i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"'  if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => { self.i += 1; break; }
                _ => {}
            }
            self.i += 1;
        }
    }

    /// Called when current byte is '&'. A bare '&' (no ';' nearby, or an
    /// unknown name) is literal.
    #[inline]
    fn entity(&mut self) -> char {
        let start = self.i + 1;
        let limit = (start + MAX_ENTITY).min(self.n);
        let semi = match self.b[start..limit].iter().position(|&c| c == b';') {
            Some(off) => start + off,
            None => { self.i += 1; return '&'; }
        };
        match decode_entity(&self.s[start..semi]) {
            Some(ch) => { self.i = semi + 1; ch }
            // not an entity after all: keep the '&' and rescan what follows
            None => { self.i += 1; '&' }
        }
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s.get(self.i..)?.chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = body.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

impl<'a> Iterator for VisChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' => { self.skip_tag(); continue; }
                b'&' => return Some(self.entity()),
                b' ' | b'\t' | b'\r' | b'\n' => {
                    // collapse consecutive whitespace to a single space
                    while self.i < self.n {
                        match self.b[self.i] { b' ' | b'\t' | b'\r' | b'\n' => self.i += 1, _ => break }
                    }
                    return Some(' ');
                }
                _ => return self.next_char(),
            }
        }
        None
    }
}

/// Visible text of an HTML fragment, whitespace-collapsed and trimmed.
pub fn visible_text(s: &str) -> String {
    super::sanitize::normalize_ws(&VisChars::new(s).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_skipped_entities_decoded() {
        assert_eq!(visible_text("<b>A&amp;B</b>\n  <i a=\">\">c</i>"), "A&B c");
        assert_eq!(visible_text("&#51312;&#xAC00;"), "조가");
        assert_eq!(visible_text("Q & A"), "Q & A");
    }

    #[test]
    fn unknown_entity_body_is_kept_as_text() {
        assert_eq!(visible_text("탱커 & 딜러; 끝"), "탱커 & 딜러; 끝");
        assert_eq!(visible_text("a &bogus; b &lt;c&gt;"), "a &bogus; b <c>");
    }
}
