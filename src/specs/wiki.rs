// src/specs/wiki.rs
//! Scraping *spec* for a champion wiki page.
//!
//! Footnotes:
//!   <ol class="wiki-list-foot"> <li id="fn-3">3. 라인전 극상성 ↩</li> … </ol>
//! Counters:
//!   the innermost <div> around the first text containing a section marker
//!   ("상대하기 힘든 챔피언" / "카운터"); every <a> inside it is a name mention,
//!   and a <sup><a href="#fn-3">[3]</a></sup> right after the link is its footnote.
//!
//! Anchors inside <sup> are footnote links, never names.

use crate::config::consts::{COUNTER_SECTION_MARKERS, FOOTNOTE_ID_PREFIX, FOOTNOTE_LIST_CLASS};
use crate::core::html::{attr_value, has_class, strip_tags, TagScanner};
use crate::core::vischars::visible_text;
use crate::extract::document::{CounterSection, Mention, SourceDocument};

pub fn read_document(html: &str) -> SourceDocument {
    let scan = TagScanner::new(html);
    let footnotes = footnotes_in(&scan);
    let counters = counters_in(&scan);
    logf!(
        "Wiki: footnotes={}, counters={}",
        footnotes.len(),
        counters.as_ref().map_or(s!("none"), |c| c.mentions.len().to_string())
    );
    SourceDocument { counters, footnotes }
}

/* ---------------- footnotes ---------------- */

pub fn read_footnotes(doc: &str) -> Vec<(String, String)> {
    footnotes_in(&TagScanner::new(doc))
}

fn footnotes_in(scan: &TagScanner) -> Vec<(String, String)> {
    let doc = scan.src();
    let mut out = Vec::new();

    // first <ol class="... wiki-list-foot ...">
    let mut pos = 0usize;
    let list_open_end = loop {
        let Some((s, e)) = scan.find_open("ol", pos) else { return out };
        if has_class(&doc[s..e], FOOTNOTE_LIST_CLASS) {
            break e;
        }
        pos = e;
    };
    let list_end = scan.block_end("ol", list_open_end).unwrap_or(doc.len());

    let mut pos = list_open_end;
    while let Some((li_s, li_e)) = scan.find_open("li", pos).filter(|&(s, _)| s < list_end) {
        let li_end = scan.block_end("li", li_e).unwrap_or(list_end).min(list_end);
        pos = li_end;

        let Some(id) = attr_value(&doc[li_s..li_e], "id") else { continue };
        if !id.contains(FOOTNOTE_ID_PREFIX) {
            continue;
        }
        let number = id.replace(FOOTNOTE_ID_PREFIX, "");
        out.push((number, visible_text(&doc[li_e..li_end])));
    }
    out
}

/* ---------------- counters ---------------- */

pub fn read_counters(doc: &str) -> Option<CounterSection> {
    counters_in(&TagScanner::new(doc))
}

fn counters_in(scan: &TagScanner) -> Option<CounterSection> {
    let doc = scan.src();
    let Some(marker_at) = find_marker_text(scan, COUNTER_SECTION_MARKERS) else {
        logd!("Wiki: no counters marker on page");
        return None;
    };
    let Some(div_start) = scan.enclosing_open("div", marker_at) else {
        logd!("Wiki: counters marker outside any <div>");
        return None;
    };
    let open_end = scan.tag_end(div_start)?;
    let end = scan.block_end("div", open_end).unwrap_or(doc.len());
    Some(read_mentions(scan, open_end, end))
}

/// Byte offset of the first text run (outside tags, scripts and styles)
/// that contains any of `markers`.
fn find_marker_text(scan: &TagScanner, markers: &[&str]) -> Option<usize> {
    let doc = scan.src();
    let lc = scan.lowered();
    let n = doc.len();
    let mut i = 0usize;
    let mut skip_until: Option<&str> = None;

    while i < n {
        if doc.as_bytes()[i] == b'<' {
            let gt = scan.tag_end(i)?;
            let tag = &lc[i..gt];
            match skip_until {
                Some(close) if tag.starts_with(close) => skip_until = None,
                Some(_) => {}
                None if tag.starts_with("<script") => skip_until = Some("</script"),
                None if tag.starts_with("<style") => skip_until = Some("</style"),
                None => {}
            }
            i = gt;
            continue;
        }
        let run_end = scan.next_lt(i).unwrap_or(n);
        if skip_until.is_none() && markers.iter().any(|m| doc[i..run_end].contains(m)) {
            return Some(i);
        }
        i = run_end;
    }
    None
}

/// Every `<a>` in `start..end` outside a `<sup>`, in one forward pass.
fn read_mentions(scan: &TagScanner, start: usize, end: usize) -> CounterSection {
    let doc = scan.src();
    let mut mentions = Vec::new();
    let mut pos = start;

    while let Some(at) = scan.next_lt(pos).filter(|&at| at < end) {
        if scan.is_open_at(at, "sup") {
            // footnote block before the next link: skip it whole
            let Some(sup_e) = scan.tag_end(at) else { break };
            pos = scan.block_end("sup", sup_e).unwrap_or(end);
            continue;
        }
        if !scan.is_open_at(at, "a") {
            pos = at + 1;
            continue;
        }

        let Some(a_e) = scan.tag_end(at) else { break };
        let Some(close) = scan.lowered()[a_e..end].find("</a>").map(|c| a_e + c) else { break };
        let name = strip_tags(&doc[a_e..close]);
        let after = close + "</a>".len();

        mentions.push(Mention { name, footnote: footnote_after(scan, after, end) });
        pos = after;
    }

    CounterSection { mentions }
}

/// Footnote id of a `<sup>` that directly follows `from` (whitespace allowed).
fn footnote_after(scan: &TagScanner, from: usize, end: usize) -> Option<String> {
    let rest = &scan.src()[from..end];
    let at = from + (rest.len() - rest.trim_start().len());
    if at >= end || !scan.is_open_at(at, "sup") {
        return None;
    }
    let sup_e = scan.tag_end(at)?;
    let sup_end = scan.block_end("sup", sup_e).unwrap_or(end);

    let (a_s, a_e) = scan.find_open("a", sup_e).filter(|&(a_s, _)| a_s < sup_end)?;
    let href = attr_value(&scan.src()[a_s..a_e], "href")?;
    footnote_number(&href)
}

/// Digits after `fn-` in an href such as `#fn-12`.
fn footnote_number(href: &str) -> Option<String> {
    let at = href.find(FOOTNOTE_ID_PREFIX)? + FOOTNOTE_ID_PREFIX.len();
    let digits: String = href[at..].chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <html><head><script>var t = "카운터";</script></head><body>
        <div class="wiki-paragraph">
          <div><span>상대하기 힘든 챔피언</span><br>
            <a href="/w/케인">케인</a><sup><a href="#fn-1">[1]</a></sup>,
            <a href="/w/럼블">럼블</a> <sup><a href="#fn-2">[2]</a></sup>,
            <a href="/w/가렌">가렌</a>,
            <a href="/w/x">아주 긴 문장으로 된 링크 텍스트</a>
          </div>
        </div>
        <div>unrelated <a href="/w/티모">티모</a></div>
        <ol class="wiki-list wiki-list-foot">
          <li id="fn-1"><a href="#rfn-1">[1]</a> 라인전 극상성이다. ↩</li>
          <li id="fn-2"><a href="#rfn-2">[2]</a> 조금 불리하다.</li>
          <li class="other">no id</li>
        </ol>
        </body></html>
    "##;

    #[test]
    fn footnotes_are_read_from_foot_list() {
        let notes = read_footnotes(PAGE);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].0, "1");
        assert!(notes[0].1.contains("라인전 극상성이다."));
        assert_eq!(notes[1].0, "2");
    }

    #[test]
    fn counters_come_from_the_enclosing_div() {
        let sec = read_counters(PAGE).unwrap();
        let got: Vec<(&str, Option<&str>)> = sec
            .mentions
            .iter()
            .map(|m| (m.name.as_str(), m.footnote.as_deref()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("케인", Some("1")),
                ("럼블", Some("2")),
                ("가렌", None),
                ("아주 긴 문장으로 된 링크 텍스트", None),
            ]
        );
    }

    #[test]
    fn page_without_marker_has_no_section() {
        assert!(read_counters("<div><a href='/w/a'>a</a></div>").is_none());
        assert!(read_footnotes("<ol><li id='fn-1'>x</li></ol>").is_empty());
    }

    #[test]
    fn long_sections_are_read_in_one_pass() {
        let mut page = s!("<div>카운터 ");
        for i in 0..2000 {
            page.push_str(&format!("<A HREF=\"/w/{i}\">챔피언{i}</A><SUP><a href=\"#fn-{i}\">[{i}]</a></SUP>, "));
        }
        page.push_str("</div>");

        let sec = read_counters(&page).unwrap();
        assert_eq!(sec.mentions.len(), 2000);
        assert_eq!(sec.mentions[1999].name, "챔피언1999");
        assert_eq!(sec.mentions[1999].footnote.as_deref(), Some("1999"));
    }

    #[test]
    fn footnote_number_parses_digits() {
        assert_eq!(footnote_number("#fn-12").as_deref(), Some("12"));
        assert_eq!(footnote_number("#fn-x"), None);
        assert_eq!(footnote_number("/w/a"), None);
    }
}
