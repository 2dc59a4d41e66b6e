//! Heading anchors for the "On this page" outline.
//!
//! Pages mark headings either as `<div class="h2">…</div>` or as plain
//! `<h1>`–`<h3>` tags. Each gets a stable `id`, de-duplicated per page.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use rustc_hash::FxHashMap;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div class="(h[1-3])">(.*?)</div>|<(h[1-3])>(.*?)</h[1-3]>"#).unwrap()
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A heading found in rendered page HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 to 3.
    pub level: u8,
    /// Inner HTML with tags removed.
    pub text: String,
    pub id: String,
}

/// Add `id` attributes to headings, returning the new HTML and the outline.
pub fn anchor_headings(html: &str) -> (String, Vec<Heading>) {
    let mut headings = Vec::new();
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    let anchored = HEADING.replace_all(html, |caps: &Captures| {
        let (div, tag, inner) = match (caps.get(1), caps.get(3)) {
            (Some(class), _) => (true, class.as_str(), &caps[2]),
            (None, Some(tag)) => (false, tag.as_str(), &caps[4]),
            (None, None) => return caps[0].to_string(),
        };

        let text = TAG.replace_all(inner, "").trim().to_string();
        let id = unique_id(&mut seen, heading_id(&text));
        let level = tag.as_bytes()[1] - b'0';
        headings.push(Heading {
            level,
            text,
            id: id.clone(),
        });

        if div {
            format!(r#"<div class="{tag}" id="{id}">{inner}</div>"#)
        } else {
            format!(r#"<{tag} id="{id}">{inner}</{tag}>"#)
        }
    });

    (anchored.into_owned(), headings)
}

/// ASCII id for a heading: transliterated, lower-case, `[a-z0-9-]`.
pub fn heading_id(text: &str) -> String {
    let ascii = deunicode::deunicode(text).to_lowercase();
    let mut id = String::with_capacity(ascii.len());

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c);
        } else if (c.is_whitespace() || c == '-' || c == '_') && !id.is_empty() && !id.ends_with('-')
        {
            id.push('-');
        }
    }

    let trimmed = id.trim_end_matches('-');
    if trimmed.is_empty() {
        "section".to_string()
    } else {
        trimmed.to_string()
    }
}

fn unique_id(seen: &mut FxHashMap<String, usize>, base: String) -> String {
    let Some(&last) = seen.get(&base) else {
        seen.insert(base.clone(), 1);
        return base;
    };

    // Emitted ids are bases too: a later `Setup 2` must not reuse `setup-2`.
    let mut n = last;
    loop {
        n += 1;
        let candidate = format!("{base}-{n}");
        if !seen.contains_key(&candidate) {
            seen.insert(candidate.clone(), 1);
            seen.insert(base, n);
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_id() {
        assert_eq!(heading_id("T-Spin Double"), "t-spin-double");
        assert_eq!(heading_id("  What's next?  "), "whats-next");
        assert!(heading_id("Ｔスピン").bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'));
        assert_eq!(heading_id("Café"), "cafe");
        assert_eq!(heading_id("!!!"), "section");
    }

    #[test]
    fn test_anchor_div_headings() {
        let html = "<div class=\"h1\">Openers</div>\n<p>x</p>\n<div class=\"h2\">TKI <b>3</b></div>\n";
        let (out, headings) = anchor_headings(html);

        assert!(out.contains(r#"<div class="h1" id="openers">Openers</div>"#));
        assert!(out.contains(r#"<div class="h2" id="tki-3">TKI <b>3</b></div>"#));
        assert!(out.contains("<p>x</p>"));
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[1].text, "TKI 3");
    }

    #[test]
    fn test_anchor_plain_headings_deduplicated() {
        let (out, headings) = anchor_headings("<h2>Setup</h2><h3>Setup</h3><h2>Setup</h2>");
        let ids: Vec<_> = headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup-2", "setup-3"]);
        assert!(out.starts_with(r#"<h2 id="setup">Setup</h2><h3 id="setup-2">"#));
    }

    #[test]
    fn test_anchor_ids_skip_generated_collisions() {
        let (_, headings) = anchor_headings("<h2>Setup</h2><h2>Setup</h2><h2>Setup 2</h2><h2>Setup</h2>");
        let ids: Vec<_> = headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup-2", "setup-2-2", "setup-3"]);
    }

    #[test]
    fn test_anchor_leaves_other_html() {
        let html = "<div class=\"h4\">Deep</div><div class=\"h2\" id=\"kept\">Kept</div>";
        let (out, headings) = anchor_headings(html);
        assert_eq!(out, html);
        assert!(headings.is_empty());
    }

    #[test]
    fn test_anchor_is_deterministic() {
        let html = "<h1>A</h1><h1>A</h1>";
        assert_eq!(anchor_headings(html), anchor_headings(html));
    }
}
