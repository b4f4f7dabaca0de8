// src/core/html.rs
//
// Writing side: `escape` and the `Html` buffer used by every renderer.
// Reading side: case-insensitive tag scanning for legacy offer pages.
// The scanners are deliberately naive and only need to cope with the markup
// this site has produced itself.

/* ---------------- Writing ---------------- */

/// Escape text for use in HTML text or a quoted attribute value.
pub fn escape(s: &str) -> String {
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

/// Append-only document buffer. `push` is for trusted markup, `text` escapes.
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self { Self { buf: String::with_capacity(16 * 1024) } }

    pub fn push<S: AsRef<str>>(&mut self, markup: S) { self.buf.push_str(markup.as_ref()); }

    pub fn text(&mut self, s: &str) { self.buf.push_str(&escape(s)); }

    /// ` name="value"` with the value escaped.
    pub fn attr(&mut self, name: &str, value: &str) {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape(value));
        self.buf.push('"');
    }

    /// `<tag class="class">text</tag>`
    pub fn element(&mut self, tag: &str, class: &str, text: &str) {
        self.push(join!("<", tag));
        self.attr("class", class);
        self.push(">");
        self.text(text);
        self.push(join!("</", tag, ">"));
    }

    pub fn finish(self) -> String { self.buf }
}

impl Default for Html {
    fn default() -> Self { Self::new() }
}

/* ---------------- Reading ---------------- */

/// Fast ASCII-only lowercasing. Keeps byte offsets identical to the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Returns the HTML *inside* the first `open_pat ... close_pat` pair.
///
/// ```
/// use offer_pages::core::html::slice_between_ci;
/// let doc = "<TITLE>Wise</title>";
/// assert_eq!(slice_between_ci(doc, "<title", "</title>"), Some("Wise"));
/// ```
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Given a complete block like `<td ...>INNER</td>`, return INNER.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Remove all tags, decode the few entities the pages use, collapse whitespace.
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
    super::sanitize::normalize_ws(&decode_entities(&out))
}

pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Value of `name="..."` (or single-quoted) inside an opening tag.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let needle = join!(&to_lower(name), "=");
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        // must be a whole attribute name, not the tail of another one
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        let v = at + needle.len();
        if boundary {
            let rest = &open_tag[v..];
            let quote = rest.chars().next()?;
            if quote == '"' || quote == '\'' {
                let end = rest[1..].find(quote)?;
                return Some(decode_entities(&rest[1..1 + end]));
            }
            let end = rest.find(|c: char| c.is_whitespace() || c == '>').unwrap_or(rest.len());
            return Some(decode_entities(&rest[..end]));
        }
        from = v;
    }
    None
}

/// Does a `class` attribute value contain `class` as a whole word?
pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr_value(open_tag, "class")
        .map(|v| v.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Find the next `<tag ...>` whose class list contains `class`, starting at `from`.
/// Returns `(start, end_of_open_tag)`.
pub fn find_open_tag_with_class(s: &str, tag: &str, class: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = join!("<", &to_lower(tag));
    let mut i = from;
    while let Some(rel) = lc.get(i..)?.find(&open) {
        let start = i + rel;
        let after_name = start + open.len();
        let open_end = s[start..].find('>')? + start + 1;
        // reject `<divider` when looking for `<div`
        let next = lc.as_bytes().get(after_name).copied().unwrap_or(b'>');
        if (next.is_ascii_whitespace() || next == b'>' || next == b'/')
            && has_class(&s[start..open_end], class)
        {
            return Some((start, open_end));
        }
        i = open_end;
    }
    None
}

/// Complete `<tag ...>...</tag>` block starting at `start`, honouring nesting of
/// the same tag name. Returns the end offset (exclusive).
pub fn balanced_block_end(s: &str, tag: &str, start: usize) -> Option<usize> {
    let lc = to_lower(s);
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag), ">");
    let mut depth = 0usize;
    let mut i = start;
    loop {
        let next_open = lc[i..].find(&open).map(|p| p + i);
        let next_close = lc[i..].find(&close).map(|p| p + i)?;
        match next_open {
            Some(o) if o < next_close => {
                let b = lc.as_bytes().get(o + open.len()).copied().unwrap_or(b'>');
                if b.is_ascii_whitespace() || b == b'>' {
                    depth += 1;
                }
                i = o + open.len();
            }
            _ => {
                depth = depth.checked_sub(1)?;
                i = next_close + close.len();
                if depth == 0 {
                    return Some(i);
                }
            }
        }
    }
}

/// All `<tag class="...class...">` blocks (nesting aware), in document order.
pub fn blocks_with_class<'a>(s: &'a str, tag: &str, class: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut from = 0;
    while let Some((start, open_end)) = find_open_tag_with_class(s, tag, class, from) {
        match balanced_block_end(s, tag, start) {
            Some(end) => {
                out.push(&s[start..end]);
                from = end;
            }
            None => from = open_end,
        }
    }
    out
}

/// Text of the first element with `class`, tags stripped.
pub fn text_of_class(s: &str, tag: &str, class: &str) -> Option<String> {
    blocks_with_class(s, tag, class)
        .first()
        .map(|b| strip_tags(inner_after_open_tag(b)))
}
