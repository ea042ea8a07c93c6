//! Lightweight HTML minification.
//!
//! Works on the raw markup without building a DOM. Content of `<pre>`,
//! `<textarea>`, `<script>` and `<style>` is copied verbatim; scripts and
//! stylesheets are not minified.

use pagewatch_config::MinifyOptions;

/// Elements whose content is never rewritten.
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "pre", "textarea"];

/// Apply `options` to `html`. Returns the input unchanged when nothing is enabled.
///
/// ```
/// use pagewatch_config::MinifyOptions;
/// use pagewatch_core::minify_html;
///
/// let html = "<ul>\n  <li>One</li>\n  <!-- todo -->\n</ul>";
/// assert_eq!(minify_html(html, &MinifyOptions::all()), "<ul><li>One</li></ul>");
/// ```
pub fn minify_html(html: &str, options: &MinifyOptions) -> String {
    if !options.is_enabled() {
        return html.to_string();
    }

    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    let mut raw_element: Option<&'static str> = None;

    while !rest.is_empty() {
        if let Some(element) = raw_element.take() {
            let end = find_closing_tag(rest, element).unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map(|i| i + 3).unwrap_or(rest.len());
            let comment = &rest[..end];
            if !options.remove_comments || is_conditional_comment(comment) {
                out.push_str(comment);
            }
            rest = &rest[end..];
            continue;
        }

        if starts_tag(rest) {
            let end = find_tag_end(rest);
            let tag = &rest[..end];
            let (name, closing) = tag_name(tag);
            out.push_str(&rewrite_tag(tag, &name, options));

            if !closing && !tag.ends_with("/>") {
                raw_element = RAW_TEXT_ELEMENTS.iter().copied().find(|e| *e == name);
            }
            rest = &rest[end..];
            continue;
        }

        // Text runs up to the next markup. A stray '<' is plain text.
        let skip = rest.chars().next().map_or(0, char::len_utf8);
        let end = rest[skip..]
            .find('<')
            .map(|i| i + skip)
            .unwrap_or(rest.len());
        let text = &rest[..end];
        if options.collapse_whitespace {
            collapse_text(text, &mut out);
        } else {
            out.push_str(text);
        }
        rest = &rest[end..];
    }

    out
}

fn is_conditional_comment(comment: &str) -> bool {
    comment.starts_with("<!--[if") || comment.starts_with("<!--<![endif")
}

fn starts_tag(s: &str) -> bool {
    let mut chars = s.chars();
    if chars.next() != Some('<') {
        return false;
    }
    match chars.next() {
        Some('/') => chars.next().is_some_and(|c| c.is_ascii_alphabetic()),
        Some('!') => true,
        Some(c) => c.is_ascii_alphabetic(),
        None => false,
    }
}

/// Byte index just past the `>` closing the tag at the start of `s`,
/// skipping `>` inside quoted attribute values.
fn find_tag_end(s: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return i + 1,
            (None, _) => {}
        }
    }
    s.len()
}

/// Lowercased element name and whether the tag is a closing tag.
fn tag_name(tag: &str) -> (String, bool) {
    let body = tag.trim_start_matches('<');
    let (body, closing) = match body.strip_prefix('/') {
        Some(rest) => (rest, true),
        None => (body, false),
    };
    let name: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (name, closing)
}

/// Start of `</element` (case-insensitive) in `s`.
fn find_closing_tag(s: &str, element: &str) -> Option<usize> {
    let needle = format!("</{element}");
    s.to_ascii_lowercase().find(&needle)
}

fn rewrite_tag(tag: &str, name: &str, options: &MinifyOptions) -> String {
    let default_type = match name {
        "script" if options.remove_script_type_attributes => Some("text/javascript"),
        "style" | "link" if options.remove_style_type_attributes => Some("text/css"),
        _ => None,
    };

    match default_type {
        Some(value) => remove_attribute(tag, "type", value),
        None => tag.to_string(),
    }
}

/// Remove `attr=value` (any quoting, case-insensitive) and the whitespace before it.
fn remove_attribute(tag: &str, attr: &str, value: &str) -> String {
    let lower = tag.to_ascii_lowercase();
    let candidates = [
        format!("{attr}=\"{value}\""),
        format!("{attr}='{value}'"),
        format!("{attr}={value}"),
    ];

    for candidate in &candidates {
        let mut search_from = 0;
        while let Some(offset) = lower[search_from..].find(candidate.as_str()) {
            let start = search_from + offset;
            let end = start + candidate.len();
            let preceded_by_space = lower[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_whitespace());
            let followed_by_boundary = lower[end..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_whitespace() || c == '>' || c == '/');

            if preceded_by_space && followed_by_boundary {
                let trimmed_start = lower[..start].trim_end().len();
                let mut rewritten = String::with_capacity(tag.len());
                rewritten.push_str(&tag[..trimmed_start]);
                rewritten.push_str(&tag[end..]);
                return rewritten;
            }
            search_from = end;
        }
    }

    tag.to_string()
}

/// Collapse whitespace runs to a single space; whitespace-only text is dropped.
/// A run continuing a space already written (e.g. across a removed comment)
/// adds nothing.
fn collapse_text(text: &str, out: &mut String) {
    if text.chars().all(char::is_whitespace) {
        return;
    }

    let mut in_space = out.ends_with(' ');
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
}
