use once_cell::sync::Lazy;
use regex::Regex;

pub const ENTRY_INDENT: &str = "        ";
pub const PLACEHOLDER: &str = "<!-- Game links will be added here -->";

static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<div class="[^"]+"><a href="/games/[^"]+"><img src="/icons/[^"]+\.png"[^>]*><p class="popup_text">[^<]+</p></a></div>"#,
    )
    .unwrap()
});

static ALT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"alt="([^"]*)""#).unwrap());

/// Fragments found inside the links region.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub entries: Vec<&'a str>,
    /// Non-blank lines between entries that do not have the entry shape.
    pub unrecognized: Vec<&'a str>,
}

pub fn render_entry(file_name: &str, display_name: &str) -> String {
    let name = escape_html(display_name);
    let stem = file_name.strip_suffix(".html").unwrap_or(file_name);

    format!(
        r#"<div class="{name}"><a href="/games/{file}"><img src="/icons/{icon}.png" alt="{name}"><p class="popup_text">Play {name} today!</p></a></div>"#,
        name = name,
        file = escape_html(file_name),
        icon = escape_html(stem),
    )
}

pub fn extract_entries(region: &str) -> Extraction<'_> {
    let mut extraction = Extraction::default();
    let mut cursor = 0;

    for found in ENTRY.find_iter(region) {
        collect_unrecognized(&region[cursor..found.start()], &mut extraction.unrecognized);
        extraction.entries.push(found.as_str());
        cursor = found.end();
    }
    collect_unrecognized(&region[cursor..], &mut extraction.unrecognized);

    extraction
}

fn collect_unrecognized<'a>(gap: &'a str, out: &mut Vec<&'a str>) {
    out.extend(
        gap.lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty() && line.trim() != PLACEHOLDER),
    );
}

/// Display name carried in the entry's `alt` attribute, empty when missing.
pub fn display_name(entry: &str) -> String {
    ALT.captures(entry)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape_html(m.as_str()))
        .unwrap_or_default()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
