use crate::error::{GameError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

pub const OPEN_MARKER: &str = r#"<div class="games">"#;

// Comments are matched too so any div markup inside them is skipped.
static DIV_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(<!--.*?-->)|<(/?)div(?:\s[^>]*)?>").unwrap());

/// Byte spans of the links container inside the index document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinksRegion {
    pub open: Range<usize>,
    pub close: Range<usize>,
}

impl LinksRegion {
    /// Everything between the opening and closing tags.
    pub fn inner(&self) -> Range<usize> {
        self.open.end..self.close.start
    }
}

/// Locates the first links container and its matching `</div>`, counting
/// nested divs on the way.
pub fn find_region(document: &str) -> Result<LinksRegion> {
    let start = document.find(OPEN_MARKER).ok_or_else(|| {
        GameError::Structural(format!("links region marker {} not found", OPEN_MARKER))
    })?;
    let open = start..start + OPEN_MARKER.len();

    let mut depth = 1usize;
    for tag in DIV_TAG.captures_iter(&document[open.end..]) {
        if tag.get(1).is_some() {
            continue;
        }
        let Some(whole) = tag.get(0) else { continue };
        let closing = tag.get(2).is_some_and(|m| !m.as_str().is_empty());

        if !closing {
            depth += 1;
            continue;
        }

        depth -= 1;
        if depth == 0 {
            let close = open.end + whole.start()..open.end + whole.end();
            return Ok(LinksRegion { open, close });
        }
    }

    Err(GameError::Structural(format!(
        "closing tag for links region {} not found",
        OPEN_MARKER
    )))
}
