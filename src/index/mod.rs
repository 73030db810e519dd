//! Edits the game links region of the site index.
//!
//! The document is treated as flat text: the region is located by its
//! marker and entries are recognized by shape, never parsed into a tree.
//! Every operation takes the document by reference and returns the new
//! text, leaving file handling to the caller.

mod entry;
mod region;

pub use entry::{display_name, escape_html, extract_entries, render_entry};
pub use region::find_region;

use crate::error::Result;
use entry::{ENTRY_INDENT, PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The file is already referenced, the document is untouched.
    AlreadyPresent,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted {
        /// Display names in their new order.
        order: Vec<String>,
        /// Lines kept after the sorted entries because they lack the entry shape.
        unrecognized: Vec<String>,
    },
    NothingToSort,
}

/// Appends a link for `file_name` as the last child of the links region.
pub fn insert_link(
    document: &str,
    file_name: &str,
    display_name: &str,
) -> Result<(String, InsertOutcome)> {
    if references_file(document, file_name) {
        return Ok((document.to_string(), InsertOutcome::AlreadyPresent));
    }

    let region = find_region(document)?;
    let inner = region.inner();
    let body = document[inner.clone()].trim_end();
    let tail = closing_whitespace(&document[inner.clone()]);

    let mut updated = String::with_capacity(document.len() + 256);
    updated.push_str(&document[..inner.start]);
    updated.push_str(body);
    push_line(&mut updated, &render_entry(file_name, display_name));
    updated.push_str(tail);
    updated.push_str(&document[inner.end..]);

    Ok((updated, InsertOutcome::Inserted))
}

/// Reorders the entries of the links region by display name.
///
/// The sort is stable and case-sensitive. Lines inside the region that are
/// not entries are kept, after the sorted entries, and reported back.
pub fn sort_links(document: &str) -> Result<(String, SortOutcome)> {
    let region = find_region(document)?;
    let inner = region.inner();
    let extraction = extract_entries(&document[inner.clone()]);

    if extraction.entries.is_empty() {
        return Ok((document.to_string(), SortOutcome::NothingToSort));
    }

    let mut keyed: Vec<(String, &str)> = extraction
        .entries
        .iter()
        .map(|entry| (display_name(entry), *entry))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut updated = String::with_capacity(document.len() + 64);
    updated.push_str(&document[..inner.start]);
    push_line(&mut updated, PLACEHOLDER);
    for (_, entry) in &keyed {
        push_line(&mut updated, entry);
    }
    for line in &extraction.unrecognized {
        updated.push('\n');
        updated.push_str(line);
    }
    updated.push_str(closing_whitespace(&document[inner.clone()]));
    updated.push_str(&document[inner.end..]);

    let outcome = SortOutcome::Sorted {
        order: keyed.into_iter().map(|(name, _)| name).collect(),
        unrecognized: extraction
            .unrecognized
            .iter()
            .map(|line| line.trim().to_string())
            .collect(),
    };
    Ok((updated, outcome))
}

fn references_file(document: &str, file_name: &str) -> bool {
    document.contains(&format!("/games/{}", file_name))
        || document.contains(&format!("/games/{}", escape_html(file_name)))
}

fn push_line(buf: &mut String, fragment: &str) {
    buf.push('\n');
    buf.push_str(ENTRY_INDENT);
    buf.push_str(fragment);
}

/// Whitespace in front of the closing tag, or a bare newline when the tag
/// would otherwise end up on the last entry's line.
fn closing_whitespace(inner: &str) -> &str {
    let tail = &inner[inner.trim_end().len()..];
    if tail.contains('\n') {
        tail
    } else {
        "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn page(region_inner: &str) -> String {
        format!(
            "<html>\n<body>\n<main>\n    <div class=\"games\">{}</div>\n</main>\n</body>\n</html>\n",
            region_inner
        )
    }

    fn entry_line(file: &str, name: &str) -> String {
        format!("{}{}", ENTRY_INDENT, render_entry(file, name))
    }

    #[test]
    fn inserts_into_empty_region() {
        let doc = r#"<div class="games"></div>"#;
        let (updated, outcome) = insert_link(doc, "chess.html", "Chess").unwrap();

        assert_eq!(outcome, InsertOutcome::Inserted);
        assert_eq!(
            updated,
            format!(
                "<div class=\"games\">\n{}\n</div>",
                entry_line("chess.html", "Chess")
            )
        );
    }

    #[test]
    fn insert_is_idempotent() {
        let doc = r#"<div class="games"></div>"#;
        let (once, _) = insert_link(doc, "chess.html", "Chess").unwrap();
        let (twice, outcome) = insert_link(&once, "chess.html", "Other Name").unwrap();

        assert_eq!(outcome, InsertOutcome::AlreadyPresent);
        assert!(!outcome.is_inserted());
        assert_eq!(twice, once);
    }

    #[test]
    fn insert_appends_after_existing_entries() {
        let existing = format!(
            "\n{}\n{}\n    ",
            entry_line("b.html", "B"),
            entry_line("a.html", "A")
        );
        let doc = page(&existing);

        let (updated, outcome) = insert_link(&doc, "c.html", "C").unwrap();
        assert!(outcome.is_inserted());

        let expected = page(&format!(
            "\n{}\n{}\n{}\n    ",
            entry_line("b.html", "B"),
            entry_line("a.html", "A"),
            entry_line("c.html", "C")
        ));
        assert_eq!(updated, expected);
    }

    #[test]
    fn insert_preserves_text_outside_region() {
        let doc = page("\n    ");
        let (updated, _) = insert_link(&doc, "c.html", "C").unwrap();

        let region = find_region(&doc).unwrap();
        let new_region = find_region(&updated).unwrap();
        assert_eq!(&updated[..new_region.open.end], &doc[..region.open.end]);
        assert_eq!(&updated[new_region.close.start..], &doc[region.close.start..]);
    }

    #[test]
    fn insert_only_touches_first_region() {
        let doc = "<div class=\"games\"></div>\n<aside><div class=\"games\"></div></aside>";
        let (updated, outcome) = insert_link(doc, "chess.html", "Chess").unwrap();

        assert!(outcome.is_inserted());
        assert_eq!(
            updated,
            format!(
                "<div class=\"games\">\n{}\n</div>\n<aside><div class=\"games\"></div></aside>",
                entry_line("chess.html", "Chess")
            )
        );
    }

    #[test]
    fn insert_without_region_fails() {
        let doc = "<html><body></body></html>";
        let err = insert_link(doc, "chess.html", "Chess").unwrap_err();
        assert!(matches!(err, GameError::Structural(_)));
    }

    #[test]
    fn sorts_by_display_name() {
        let doc = page(&format!(
            "\n{}\n{}\n    ",
            entry_line("zebra.html", "Zebra Game"),
            entry_line("apple.html", "Apple Game")
        ));

        let (sorted, outcome) = sort_links(&doc).unwrap();

        let apple = sorted.find("Apple Game").unwrap();
        let zebra = sorted.find("Zebra Game").unwrap();
        assert!(apple < zebra);
        assert_eq!(
            outcome,
            SortOutcome::Sorted {
                order: vec!["Apple Game".to_string(), "Zebra Game".to_string()],
                unrecognized: vec![],
            }
        );
        assert!(sorted.contains(PLACEHOLDER));
    }

    #[test]
    fn sort_is_case_sensitive_and_stable() {
        let doc = page(&format!(
            "\n{}\n{}\n{}\n{}\n",
            entry_line("b1.html", "b"),
            entry_line("dup1.html", "Same"),
            entry_line("a.html", "A"),
            entry_line("dup2.html", "Same")
        ));

        let (sorted, outcome) = sort_links(&doc).unwrap();

        let SortOutcome::Sorted { order, .. } = outcome else {
            panic!("expected entries to be sorted");
        };
        assert_eq!(order, vec!["A", "Same", "Same", "b"]);
        assert!(sorted.find("dup1.html").unwrap() < sorted.find("dup2.html").unwrap());
    }

    #[test]
    fn entries_without_alt_sort_first() {
        let bare = r#"<div class="X"><a href="/games/x.html"><img src="/icons/x.png"><p class="popup_text">Play X today!</p></a></div>"#;
        let doc = page(&format!(
            "\n{}\n{}{}\n",
            entry_line("a.html", "A"),
            ENTRY_INDENT,
            bare
        ));

        let (sorted, _) = sort_links(&doc).unwrap();
        assert!(sorted.find("x.html").unwrap() < sorted.find("a.html").unwrap());
    }

    #[test]
    fn sort_is_idempotent() {
        let doc = page(&format!(
            "\n        {}\n{}\n{}\n        <p>featured</p>\n{}\n    ",
            PLACEHOLDER,
            entry_line("m.html", "Mango"),
            entry_line("c.html", "Cherry"),
            entry_line("k.html", "Kiwi")
        ));

        let (once, _) = sort_links(&doc).unwrap();
        let (twice, _) = sort_links(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_keeps_unrecognized_fragments() {
        let doc = page(&format!(
            "\n{}\n        <p>featured</p>\n{}\n",
            entry_line("b.html", "B"),
            entry_line("a.html", "A")
        ));

        let (sorted, outcome) = sort_links(&doc).unwrap();

        assert!(sorted.contains("        <p>featured</p>"));
        let SortOutcome::Sorted { unrecognized, .. } = outcome else {
            panic!("expected entries to be sorted");
        };
        assert_eq!(unrecognized, vec!["<p>featured</p>"]);
    }

    #[test]
    fn sort_preserves_text_outside_region() {
        let doc = page(&format!(
            "\n{}\n{}\n    ",
            entry_line("b.html", "B"),
            entry_line("a.html", "A")
        ));

        let (sorted, _) = sort_links(&doc).unwrap();
        assert!(sorted.starts_with("<html>\n<body>\n<main>\n    <div class=\"games\">\n"));
        assert!(sorted.ends_with("\n    </div>\n</main>\n</body>\n</html>\n"));
    }

    #[test]
    fn sort_with_no_entries_is_a_no_op() {
        let doc = page("\n        <!-- Game links will be added here -->\n    ");
        let (unchanged, outcome) = sort_links(&doc).unwrap();

        assert_eq!(outcome, SortOutcome::NothingToSort);
        assert_eq!(unchanged, doc);
    }

    #[test]
    fn sort_without_region_fails() {
        let err = sort_links("<main></main>").unwrap_err();
        assert!(matches!(err, GameError::Structural(_)));
    }

    #[test]
    fn inserted_entries_can_be_sorted() {
        let doc = page("\n    ");
        let (doc, _) = insert_link(&doc, "zork.html", "Zork").unwrap();
        let (doc, _) = insert_link(&doc, "asteroids.html", "Asteroids").unwrap();

        let (sorted, outcome) = sort_links(&doc).unwrap();
        let SortOutcome::Sorted { order, unrecognized } = outcome else {
            panic!("expected entries to be sorted");
        };
        assert_eq!(order, vec!["Asteroids", "Zork"]);
        assert!(unrecognized.is_empty());
        assert!(sorted.find("asteroids.html").unwrap() < sorted.find("zork.html").unwrap());
    }
}
