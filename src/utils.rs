use crate::error::{GameError, Result};
use std::io::{BufRead, Write};
use unicode_normalization::UnicodeNormalization;

/// Turns a display name into a page file name stem: ASCII lowercase words
/// joined by `-`. Accents are folded away first.
pub fn slugify(name: &str) -> String {
    let folded: String = name.nfkd().filter(char::is_ascii).collect();

    folded
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// File name for a game page, e.g. `Space Invaders` -> `space-invaders.html`.
pub fn page_file_name(display_name: &str) -> Result<String> {
    let slug = slugify(display_name);
    if slug.is_empty() {
        return Err(GameError::InvalidInput(format!(
            "cannot derive a file name from {:?}",
            display_name
        )));
    }
    Ok(format!("{}.html", slug))
}

/// Appends `.html` unless the name already ends with it.
pub fn with_html_extension(name: &str) -> String {
    if name.ends_with(".html") {
        name.to_string()
    } else {
        format!("{}.html", name)
    }
}

/// Prints `question` and reads one trimmed, non-empty answer.
pub fn prompt(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        return Err(GameError::InvalidInput(format!(
            "no answer given to {:?}",
            question.trim()
        )));
    }
    Ok(answer.to_string())
}

/// Uses `given` when present, otherwise asks on stdin.
pub fn value_or_prompt(given: Option<String>, question: &str) -> Result<String> {
    match given.map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => prompt(
            question,
            &mut std::io::stdin().lock(),
            &mut std::io::stdout(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn slugify_names() {
        assert_eq!(slugify("Chess"), "chess");
        assert_eq!(slugify("Space Invaders"), "space-invaders");
        assert_eq!(slugify("  Pokémon: Red & Blue!  "), "pokemon-red-blue");
        assert_eq!(slugify("Doom (1993)"), "doom-1993");
    }

    #[test]
    fn page_file_name_requires_usable_characters() {
        assert_eq!(page_file_name("Chess").unwrap(), "chess.html");
        assert!(matches!(
            page_file_name("???"),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn html_extension_added_once() {
        assert_eq!(with_html_extension("snake"), "snake.html");
        assert_eq!(with_html_extension("snake.html"), "snake.html");
    }

    #[test]
    fn prompt_reads_trimmed_answer() {
        let mut input = Cursor::new("  Tetris \n");
        let mut output = Vec::new();

        let answer = prompt("Game name: ", &mut input, &mut output).unwrap();

        assert_eq!(answer, "Tetris");
        assert_eq!(String::from_utf8(output).unwrap(), "Game name: ");
    }

    #[test]
    fn prompt_rejects_empty_answer() {
        let mut input = Cursor::new("\n");
        let err = prompt("Game name: ", &mut input, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn given_value_skips_prompt() {
        let value = value_or_prompt(Some(" Snake ".to_string()), "unused").unwrap();
        assert_eq!(value, "Snake");
    }
}
