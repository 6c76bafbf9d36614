//! Interactive search prompt over the frozen index.

use std::io::{self, BufRead, Write};

use crate::index::Index;

const MAX_MATCHES_SHOWN: usize = 15;
const DISPLAY_WIDTH: usize = 60;

/// Prompt-read-answer loop. An empty line (or end of input) exits.
pub fn run(index: &Index) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&mut stdin.lock(), &mut stdout.lock(), index)
}

fn repl<R: BufRead, W: Write>(input: &mut R, out: &mut W, index: &Index) -> io::Result<()> {
    loop {
        write!(out, "Enter a search term [or just hit <enter> to quit]: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let term = line.trim();
        if term.is_empty() {
            break;
        }

        let matches = index.matching_articles(term);
        if matches.is_empty() {
            writeln!(out, "Ah, we didn't find the term \"{term}\". Try again.")?;
            continue;
        }

        let noun = if matches.len() == 1 { "article" } else { "articles" };
        write!(out, "That term appears in {} {}.  ", matches.len(), noun)?;
        if matches.len() > MAX_MATCHES_SHOWN {
            writeln!(out, "Here are the top {MAX_MATCHES_SHOWN} of them:")?;
        } else if matches.len() > 1 {
            writeln!(out, "Here they are:")?;
        } else {
            writeln!(out, "Here it is:")?;
        }

        for (rank, (article, count)) in matches.iter().take(MAX_MATCHES_SHOWN).enumerate() {
            let times = if *count == 1 { "time" } else { "times" };
            writeln!(
                out,
                "  {:2}.) \"{}\" [appears {} {}].",
                rank + 1,
                truncate(&article.title),
                count,
                times
            )?;
            writeln!(out, "       \"{}\"", truncate(&article.url))?;
        }
    }
    Ok(())
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= DISPLAY_WIDTH {
        return text.to_string();
    }
    let head: String = text.chars().take(DISPLAY_WIDTH - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn run_session(index: &Index, input: &str) -> String {
        let mut out = Vec::new();
        repl(&mut input.as_bytes(), &mut out, index).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_index() -> Index {
        Index::build(vec![
            (
                Article::new("Orchard report", "http://h/orchard"),
                vec!["apple".to_string(), "apple".to_string()],
            ),
            (
                Article::new("Market brief", "http://h/market"),
                vec!["apple".to_string()],
            ),
        ])
    }

    #[test]
    fn test_empty_line_exits() {
        let output = run_session(&sample_index(), "\n");
        assert_eq!(output.matches("Enter a search term").count(), 1);
    }

    #[test]
    fn test_miss_reports_and_continues() {
        let output = run_session(&sample_index(), "zebra\n\n");
        assert!(output.contains("we didn't find the term \"zebra\""));
        assert_eq!(output.matches("Enter a search term").count(), 2);
    }

    #[test]
    fn test_hits_are_numbered_and_counted() {
        let output = run_session(&sample_index(), "apple\n\n");
        assert!(output.contains("That term appears in 2 articles."));
        assert!(output.contains("1.) \"Orchard report\" [appears 2 times]."));
        assert!(output.contains("2.) \"Market brief\" [appears 1 time]."));
        assert!(output.contains("\"http://h/orchard\""));
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(100);
        let shown = truncate(&long);
        assert_eq!(shown.chars().count(), DISPLAY_WIDTH);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short"), "short");
    }
}
