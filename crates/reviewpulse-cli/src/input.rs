//! Input file parsing
//!
//! Accepts a JSON array, or an object with a `reviews` array. Entries are
//! either plain strings or tagged objects (`content`, `origin`, `source`).

use anyhow::Context;
use reviewpulse_core::RawText;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
#[serde(untagged)]
enum InputEntry {
    Plain(String),
    Tagged(RawText),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    List(Vec<InputEntry>),
    Wrapped { reviews: Vec<InputEntry> },
}

impl From<InputEntry> for RawText {
    fn from(entry: InputEntry) -> Self {
        match entry {
            InputEntry::Plain(content) => RawText::new(content),
            InputEntry::Tagged(text) => text,
        }
    }
}

/// Parse texts from a JSON document
pub fn parse_texts(json: &str) -> anyhow::Result<Vec<RawText>> {
    let document: InputDocument =
        serde_json::from_str(json).context("Input must be a JSON array of texts")?;

    let entries = match document {
        InputDocument::List(entries) => entries,
        InputDocument::Wrapped { reviews } => reviews,
    };

    Ok(entries.into_iter().map(RawText::from).collect())
}

/// Read texts from `path`, or from stdin when `path` is "-"
pub fn read_texts(path: &str) -> anyhow::Result<Vec<RawText>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
    };

    let texts = parse_texts(&content)?;
    tracing::info!("Read {} texts", texts.len());
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewpulse_core::TextOrigin;

    #[test]
    fn test_plain_list() {
        let texts = parse_texts(r#"["Great lecturer overall.", "Exams were brutal."]"#).unwrap();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].content, "Great lecturer overall.");
        assert_eq!(texts[0].origin, None);
    }

    #[test]
    fn test_wrapped_and_tagged() {
        let json = r#"{
            "reviews": [
                "Plain entry text here.",
                {"content": "Tagged comment text.", "origin": "comment", "source": "t1_abc"}
            ]
        }"#;

        let texts = parse_texts(json).unwrap();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1].origin, Some(TextOrigin::Comment));
        assert_eq!(texts[1].source.as_deref(), Some("t1_abc"));
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_texts(r#"{"posts": []}"#).is_err());
        assert!(parse_texts("not json").is_err());
    }

    #[test]
    fn test_read_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"["One fine review text."]"#).unwrap();

        let texts = read_texts(file.path().to_str().unwrap()).unwrap();
        assert_eq!(texts.len(), 1);
    }
}
