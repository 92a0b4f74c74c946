use std::str::FromStr;

use serde::Serialize;

use crate::deck::Deck;
use crate::error::AppError;
use crate::pdf::generate_pdf;

const MAX_FILENAME_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Text,
    Json,
    Pdf,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(AppError::Validation(format!("unknown export format '{other}'"))),
        }
    }
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }

    fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// File-name stem from a deck title: letters, digits, CJK, spaces and dashes survive,
/// whitespace runs become `_`.
pub fn sanitize_filename(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fff}').contains(c) || c.is_whitespace() || *c == '-')
        .collect();
    let joined = kept.split_whitespace().collect::<Vec<_>>().join("_");
    let stem: String = joined.chars().take(MAX_FILENAME_CHARS).collect();
    if stem.is_empty() {
        "deck".to_string()
    } else {
        stem
    }
}

pub fn to_markdown(deck: &Deck) -> String {
    let body = deck
        .slides
        .iter()
        .map(|s| format!("## Slide {}: {}\n\n{}", s.slide_number, s.title, s.prompt))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");
    format!("# {}\n\n{body}", deck.title)
}

pub fn to_text(deck: &Deck) -> String {
    let body = deck
        .slides
        .iter()
        .map(|s| format!("Slide {}: {}\n{}", s.slide_number, s.title, s.prompt))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");
    format!("{}\n{}\n\n{body}", deck.title, "=".repeat(deck.title.chars().count()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSlide<'a> {
    id: uuid::Uuid,
    slide_number: u32,
    title: &'a str,
    prompt: &'a str,
    image_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    title: &'a str,
    created_at: String,
    updated_at: String,
    style: crate::models::SlideStyle,
    aspect_ratio: crate::models::AspectRatio,
    slides: Vec<JsonSlide<'a>>,
}

pub fn to_json(deck: &Deck) -> Result<String, serde_json::Error> {
    let export = JsonExport {
        title: &deck.title,
        created_at: deck.created_at.to_rfc3339(),
        updated_at: deck.updated_at.to_rfc3339(),
        style: deck.style,
        aspect_ratio: deck.aspect_ratio,
        slides: deck
            .slides
            .iter()
            .map(|s| JsonSlide {
                id: s.id,
                slide_number: s.slide_number,
                title: &s.title,
                prompt: &s.prompt,
                image_count: s.images.len(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&export)
}

pub fn export_deck(deck: &Deck, format: ExportFormat) -> Result<ExportFile, AppError> {
    if deck.slides.is_empty() && format != ExportFormat::Json {
        return Err(AppError::Validation("deck has no slides to export".into()));
    }
    let body = match format {
        ExportFormat::Markdown => to_markdown(deck).into_bytes(),
        ExportFormat::Text => to_text(deck).into_bytes(),
        ExportFormat::Json => to_json(deck).map_err(|e| AppError::Export(e.to_string()))?.into_bytes(),
        ExportFormat::Pdf => generate_pdf(deck).map_err(|e| AppError::Export(e.to_string()))?,
    };
    Ok(ExportFile {
        filename: format!("{}.{}", sanitize_filename(&deck.title), format.extension()),
        content_type: format.content_type(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, ParsedSlide, SlideStyle};
    use pretty_assertions::assert_eq;

    fn deck() -> Deck {
        let mut deck = Deck::new(
            SlideStyle::Educational,
            AspectRatio::Widescreen,
            vec![
                ParsedSlide { slide_number: 1, title: "Photosynthesis".into(), prompt: "Sunlight on leaves".into() },
                ParsedSlide { slide_number: 2, title: "Summary".into(), prompt: "Recap".into() },
            ],
        );
        deck.title = "Intro: Photosynthesis!".into();
        deck
    }

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(sanitize_filename("Intro: Photosynthesis!"), "Intro_Photosynthesis");
        assert_eq!(sanitize_filename("  multi   space - deck "), "multi_space_-_deck");
        assert_eq!(sanitize_filename("光合作用 basics"), "光合作用_basics");
        assert_eq!(sanitize_filename("???"), "deck");
        assert_eq!(sanitize_filename(&"a".repeat(80)).len(), 50);
    }

    #[test]
    fn markdown_layout() {
        assert_eq!(
            to_markdown(&deck()),
            "# Intro: Photosynthesis!\n\n## Slide 1: Photosynthesis\n\nSunlight on leaves\n\n---\n\n## Slide 2: Summary\n\nRecap"
        );
    }

    #[test]
    fn text_layout_underlines_title() {
        let text = to_text(&deck());
        assert!(text.starts_with("Intro: Photosynthesis!\n======================\n\nSlide 1: Photosynthesis\nSunlight on leaves"));
        assert!(text.contains("\n\n---\n\nSlide 2: Summary\nRecap"));
    }

    #[test]
    fn json_export_lists_slides() {
        let value: serde_json::Value = serde_json::from_str(&to_json(&deck()).unwrap()).unwrap();
        assert_eq!(value["style"], "educational");
        assert_eq!(value["aspectRatio"], "16:9");
        assert_eq!(value["slides"][1]["slideNumber"], 2);
        assert_eq!(value["slides"][0]["imageCount"], 0);
    }

    #[test]
    fn formats_parse_and_name_files() {
        assert_eq!("MD".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!("docx".parse::<ExportFormat>().is_err());
        let file = export_deck(&deck(), ExportFormat::Text).unwrap();
        assert_eq!(file.filename, "Intro_Photosynthesis.txt");
        assert_eq!(file.content_type, "text/plain; charset=utf-8");
    }

    #[test]
    fn empty_deck_only_exports_json() {
        let empty = Deck::new(SlideStyle::Minimalist, AspectRatio::Square, vec![]);
        assert!(export_deck(&empty, ExportFormat::Markdown).is_err());
        assert!(export_deck(&empty, ExportFormat::Json).is_ok());
    }
}
