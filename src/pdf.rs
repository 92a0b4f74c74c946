use crate::deck::Deck;
use printpdf::*;
use std::io::BufWriter;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_MM: f32 = 5.0;
const BODY_PT: f32 = 10.0;
/// Roughly what fits between the margins at `BODY_PT` in Helvetica.
const WRAP_CHARS: usize = 92;

/// Text-only storyboard: a cover page, then one page per slide with the prompt word-wrapped.
/// Long prompts continue on extra pages.
pub fn generate_pdf(deck: &Deck) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, cover, layer) = PdfDocument::new(truncate(&deck.title, 64), Mm(PAGE_W), Mm(PAGE_H), "Cover");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let summary = doc.get_page(cover).get_layer(layer);
    summary.use_text(truncate(&deck.title, 60), 22.0, Mm(MARGIN), Mm(275.0), &bold);
    summary.use_text(
        format!("{} slides | style: {} | aspect ratio: {}", deck.slides.len(), deck.style, deck.aspect_ratio),
        11.0,
        Mm(MARGIN),
        Mm(262.0),
        &font,
    );
    summary.use_text(format!("Created {}", deck.created_at.format("%Y-%m-%d %H:%M UTC")), 9.0, Mm(MARGIN), Mm(254.0), &font);
    summary.use_text("(Images are not embedded in this export)", 8.0, Mm(MARGIN), Mm(244.0), &font);

    for slide in &deck.slides {
        let heading = format!("Slide {}: {}", slide.slide_number, slide.title);
        let (page, layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), &heading);
        let mut current = doc.get_page(page).get_layer(layer);
        current.use_text(truncate(&heading, 70), 16.0, Mm(MARGIN), Mm(275.0), &bold);

        let mut y = 262.0;
        for line in wrap_text(&slide.prompt, WRAP_CHARS) {
            if y < MARGIN {
                let (page, layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), format!("{heading} (cont.)"));
                current = doc.get_page(page).get_layer(layer);
                y = 280.0;
            }
            current.use_text(line, BODY_PT, Mm(MARGIN), Mm(y), &font);
            y -= LINE_MM;
        }
    }

    let mut buf: Vec<u8> = Vec::new();
    {
        let mut writer = BufWriter::new(&mut buf);
        doc.save(&mut writer)?;
    }
    Ok(buf)
}

/// Greedy word wrap that keeps the source line breaks. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for source in text.lines() {
        let mut line = String::new();
        for word in source.split_whitespace() {
            let mut word = word.to_string();
            while word.chars().count() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let head: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                lines.push(head);
            }
            let needed = if line.is_empty() { word.chars().count() } else { line.chars().count() + 1 + word.chars().count() };
            if needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }
    lines
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, ParsedSlide, SlideStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn keeps_line_breaks_and_splits_long_words() {
        let lines = wrap_text("abcdefghij\n\nok", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "", "ok"]);
    }

    #[test]
    fn renders_a_pdf() {
        let slides = vec![
            ParsedSlide { slide_number: 1, title: "Intro".into(), prompt: "word ".repeat(2000) },
            ParsedSlide { slide_number: 2, title: "End".into(), prompt: "Thanks".into() },
        ];
        let deck = Deck::new(SlideStyle::Technical, AspectRatio::Widescreen, slides);
        let bytes = generate_pdf(&deck).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
