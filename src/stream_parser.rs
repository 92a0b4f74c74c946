//! Slide records out of generated text, either all at once or as tokens arrive.
//!
//! A record is `**Slide <n>: <title>**`, optional whitespace, then a fenced block whose
//! body is the prompt. The `Slide` keyword is matched case-insensitively and the fence
//! opener may carry a language tag.

use std::collections::HashSet;
use std::ops::Range;

use tracing::debug;

use crate::models::ParsedSlide;

const MARKER: &str = "**Slide";
const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SlideMatch {
    slide_number: u32,
    title: String,
    body: String,
    end: usize,
}

impl SlideMatch {
    fn into_slide(self) -> ParsedSlide {
        let title = if self.title.is_empty() { format!("Slide {}", self.slide_number) } else { self.title };
        ParsedSlide { slide_number: self.slide_number, title, prompt: self.body }
    }
}

fn skip_whitespace(text: &str, at: usize) -> usize {
    text[at..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| at + i)
        .unwrap_or(text.len())
}

/// Next `**slide` (any case) at or after `from`, returning the index of the leading `*`.
fn find_marker(text: &str, from: usize) -> Option<usize> {
    let mut at = from;
    while let Some(rel) = text.get(at..)?.find("**") {
        let star = at + rel;
        if text.get(star + 2..star + 7).is_some_and(|w| w.eq_ignore_ascii_case("slide")) {
            return Some(star);
        }
        at = star + 1;
    }
    None
}

/// Parses `**Slide <n>: <title>**` at `start`. Returns number, raw title range and the
/// index just past the closing `**`.
fn header_at(text: &str, start: usize) -> Option<(u32, Range<usize>, usize)> {
    let after_word = start + MARKER.len();
    let digits_start = skip_whitespace(text, after_word);
    if digits_start == after_word {
        return None;
    }
    let digits_len = text[digits_start..].bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits_end = digits_start + digits_len;
    let slide_number: u32 = text[digits_start..digits_end].parse().ok()?;
    if !text[digits_end..].starts_with(':') {
        return None;
    }
    let title_start = digits_end + 1;
    let star = title_start + text[title_start..].find('*')?;
    if star == title_start || !text[star..].starts_with("**") {
        return None;
    }
    Some((slide_number, title_start..star, star + 2))
}

/// Body range of a fence opening exactly at `open`, and the index past its closer.
pub(crate) fn fenced_body(text: &str, open: usize) -> Option<(Range<usize>, usize)> {
    if !text[open..].starts_with(FENCE) {
        return None;
    }
    let after_fence = open + FENCE.len();
    let tag_len = text[after_fence..]
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    let body_start = if text[after_fence + tag_len..].starts_with('\n') {
        after_fence + tag_len + 1
    } else {
        after_fence
    };
    let close = body_start + text[body_start..].find(FENCE)?;
    Some((body_start..close, close + FENCE.len()))
}

fn slide_at(text: &str, start: usize) -> Option<SlideMatch> {
    let (slide_number, title, header_end) = header_at(text, start)?;
    let open = skip_whitespace(text, header_end);
    let (body, end) = fenced_body(text, open)?;
    Some(SlideMatch {
        slide_number,
        title: text[title].trim().to_string(),
        body: text[body].trim().to_string(),
        end,
    })
}

/// Every non-overlapping fenced slide record, in order of appearance, plus the index
/// just past the last one (0 when there is none).
fn scan_fenced(text: &str) -> (Vec<SlideMatch>, usize) {
    let mut found = Vec::new();
    let mut consumed = 0;
    let mut at = 0;
    while let Some(start) = find_marker(text, at) {
        match slide_at(text, start) {
            Some(m) => {
                at = m.end;
                consumed = m.end;
                found.push(m);
            }
            None => at = start + 1,
        }
    }
    (found, consumed)
}

/// Records written without fences: header, newline, then text up to the next header,
/// a blank line before bold text, or the end.
fn scan_unfenced(text: &str) -> Vec<SlideMatch> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(start) = find_marker(text, at) {
        let Some((slide_number, title, header_end)) = header_at(text, start) else {
            at = start + 1;
            continue;
        };
        let body_start = skip_whitespace(text, header_end);
        if !text[header_end..body_start].contains('\n') {
            at = start + 1;
            continue;
        }
        let next_header = find_marker(text, body_start).unwrap_or(text.len());
        let next_break = text[body_start..].find("\n\n**").map(|i| body_start + i).unwrap_or(text.len());
        let end = next_header.min(next_break);

        let raw = text[body_start..end].trim();
        let raw = match raw.strip_prefix(FENCE) {
            Some(rest) => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_'),
            None => raw,
        };
        let body = raw.strip_suffix(FENCE).unwrap_or(raw).trim();

        found.push(SlideMatch {
            slide_number,
            title: text[title].trim().to_string(),
            body: body.to_string(),
            end,
        });
        at = end.max(start + 1);
    }
    found
}

/// Parses a complete response. Falls back to fence-less records when no fenced record is
/// present. Sorted by slide number, first occurrence of a number wins.
pub fn parse_slides(full: &str) -> Vec<ParsedSlide> {
    let (mut found, _) = scan_fenced(full);
    found.retain(|m| !m.body.is_empty());
    if found.is_empty() {
        found = scan_unfenced(full);
        found.retain(|m| !m.body.is_empty());
        if !found.is_empty() {
            debug!(count = found.len(), "Parsed slides without fenced blocks");
        }
    }

    let mut seen = HashSet::new();
    let mut slides: Vec<ParsedSlide> = found
        .into_iter()
        .filter(|m| seen.insert(m.slide_number))
        .map(SlideMatch::into_slide)
        .collect();
    slides.sort_by_key(|s| s.slide_number);
    slides
}

/// Incremental parser for one generation's token stream.
///
/// Each slide number is emitted at most once, in order of appearance. Only the
/// unconsumed tail of the text is buffered.
#[derive(Debug, Default)]
pub struct SlideStreamParser {
    buffer: String,
    emitted: HashSet<u32>,
}

impl SlideStreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns the slides it completed.
    pub fn push(&mut self, chunk: &str) -> Vec<ParsedSlide> {
        self.buffer.push_str(chunk);
        let (fresh, consumed) = self.take_new();

        let keep_from = self.buffer.rfind(MARKER).map_or(consumed, |marker| marker.max(consumed));
        self.buffer.drain(..keep_from);
        fresh
    }

    /// Final scan once the stream has ended. Unterminated records stay unemitted.
    pub fn finish(&mut self) -> Vec<ParsedSlide> {
        let (fresh, _) = self.take_new();
        self.buffer.clear();
        fresh
    }

    pub fn emitted_count(&self) -> usize {
        self.emitted.len()
    }

    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    fn take_new(&mut self) -> (Vec<ParsedSlide>, usize) {
        let (found, consumed) = scan_fenced(&self.buffer);
        let fresh = found
            .into_iter()
            .filter(|m| !m.body.is_empty())
            .filter(|m| self.emitted.insert(m.slide_number))
            .map(SlideMatch::into_slide)
            .collect();
        (fresh, consumed)
    }
}
