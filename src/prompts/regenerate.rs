use crate::models::{Labelled, ParsedSlide, PresentationSettings, SlideContext, SlideStyle};
use crate::stream_parser::fenced_body;

use super::tables::{
    aspect_ratio_description, layout_description, palette_description, render_style_description,
    style_description,
};

pub const REGENERATE_SYSTEM_PROMPT: &str = "You are an expert presentation designer.
Your task is to regenerate a single slide that fits seamlessly with the surrounding content.
Focus on creating visually compelling and contextually appropriate content.
Always output in the exact format specified.";

/// Characters of a neighbour's prompt quoted as a visual hint.
const NEIGHBOUR_EXCERPT_CHARS: usize = 160;

#[derive(Debug, Clone, Copy)]
pub struct RegenerateContext<'a> {
    pub slide_number: u32,
    pub previous_slide: Option<&'a SlideContext>,
    pub next_slide: Option<&'a SlideContext>,
    pub style: SlideStyle,
    pub settings: &'a PresentationSettings,
    pub instructions: Option<&'a str>,
}

fn excerpt(prompt: &str) -> String {
    let flat = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= NEIGHBOUR_EXCERPT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(NEIGHBOUR_EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

pub fn build_regenerate_prompt(ctx: &RegenerateContext<'_>) -> String {
    let n = ctx.slide_number;
    let settings = ctx.settings;

    let mut context = String::new();
    if let Some(prev) = ctx.previous_slide {
        context.push_str(&format!("Previous slide ({}): \"{}\"\n", n.saturating_sub(1), prev.title));
        if !prev.prompt.trim().is_empty() {
            context.push_str(&format!("  Visual: {}\n", excerpt(&prev.prompt)));
        }
    }
    if let Some(next) = ctx.next_slide {
        context.push_str(&format!("Next slide ({}): \"{}\"\n", n + 1, next.title));
        if !next.prompt.trim().is_empty() {
            context.push_str(&format!("  Visual: {}\n", excerpt(&next.prompt)));
        }
    }
    let context_section = if context.is_empty() {
        String::new()
    } else {
        format!("\n## Surrounding Context\n{context}")
    };

    let character_line = match settings.character.filter(|c| c.enabled) {
        Some(c) => format!(
            "- Presenter: {} character, same design as the rest of the deck. {}\n",
            c.render_style.label(),
            render_style_description(c.render_style).lines().next().unwrap_or_default()
        ),
        None => String::new(),
    };

    let instructions_section = match ctx.instructions.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => format!("\n## Special Instructions\n{text}\n"),
        None => String::new(),
    };

    format!(
        r#"You are regenerating slide {n} of a presentation.
{context_section}
## Style Guidelines
- Visual Style: {style_label}: {style_desc}
- Aspect Ratio: {aspect}
- Color Palette: {palette}
- Layout: {layout}
{character_line}{instructions_section}
## Requirements
1. Maintain consistency with surrounding slides (if any)
2. Follow the {style_label} visual style precisely
3. Optimize layout for {ratio} format
4. Create detailed, descriptive content for AI image generation

## Output Format
**Slide {n}: [Compelling Title]**
```
[Detailed visual description for AI image generation including:
- Visual composition and layout
- Color scheme and lighting
- Key elements and their placement
- Typography and text elements
- Mood and atmosphere]
```"#,
        style_label = ctx.style.label(),
        style_desc = style_description(ctx.style),
        aspect = aspect_ratio_description(settings.aspect_ratio),
        palette = palette_description(settings.color_palette),
        layout = layout_description(settings.layout_structure),
        ratio = settings.aspect_ratio,
    )
}

/// Title text of the first `**Slide <n>: <title>**` on a single line.
fn first_title(response: &str) -> Option<&str> {
    let mut at = 0;
    while let Some(rel) = response[at..].find("**Slide ") {
        let start = at + rel;
        at = start + 1;
        let rest = &response[start + "**Slide ".len()..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || !rest[digits..].starts_with(':') {
            continue;
        }
        let title = rest[digits + 1..].trim_start();
        let line = title.split('\n').next().unwrap_or_default();
        if let Some(close) = line.find("**") {
            let t = line[..close].trim();
            if !t.is_empty() {
                return Some(t);
            }
        }
    }
    None
}

fn first_fenced(response: &str) -> Option<&str> {
    let open = response.find("```")?;
    let (body, _) = fenced_body(response, open)?;
    Some(response[body].trim()).filter(|b| !b.is_empty())
}

/// Always yields a record: missing title becomes `Slide N`, missing fence the whole reply.
pub fn parse_regenerated_slide(response: &str, slide_number: u32) -> ParsedSlide {
    ParsedSlide {
        slide_number,
        title: first_title(response)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Slide {slide_number}")),
        prompt: first_fenced(response)
            .map(str::to_string)
            .unwrap_or_else(|| response.trim().to_string()),
    }
}
