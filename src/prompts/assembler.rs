//! Builds the single instruction string sent to the text model for a whole deck.
//!
//! Everything here is a pure function of [`PromptConfig`]. Absent optional inputs drop
//! their section instead of failing.

use crate::models::{
    display_label, AspectRatio, CharacterSettings, ColorPalette, GeneratedCharacter, Labelled, LayoutStructure,
    OutputLanguage, PresentationSettings, SlideStyle,
};

use super::library::get_template;
use super::tables::{
    aspect_ratio_description, character_style_adaptation, gender_modifier, layout_description,
    palette_description, render_style_description, style_description, style_persona,
};

pub const SLIDE_SYSTEM_PROMPT: &str = include_str!("slide_system.md");

pub const CHARACTER_PRESENTER_INSTRUCTIONS: &str = r#"## CHARACTER PRESENTER GUIDELINES

You are including a consistent presenter character throughout ALL slides. This character MUST:

### Visual Consistency (CRITICAL)
- SAME character appearance (face, build, hair) across ALL slides in the deck
- This is the SAME PERSON in different poses and positions, NOT different people
- Keep the identity recognizable even when the style changes the rendering approach

### Dynamic Positioning
- Position the character PROMINENTLY on each slide, never hidden or secondary
- Vary position per slide based on the content layout
- The character INTERACTS with content: pointing at data, gesturing toward text, presenting diagrams

### Expression & Pose Matching
- Match expression to slide tone: excited for achievements, thoughtful for complex topics, confident for conclusions
- Vary poses between slides
- Props follow the content: clipboard for data, lightbulb for ideas, tools for technical content

### Style Adaptation
- The character adopts the visual language of the selected style
- In pixel-art the character is pixelated, in watercolor it has painted texture, in sci-fi-hud it appears holographic
- Always inherit the style's color palette and visual treatment"#;

const TITLE_SKELETON: &str = "DRAMATIC headline with atmospheric visual, particle effects, layered depth. Full-bleed thematic hero with premium treatment.";

/// Interior archetypes for decks without a slide-type sequence, cycled in order.
const FALLBACK_ARCHETYPES: [(&str, &str); 8] = [
    ("Concept/Explanation", "Large CINEMATIC hero diagram with 5+ callout boxes with connecting lines, measurement annotations, floating stat cards, atmospheric particles, layered background depth."),
    ("Data/Insight", "DRAMATIC chart as hero with glowing data points, 3+ floating metric cards with trend indicators, translucent info panels, professional data overlays."),
    ("Process/Timeline", "VISUAL STORYTELLING with 4-6 connected phase boxes, dramatic main illustration with motion effects, energy trails, supporting info panels with specs."),
    ("Comparison", "PREMIUM side-by-side with visual differentiation, floating comparison metrics, gradient backgrounds, icon systems, callout annotations."),
    ("Technical/Architecture", "HOLOGRAPHIC-STYLE schematic with wireframe overlays, glowing connection nodes, HUD-style brackets, floating spec cards, measurement systems."),
    ("Concept/Explanation", "DOCUMENTARY-QUALITY hero with anatomical-style callouts, specimen presentation, scientific annotations, layered depth, atmospheric particles."),
    ("Data/Insight", "CINEMATIC data presentation with dramatic chart, glowing highlight points, floating metrics, trend callouts, premium visual treatment."),
    ("Process/Timeline", "DYNAMIC flow visualization with energy effects, phase indicators, dramatic illustrations, motion blur elements, supporting data panels."),
];

#[derive(Debug, Clone)]
pub struct PromptConfig<'a> {
    pub content: &'a str,
    pub style: SlideStyle,
    pub color_palette: ColorPalette,
    pub layout_structure: LayoutStructure,
    pub aspect_ratio: AspectRatio,
    pub slide_count: usize,
    pub character: Option<CharacterSettings>,
    pub generated_character: Option<&'a GeneratedCharacter>,
    pub slide_type_sequence: Option<&'a [String]>,
    pub output_language: Option<OutputLanguage>,
}

impl<'a> PromptConfig<'a> {
    pub fn new(content: &'a str, style: SlideStyle, settings: &PresentationSettings) -> Self {
        Self {
            content,
            style,
            color_palette: settings.color_palette,
            layout_structure: settings.layout_structure,
            aspect_ratio: settings.aspect_ratio,
            slide_count: settings.slide_count,
            character: settings.character,
            generated_character: None,
            slide_type_sequence: None,
            output_language: settings.output_language,
        }
    }

    pub fn with_character(mut self, character: Option<&'a GeneratedCharacter>) -> Self {
        self.generated_character = character;
        self
    }

    pub fn with_sequence(mut self, sequence: Option<&'a [String]>) -> Self {
        self.slide_type_sequence = sequence;
        self
    }

    fn active_character(&self) -> Option<CharacterSettings> {
        self.character.filter(|c| c.enabled)
    }

    /// The generated persona, only when a character is enabled and the persona has content.
    fn usable_persona(&self) -> Option<&'a GeneratedCharacter> {
        self.active_character()?;
        self.generated_character.filter(|c| c.is_usable())
    }
}

fn or_default<'s>(value: &'s str, fallback: &'s str) -> &'s str {
    if value.is_empty() { fallback } else { value }
}

/// Persona values as they are written into the prompt, with a fallback for every blank field.
struct PersonaText<'p> {
    name: &'p str,
    description: &'p str,
    features: &'p str,
    build: &'p str,
    face: &'p str,
    outfit: &'p str,
    accessories: &'p str,
}

impl<'p> PersonaText<'p> {
    fn new(persona: &'p GeneratedCharacter) -> Self {
        let name = or_default(or_default(&persona.species_or_form, &persona.character_type), "presenter");
        Self {
            name,
            description: or_default(&persona.core_description, name),
            features: or_default(&persona.physical_details.distinctive_features, "distinctive features"),
            build: or_default(&persona.physical_details.build_proportions, "professional build"),
            face: or_default(&persona.physical_details.face_expression, "expressive face"),
            outfit: or_default(&persona.wardrobe_and_props.default_outfit, "professional attire"),
            accessories: or_default(&persona.wardrobe_and_props.props_accessories, "minimal accessories"),
        }
    }
}

fn persona_block(settings: CharacterSettings, persona: &GeneratedCharacter, style: SlideStyle) -> String {
    let render_label = settings.render_style.label();
    let adaptation = character_style_adaptation(style, settings.render_style);
    let PersonaText { name, description, features, build, face, outfit, accessories } = PersonaText::new(persona);
    let rule = "#".repeat(79);

    format!(
        r#"
{CHARACTER_PRESENTER_INSTRUCTIONS}

{rule}
#   STOP! READ THIS CHARACTER DESCRIPTION BEFORE WRITING ANY SLIDE PROMPTS
{rule}

YOUR CHARACTER FOR THIS PRESENTATION:
"{name}" - rendered in {render_label} style.

COPY THIS EXACT DESCRIPTION INTO EVERY SLIDE:
- DESCRIPTION: {description}
- APPEARANCE: {features}
- BUILD: {build}
- FACE: {face}
- OUTFIT: {outfit}
- ACCESSORIES: {accessories}

STYLE: {adaptation}

{rule}
#   TEMPLATE - USE THIS EXACT FORMAT FOR THE CHARACTER IN EACH SLIDE:
{rule}

CHARACTER: A {render_label} {name} with {features}. {build}. {face}. Wearing {outfit}. Standing in [POSITION]. [POSE/GESTURE for this slide]. Expression: [EMOTION for this slide].

WRONG (generic - DO NOT WRITE LIKE THIS):
- "Our presenter stands confidently..."
- "The character gestures toward..."
- "A professional figure in business attire..."

CORRECT (specific - WRITE LIKE THIS):
- "A {render_label} {name} with {features}. {build}. Wearing {outfit}. Standing in the bottom-left, gesturing toward the chart with an open palm. Expression: enthusiastic and engaged."

{rule}
"#
    )
}

fn generic_character_block(settings: CharacterSettings, style: SlideStyle) -> String {
    let gender = gender_modifier(settings.gender);
    let gender_line = if gender.is_empty() { String::new() } else { format!("\n{gender}\n") };

    format!(
        r#"
{CHARACTER_PRESENTER_INSTRUCTIONS}

## YOUR PRESENTER CHARACTER (REQUIRED ON ALL SLIDES)

**Character Render Style:** {render_label}
{render_desc}
{gender_line}
**Style Adaptation for {style_label}:**
{adaptation}

**Per-Slide Character Requirements:**
For EACH slide, you MUST describe:
1. Character POSITION on slide (e.g., "left side facing right", "bottom-right corner", "center foreground")
2. Character POSE and GESTURE (e.g., "pointing at the chart", "hands open presenting", "holding a tablet")
3. Character EXPRESSION (e.g., "excited smile", "thoughtful contemplation", "confident presentation")
4. Any PROPS if relevant (e.g., "holding clipboard with data", "gesturing at floating hologram")

**CRITICAL**: This is the SAME character on ALL slides. Maintain visual consistency while varying poses and expressions.

---
"#,
        render_label = settings.render_style.label(),
        render_desc = render_style_description(settings.render_style),
        style_label = style.label(),
        adaptation = character_style_adaptation(style, settings.render_style),
    )
}

/// One numbered line per slide, `N. **Slide N: Name** - template`.
pub fn slide_structure(slide_count: usize, sequence: Option<&[String]>) -> String {
    let mut out = String::new();
    match sequence {
        Some(ids) if ids.len() == slide_count => {
            for (idx, type_id) in ids.iter().enumerate() {
                let n = idx + 1;
                out.push_str(&format!("{n}. **Slide {n}: {}** - {}\n", display_label(type_id), get_template(type_id)));
            }
        }
        _ => {
            for n in 1..=slide_count {
                let line = if n == 1 {
                    format!("{n}. **Slide {n}: Title/Cover** - {TITLE_SKELETON}")
                } else if n == slide_count {
                    format!(
                        "{n}. **Slide {n}: Conclusion** - IMPACTFUL takeaways with premium visual recap, floating key insight cards, atmospheric depth, subtle particle effects. Footer: page '{n}'."
                    )
                } else {
                    let (name, desc) = FALLBACK_ARCHETYPES[(n - 2) % FALLBACK_ARCHETYPES.len()];
                    format!("{n}. **Slide {n}: {name}** - {desc}")
                };
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn language_section(language: Option<OutputLanguage>) -> String {
    match language {
        Some(lang) if lang != OutputLanguage::English => format!(
            "\n## Output Language\nWrite every slide title and all quoted on-slide text in {name}. Keep the structural markers exactly as shown: the `**Slide N:` header prefix and the ``` fences stay in English.\n",
            name = lang.english_name()
        ),
        _ => String::new(),
    }
}

pub fn build_user_prompt(config: &PromptConfig<'_>) -> String {
    let style_label = config.style.label();
    let slide_count = config.slide_count;
    let character = config.active_character();
    let persona = config.usable_persona();

    let character_block = match (character, persona) {
        (Some(settings), Some(p)) => persona_block(settings, p, config.style),
        (Some(settings), None) => generic_character_block(settings, config.style),
        _ => String::new(),
    };

    let palette = match config.color_palette {
        ColorPalette::Auto => "Auto-select harmonious colors (2-3 accents + neutrals) that match the style and content",
        other => palette_description(other),
    };

    let character_requirements = if character.is_some() {
        "\n- Include a detailed CHARACTER paragraph with SPECIFIC physical features (NOT generic descriptions)\n- Reference the exact species/form, distinctive features, colors, and outfit from the character specification\n- Describe character position, pose, expression, and any props for each slide"
    } else {
        ""
    };

    let (character_template, character_reminder) = match (character, persona) {
        (Some(settings), Some(p)) => {
            let render = settings.render_style.label();
            let text = PersonaText::new(p);
            (
                format!(
                    " CHARACTER: A {render} {} with {}. {}. Wearing {}. [POSITION]. [POSE]. [EXPRESSION].",
                    text.name, text.features, text.build, text.outfit
                ),
                format!(
                    "\n**CHARACTER REMINDER**: Copy the EXACT character template from above into each slide. Start with \"A {render} {} with...\" and keep it true to: {} - DO NOT use generic phrases like \"our presenter\" or \"the character\".\n",
                    text.name, text.description
                ),
            )
        }
        (Some(_), None) => (" CHARACTER: [Include character with position, pose, expression]".to_string(), String::new()),
        _ => (String::new(), String::new()),
    };

    format!(
        r#"## YOUR CREATIVE IDENTITY
{persona_text}

You are creating a {style_label} presentation. EVERY visual decision must reflect {style_label} aesthetics. This style is non-negotiable and defines every element you describe.
{character_block}
---

Generate {slide_count} CINEMATICALLY RICH slide prompts for a visually stunning presentation deck.

## Source Content to Transform Into Slides
{content}

IMPORTANT: Create prompts worthy of a TED talk, a National Geographic documentary, or a blockbuster movie interface. Think VISUALLY RICH with layered compositions, atmospheric effects, and premium execution. Do NOT create simple, basic prompts.

## Visual Direction (COMMIT TO THIS STYLE)
**Style:** {style_label}
{style_desc}

**Color Palette:** {palette}

**Layout Priority:** {layout}

**Aspect Ratio:** {aspect}
{language}
## Visual Richness Requirements (MANDATORY FOR ALL SLIDES)
Every prompt MUST include:
- **LAYERED BACKGROUND**: Gradient + subtle pattern (grid/particles/texture) + atmospheric depth
- **CINEMATIC HERO VISUAL**: Dramatic presentation with professional lighting, depth, and visual impact
- **5+ SUPPORTING ELEMENTS**: Callout boxes, stat cards, annotation systems, ambient particles, decorative accents
- **FOREGROUND DETAILS**: Floating UI elements, HUD-style decorations, accent lines, corner brackets
- **ATMOSPHERIC EFFECTS**: Particles, glows, subtle light effects, depth haze where appropriate

## Slide Deck Structure
Generate prompts for these {slide_count} slides using the cinematic visual techniques above:

{structure}

## Critical Requirements (NON-NEGOTIABLE)
Each prompt MUST:
- Be 250-350 words with EXTENSIVE visual detail
- Describe LAYERED COMPOSITION: deep background, mid-ground atmosphere, hero zone, overlay elements, foreground accents
- Include 5+ visual elements beyond the hero (callouts, particles, stat cards, annotations, ambient effects)
- Specify ATMOSPHERIC DETAILS: particle effects, glows, gradients, depth cues, lighting effects
- Include connecting visual systems: leader lines, HUD brackets, measurement overlays where relevant{character_requirements}

## Output Format
For each slide, provide exactly this structure:

**Slide [N]: [Descriptive Title]**
```
[250-350 word detailed prompt covering: slide type/template applied, hero zone visual (camera angle, lighting, focal point, depth), zones (background/overlay callouts), component placements (stat cards, callouts, icons), text anchor content, layout structure, design details]{character_template}
```

---
**STYLE REMINDER**: You are a {style_label} specialist. Every prompt must unmistakably reflect {style_label} aesthetics. A viewer should instantly recognize the style from any slide.
{character_reminder}
Generate all {slide_count} detailed prompts now, applying templates and components strategically per slide."#,
        persona_text = style_persona(config.style),
        content = config.content,
        style_desc = style_description(config.style),
        layout = layout_description(config.layout_structure),
        aspect = aspect_ratio_description(config.aspect_ratio),
        language = language_section(config.output_language),
        structure = slide_structure(slide_count, config.slide_type_sequence),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterGender, PhysicalDetails, RenderStyle, WardrobeAndProps};
    use crate::prompts::library::{category_of, SlideTypeCategory};
    use crate::prompts::sequence::build_sequence;
    use pretty_assertions::assert_eq;

    fn settings(slide_count: usize) -> PresentationSettings {
        PresentationSettings {
            aspect_ratio: AspectRatio::Widescreen,
            slide_count,
            color_palette: ColorPalette::Auto,
            layout_structure: LayoutStructure::Balanced,
            character: None,
            output_language: None,
        }
    }

    fn spec_lines(prompt: &str, k: usize) -> usize {
        let prefix = format!("{k}. **Slide {k}");
        prompt.lines().filter(|l| l.starts_with(&prefix)).count()
    }

    fn robot() -> GeneratedCharacter {
        GeneratedCharacter {
            character_type: "Robot".into(),
            species_or_form: "Cute helper robot".into(),
            core_description: "A compact teal robot.".into(),
            physical_details: PhysicalDetails {
                build_proportions: "Small and rounded".into(),
                distinctive_features: "glowing antenna bulb".into(),
                color_scheme: "Teal and white".into(),
                face_expression: "Pixel smile".into(),
            },
            wardrobe_and_props: WardrobeAndProps {
                default_outfit: "a tiny lab coat".into(),
                props_accessories: String::new(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn one_spec_line_per_slide_with_and_without_sequence() {
        for n in [1usize, 2, 3, 9, 12, 20] {
            let s = settings(n);
            let plain = build_user_prompt(&PromptConfig::new("Topic", SlideStyle::Technical, &s));
            let seq = build_sequence(None, n);
            let sequenced =
                build_user_prompt(&PromptConfig::new("Topic", SlideStyle::Technical, &s).with_sequence(Some(&seq)));
            for prompt in [&plain, &sequenced] {
                assert!(prompt.contains(&format!("Generate {n} CINEMATICALLY RICH")));
                for k in 1..=n {
                    assert_eq!(spec_lines(prompt, k), 1, "n={n} k={k}");
                }
                assert_eq!(spec_lines(prompt, n + 1), 0);
            }
        }
    }

    #[test]
    fn photosynthesis_deck() {
        let s = settings(3);
        let seq = build_sequence(None, 3);
        assert_eq!(seq.len(), 3);
        assert_eq!(category_of(&seq[0]), Some(SlideTypeCategory::Opening));
        assert_eq!(category_of(&seq[2]), Some(SlideTypeCategory::Closing));

        let prompt = build_user_prompt(
            &PromptConfig::new("Intro to photosynthesis", SlideStyle::Educational, &s).with_sequence(Some(&seq)),
        );
        let structure = prompt
            .split("## Slide Deck Structure")
            .nth(1)
            .and_then(|rest| rest.split("## Critical Requirements").next())
            .unwrap();
        assert_eq!(structure.matches("**Slide").count(), 3);
        assert!(prompt.contains("Generate 3 CINEMATICALLY RICH"));
        assert!(prompt.contains("Intro to photosynthesis"));
        assert!(!prompt.contains("CHARACTER PRESENTER GUIDELINES"));
        assert!(!prompt.contains("CHARACTER:"));
    }

    #[test]
    fn sequence_of_wrong_length_falls_back_to_skeleton() {
        let s = settings(4);
        let seq = library_ids(&["title-dramatic", "close-summary"]);
        let prompt = build_user_prompt(&PromptConfig::new("x", SlideStyle::Minimalist, &s).with_sequence(Some(&seq)));
        assert!(prompt.contains("1. **Slide 1: Title/Cover**"));
        assert!(prompt.contains("4. **Slide 4: Conclusion**"));
    }

    fn library_ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn skeleton_cycles_archetypes_past_ten_slides() {
        let structure = slide_structure(12, None);
        assert!(structure.contains("2. **Slide 2: Concept/Explanation**"));
        assert!(structure.contains("10. **Slide 10: Concept/Explanation**"));
        assert!(structure.contains("11. **Slide 11: Data/Insight**"));
        assert_eq!(structure.lines().count(), 12);
    }

    #[test]
    fn single_slide_skeleton_is_title_only() {
        assert_eq!(slide_structure(1, None), format!("1. **Slide 1: Title/Cover** - {TITLE_SKELETON}"));
    }

    #[test]
    fn generated_persona_fields_appear_verbatim() {
        let mut s = settings(3);
        s.character = Some(CharacterSettings { enabled: true, render_style: RenderStyle::Pixar, gender: CharacterGender::Unspecified });
        let persona = robot();
        let prompt = build_user_prompt(&PromptConfig::new("Space", SlideStyle::SciFiHud, &s).with_character(Some(&persona)));
        assert!(prompt.contains("\"Cute helper robot\" - rendered in Pixar style."));
        assert!(prompt.contains("- APPEARANCE: glowing antenna bulb"));
        assert!(prompt.contains("- ACCESSORIES: minimal accessories"));
        assert!(prompt.contains("CHARACTER: A Pixar Cute helper robot with glowing antenna bulb. Small and rounded. Pixel smile. Wearing a tiny lab coat."));
        assert!(prompt.contains("WRONG (generic"));
        assert!(prompt.contains("**CHARACTER REMINDER**"));
        assert!(!prompt.contains("## YOUR PRESENTER CHARACTER"));
    }

    #[test]
    fn unlabelled_persona_keeps_its_description() {
        let mut s = settings(3);
        s.character = Some(CharacterSettings { enabled: true, render_style: RenderStyle::Pixar, gender: CharacterGender::Unspecified });
        let persona = crate::prompts::parse_character_description("A wise old owl\nwho wears round glasses.").unwrap();
        let prompt = build_user_prompt(&PromptConfig::new("Night birds", SlideStyle::Vintage, &s).with_character(Some(&persona)));

        assert!(prompt.contains("- DESCRIPTION: A wise old owl who wears round glasses."));
        assert!(prompt.contains(
            " CHARACTER: A Pixar presenter with distinctive features. professional build. Wearing professional attire. [POSITION]."
        ));
        assert!(prompt.contains("keep it true to: A wise old owl who wears round glasses."));
        assert!(!prompt.contains(" with . "));
        assert!(!prompt.contains("Wearing ."));
    }

    #[test]
    fn missing_persona_uses_render_style_block() {
        let mut s = settings(3);
        s.character = Some(CharacterSettings { enabled: true, render_style: RenderStyle::Chibi, gender: CharacterGender::Female });
        let empty = GeneratedCharacter::default();
        let prompt = build_user_prompt(&PromptConfig::new("Cats", SlideStyle::Watercolor, &s).with_character(Some(&empty)));
        assert!(prompt.contains("## YOUR PRESENTER CHARACTER (REQUIRED ON ALL SLIDES)"));
        assert!(prompt.contains(render_style_description(RenderStyle::Chibi)));
        assert!(prompt.contains(gender_modifier(CharacterGender::Female)));
        assert!(prompt.contains("**Style Adaptation for Watercolor:**"));
        assert!(prompt.contains("CHARACTER: [Include character with position, pose, expression]"));
        assert!(!prompt.contains("CHARACTER REMINDER"));
    }

    #[test]
    fn disabled_character_is_ignored() {
        let mut s = settings(2);
        s.character = Some(CharacterSettings { enabled: false, render_style: RenderStyle::Anime, gender: CharacterGender::Male });
        let persona = robot();
        let prompt = build_user_prompt(&PromptConfig::new("x", SlideStyle::Creative, &s).with_character(Some(&persona)));
        assert!(!prompt.contains("CHARACTER PRESENTER"));
        assert!(!prompt.contains("CHARACTER:"));
    }

    #[test]
    fn palette_auto_and_explicit() {
        let mut s = settings(2);
        let auto = build_user_prompt(&PromptConfig::new("x", SlideStyle::Professional, &s));
        assert!(auto.contains("**Color Palette:** Auto-select harmonious colors"));
        s.color_palette = ColorPalette::RoyalGold;
        let gold = build_user_prompt(&PromptConfig::new("x", SlideStyle::Professional, &s));
        assert!(gold.contains(palette_description(ColorPalette::RoyalGold)));
    }

    #[test]
    fn non_english_output_adds_language_section() {
        let mut s = settings(2);
        s.output_language = Some(OutputLanguage::Japanese);
        let prompt = build_user_prompt(&PromptConfig::new("x", SlideStyle::Professional, &s));
        assert!(prompt.contains("## Output Language"));
        assert!(prompt.contains("in Japanese"));

        s.output_language = Some(OutputLanguage::English);
        let prompt = build_user_prompt(&PromptConfig::new("x", SlideStyle::Professional, &s));
        assert!(!prompt.contains("## Output Language"));
    }

    #[test]
    fn every_style_and_ratio_combination_builds() {
        for style in SlideStyle::ALL {
            for ratio in AspectRatio::ALL {
                let mut s = settings(2);
                s.aspect_ratio = *ratio;
                let prompt = build_user_prompt(&PromptConfig::new("x", *style, &s));
                assert!(prompt.contains(style_persona(*style)));
                assert!(prompt.contains(ratio.as_str()));
            }
        }
    }

    #[test]
    fn system_prompt_states_the_output_grammar() {
        assert!(SLIDE_SYSTEM_PROMPT.contains("**Slide [N]: [Descriptive Title]**"));
    }
}
