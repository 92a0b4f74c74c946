//! Presenter persona: the request sent to the text model and the parser for its reply.

use tracing::{debug, warn};

use crate::models::{
    CharacterGender, GeneratedCharacter, Labelled, PhysicalDetails, RenderStyle, SlideStyle, WardrobeAndProps,
};

use super::tables::style_description;

/// Characters of raw reply kept as the core description when none was labelled.
const CORE_FALLBACK_CHARS: usize = 800;
/// Longest text before a colon that can still be a field label.
const MAX_LABEL_LEN: usize = 48;

pub const CHARACTER_SYSTEM_PROMPT: &str = r#"You are an expert character designer for presentation slides. You create consistent, memorable presenter characters that match the presentation's topic, audience, and visual style.

## Your Task
Analyze the presentation content and settings, then design ONE consistent character that will appear across ALL slides as the presenter.

## Character Type Selection
- Human: relatable and authoritative, good for business, education, serious topics
- Anthropomorphic animal: playful and family-friendly, good for children and storytelling
- Animated object: topic-specific, e.g. a lightbulb for ideas or a rocket for growth
- Fantasy creature: imaginative, good for creative and entertainment topics
- Robot/AI: technical and futuristic, good for tech and science topics
- Mascot: simple and iconic, good for corporate and marketing decks

If the user's content hints at a character ("use a robot", "for kids", "friendly owl"), PRIORITIZE that preference.

## Output Format

Provide your character design in this EXACT structure:

```
CHARACTER_TYPE: [Human/Animal/Object/Fantasy/Robot/Mascot]
SPECIES_OR_FORM: [e.g. "Friendly cartoon owl", "Cute helper robot"]
CORE_DESCRIPTION: [2-3 sentences on identity, appearance, and personality]

PHYSICAL_DETAILS:
- Build/proportions: [body type, size, distinctive shape]
- Distinctive features: [key visual elements that make the character recognizable]
- Color scheme: [primary, secondary, accent colors that complement the slide style]
- Face/expression baseline: [default facial characteristics and expression style]

PERSONALITY_TRAITS: [3-5 traits that influence poses and expressions]

WARDROBE_AND_PROPS:
- Default outfit: [clothing or appearance suited to the topic]
- Props/accessories: [items that support the presenter role]

SIGNATURE_GESTURES: [2-3 characteristic poses or movements]

CONSISTENCY_NOTES: [elements that MUST stay identical across all slides]
```

## Critical Guidelines
- Simpler designs stay more consistent across slides
- The character must be recognizable in different poses and expressions
- The character should ENHANCE the content, not distract from it
- Non-human characters are ENCOURAGED when they fit the content better"#;

pub fn build_character_prompt(
    content: &str,
    style: SlideStyle,
    render_style: RenderStyle,
    gender: CharacterGender,
    slide_count: usize,
) -> String {
    let style_label = style.label();
    let render_label = render_style.label();
    let gender_instruction = match gender {
        CharacterGender::Male => "**GENDER REQUIREMENT**: The character MUST be MALE with masculine features and presentation.",
        CharacterGender::Female => "**GENDER REQUIREMENT**: The character MUST be FEMALE with feminine features and presentation.",
        CharacterGender::Unspecified => "**GENDER PREFERENCE**: Choose whatever gender (or genderless for objects/robots) fits the content best.",
    };

    format!(
        r#"## Presentation Context

**Content/Topic:**
{content}

**Number of Slides:** {slide_count}

**Visual Slide Style:** {style_label}
{style_desc}

**Character Render Style:** {render_label}
The character will be rendered in {render_label} aesthetic. Design with this rendering approach in mind.

{gender_instruction}

## Your Task

Design ONE consistent presenter character for this {slide_count}-slide presentation.

1. What character TYPE best suits this topic and audience?
2. Are there HINTS in the content about a desired character?
3. What PERSONALITY would make this character an engaging presenter?
4. What VISUAL ELEMENTS make this character memorable at a glance?

The character appears on EVERY slide and must be recognizable across poses and expressions.

Design the character now using the exact output format specified in your instructions."#,
        style_desc = style_description(style),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    CharacterType,
    SpeciesOrForm,
    CoreDescription,
    PhysicalSection,
    BuildProportions,
    DistinctiveFeatures,
    ColorScheme,
    FaceExpression,
    PersonalityTraits,
    WardrobeSection,
    DefaultOutfit,
    PropsAccessories,
    SignatureGestures,
    ConsistencyNotes,
}

/// Aliases are matched against the normalized label (uppercase, `_ / -` as spaces).
const LABELS: &[(&str, Field)] = &[
    ("CHARACTER TYPE", Field::CharacterType),
    ("TYPE", Field::CharacterType),
    ("SPECIES OR FORM", Field::SpeciesOrForm),
    ("SPECIES FORM", Field::SpeciesOrForm),
    ("SPECIES", Field::SpeciesOrForm),
    ("FORM", Field::SpeciesOrForm),
    ("CORE DESCRIPTION", Field::CoreDescription),
    ("DESCRIPTION", Field::CoreDescription),
    ("IDENTITY", Field::CoreDescription),
    ("PHYSICAL DETAILS", Field::PhysicalSection),
    ("BUILD PROPORTIONS", Field::BuildProportions),
    ("BUILD", Field::BuildProportions),
    ("PROPORTIONS", Field::BuildProportions),
    ("BODY", Field::BuildProportions),
    ("DISTINCTIVE FEATURES", Field::DistinctiveFeatures),
    ("DISTINCTIVE", Field::DistinctiveFeatures),
    ("KEY FEATURES", Field::DistinctiveFeatures),
    ("FEATURES", Field::DistinctiveFeatures),
    ("COLOR SCHEME", Field::ColorScheme),
    ("COLOR PALETTE", Field::ColorScheme),
    ("COLORS", Field::ColorScheme),
    ("PALETTE", Field::ColorScheme),
    ("FACE EXPRESSION BASELINE", Field::FaceExpression),
    ("FACE EXPRESSION", Field::FaceExpression),
    ("EXPRESSION BASELINE", Field::FaceExpression),
    ("DEFAULT EXPRESSION", Field::FaceExpression),
    ("FACE", Field::FaceExpression),
    ("PERSONALITY TRAITS", Field::PersonalityTraits),
    ("PERSONALITY", Field::PersonalityTraits),
    ("TRAITS", Field::PersonalityTraits),
    ("WARDROBE AND PROPS", Field::WardrobeSection),
    ("WARDROBE & PROPS", Field::WardrobeSection),
    ("DEFAULT OUTFIT", Field::DefaultOutfit),
    ("OUTFIT", Field::DefaultOutfit),
    ("CLOTHING", Field::DefaultOutfit),
    ("ATTIRE", Field::DefaultOutfit),
    ("WARDROBE", Field::DefaultOutfit),
    ("PROPS ACCESSORIES", Field::PropsAccessories),
    ("PROPS", Field::PropsAccessories),
    ("ACCESSORIES", Field::PropsAccessories),
    ("ITEMS", Field::PropsAccessories),
    ("SIGNATURE GESTURES", Field::SignatureGestures),
    ("SIGNATURE POSES", Field::SignatureGestures),
    ("GESTURES", Field::SignatureGestures),
    ("CONSISTENCY NOTES", Field::ConsistencyNotes),
    ("VISUAL CONSISTENCY", Field::ConsistencyNotes),
    ("CONSISTENCY", Field::ConsistencyNotes),
];

fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '*' && *c != '#')
        .map(|c| if matches!(c, '_' | '/' | '-') { ' ' } else { c.to_ascii_uppercase() })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Recognizes `LABEL: value` lines, tolerating bullets, bold markers and case.
fn match_label(line: &str) -> Option<(Field, &str)> {
    let line = line.trim_start().trim_start_matches(['-', '*', '•']).trim_start();
    let colon = line.find(':')?;
    let label = &line[..colon];
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return None;
    }
    let normalized = normalize_label(label);
    let field = LABELS.iter().find(|(alias, _)| *alias == normalized).map(|(_, f)| *f)?;
    let rest = line[colon + 1..].trim_start_matches('*');
    Some((field, rest))
}

/// Body of the first fenced block, or the whole text when there is none.
fn unwrap_fence(raw: &str) -> &str {
    let Some(open) = raw.find("```") else { return raw };
    let after = &raw[open + 3..];
    let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after[body_start..];
    match body.find("```") {
        Some(close) => body[..close].trim(),
        None => raw,
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses the labeled-field reply into a persona.
///
/// Fields may come in any order, span several lines, or be missing (empty string).
/// Only a blank reply yields `None`; otherwise the core description is backfilled
/// from the start of the reply.
pub fn parse_character_description(raw: &str) -> Option<GeneratedCharacter> {
    let content = unwrap_fence(raw);
    if content.trim().is_empty() {
        warn!("Character reply was empty, no persona to parse");
        return None;
    }

    let mut values: Vec<(Field, Vec<&str>)> = Vec::new();
    for line in content.lines() {
        match match_label(line) {
            Some((field, rest)) => values.push((field, vec![rest])),
            None => {
                if let Some((_, lines)) = values.last_mut() {
                    lines.push(line);
                }
            }
        }
    }

    let take = |field: Field| -> String {
        values
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, lines)| collapse(&lines.join("\n")))
            .find(|v| !v.is_empty())
            .unwrap_or_default()
    };

    let mut character = GeneratedCharacter {
        character_type: take(Field::CharacterType),
        species_or_form: take(Field::SpeciesOrForm),
        core_description: take(Field::CoreDescription),
        physical_details: PhysicalDetails {
            build_proportions: take(Field::BuildProportions),
            distinctive_features: take(Field::DistinctiveFeatures),
            color_scheme: take(Field::ColorScheme),
            face_expression: take(Field::FaceExpression),
        },
        personality_traits: take(Field::PersonalityTraits),
        wardrobe_and_props: WardrobeAndProps {
            default_outfit: take(Field::DefaultOutfit),
            props_accessories: take(Field::PropsAccessories),
        },
        signature_gestures: take(Field::SignatureGestures),
        consistency_notes: take(Field::ConsistencyNotes),
        raw_description: content.to_string(),
    };

    if character.core_description.is_empty() {
        let prefix: String = content.chars().take(CORE_FALLBACK_CHARS).collect();
        character.core_description = collapse(&prefix);
        debug!("Core description backfilled from raw reply");
    }

    Some(character)
}
