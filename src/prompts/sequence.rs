use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{ContentAnalysis, ContentCategory};

use super::library::{self, CLOSING_PREFIX, CLOSING_TYPE};

pub fn analyzer_system_prompt() -> String {
    format!(
        r#"You are a presentation structure expert. Analyze content and suggest the optimal slide type sequence for a compelling presentation.

## Your Task
1. Identify the main content category
2. Detect content patterns (data, processes, comparisons, examples, technical details)
3. Suggest a logical, engaging slide type sequence

## Available Slide Types

{catalog}

## Guidelines
- First slide should be an opening type (title-dramatic or problem-statement)
- Last slide should be a closing type (close-summary or close-cta)
- Match slide types to content patterns found
- Create a logical narrative flow and vary slide types for visual interest
- Business content: business, data, comparison types
- Technical content: technical, process, concept types
- Educational content: educational, concept, example types
- Marketing content: storytelling, example, comparison types

## Output Format (JSON only)
{{
  "contentCategory": "technical" | "business" | "educational" | "creative" | "marketing" | "scientific" | "general",
  "suggestedTypes": ["type-id-1", "type-id-2", ...],
  "reasoning": "Brief explanation"
}}"#,
        catalog = library::catalog_listing()
    )
}

pub fn build_analysis_prompt(content: &str, slide_count: usize) -> String {
    format!("Analyze this content for a {slide_count}-slide presentation and suggest optimal slide types:\n\n{content}")
}

/// Pulls the outermost `{...}` object out of the analyzer reply. `None` when there is no
/// object, it does not parse, or `suggestedTypes` is not an array.
pub fn parse_content_analysis(raw: &str) -> Option<ContentAnalysis> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    let value: Value = match serde_json::from_str(&raw[start..=end]) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Content analysis is not valid JSON");
            return None;
        }
    };

    let suggested_types = value
        .get("suggestedTypes")?
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let content_category = value
        .get("contentCategory")
        .and_then(|v| serde_json::from_value::<ContentCategory>(v.clone()).ok())
        .unwrap_or_default();

    let reasoning = value
        .get("reasoning")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Some(ContentAnalysis { content_category, suggested_types, reasoning })
}

/// Ordered slide-type ids of exactly `slide_count` entries.
///
/// Without usable suggestions this is the library default. Long suggestion lists are
/// truncated; short ones are padded with the category's mid-deck rotation, inserted
/// before the last `close-` entry so the closing slide stays last.
pub fn build_sequence(analysis: Option<&ContentAnalysis>, slide_count: usize) -> Vec<String> {
    let analysis = match analysis {
        Some(a) if !a.suggested_types.is_empty() => a,
        _ => return library::default_sequence(slide_count, ContentCategory::General),
    };

    let types = &analysis.suggested_types;
    if types.len() >= slide_count {
        return types[..slide_count].to_vec();
    }

    let filler = library::mid_types(analysis.content_category);
    let mut result = types.clone();
    let mut filled = 0usize;

    let mut insert_filler = |result: &mut Vec<String>| {
        let next = filler[filled % filler.len()].to_string();
        filled += 1;
        match result.iter().rposition(|id| id.starts_with(CLOSING_PREFIX)) {
            Some(pos) => result.insert(pos, next),
            None => result.push(next),
        }
    };

    while result.len() < slide_count.saturating_sub(1) {
        insert_filler(&mut result);
    }
    if !result.iter().any(|id| id.starts_with(CLOSING_PREFIX)) {
        result.push(CLOSING_TYPE.to_string());
    }
    while result.len() < slide_count {
        insert_filler(&mut result);
    }
    result.truncate(slide_count);

    debug!(
        suggested = types.len(),
        unknown = types.iter().filter(|id| library::category_of(id).is_none()).count(),
        slide_count,
        category = ?analysis.content_category,
        "Padded suggested slide types"
    );
    result
}
