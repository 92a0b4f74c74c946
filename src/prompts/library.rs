//! Catalog of slide-type templates, grouped by category.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::models::ContentCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideTypeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub template: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideTypeCategory {
    Opening,
    Concept,
    Data,
    Process,
    Technical,
    Business,
    Comparison,
    Example,
    Storytelling,
    Educational,
    Closing,
}

const fn t(id: &'static str, name: &'static str, template: &'static str) -> SlideTypeTemplate {
    SlideTypeTemplate { id, name, template }
}

pub const OPENING_TYPE: &str = "title-dramatic";
pub const CLOSING_TYPE: &str = "close-summary";
pub const CLOSING_PREFIX: &str = "close-";

pub static SLIDE_TYPE_LIBRARY: &[(SlideTypeCategory, &[SlideTypeTemplate])] = &[
    (SlideTypeCategory::Opening, &[
        t("title-dramatic", "Dramatic Title", "DRAMATIC headline with atmospheric visual, particle effects, layered depth. Full-bleed thematic hero with premium treatment. Bold typography with cinematic lighting."),
        t("title-minimalist", "Minimalist Title", "Clean minimalist title with striking typography on breathable space. Single powerful visual anchor with subtle atmospheric depth."),
        t("problem-statement", "Problem Statement", "Bold problem visualization highlighting pain points. Dramatic visual metaphor for the challenge. Data callouts showing impact/cost of the problem."),
        t("hook-question", "Hook Question", "Thought-provoking question as hero text. Evocative imagery that sparks curiosity. Atmospheric tension building visual treatment."),
        t("agenda-overview", "Agenda Overview", "Visual roadmap of presentation journey. Connected milestone markers with preview thumbnails. Clean numbered progression."),
    ]),
    (SlideTypeCategory::Concept, &[
        t("concept-diagram", "Concept Diagram", "Large CINEMATIC hero diagram with 5+ callout boxes with connecting lines, measurement annotations, floating stat cards, atmospheric particles, layered background depth."),
        t("concept-metaphor", "Visual Metaphor", "Visual metaphor representation with layered meaning. Abstract concept made tangible through creative imagery. Multiple interpretation layers with supporting annotations."),
        t("concept-breakdown", "Component Breakdown", "Exploded view showing component relationships. Labeled parts with connecting lines. Technical precision with artistic presentation."),
        t("concept-layers", "Layered Concept", "Stacked transparent layers revealing depth. Each layer labeled with key attributes. Cross-section view with detailed callouts."),
        t("concept-ecosystem", "Ecosystem Map", "Interconnected nodes showing relationships. Central hub with radiating connections. Category groupings with visual clustering."),
        t("concept-spectrum", "Spectrum/Scale", "Linear or circular spectrum showing range. Positioned markers with labels. Gradient visualization of continuous concept."),
    ]),
    (SlideTypeCategory::Data, &[
        t("data-chart", "Data Visualization", "DRAMATIC chart/visualization as hero with glowing data points, 3+ floating metric cards with trend indicators, ambient effects, translucent info panels, professional data overlays."),
        t("data-comparison", "Metric Comparison", "Side-by-side metrics with trend indicators. Percentage changes with visual indicators. Before/after data storytelling."),
        t("data-dashboard", "Dashboard View", "Multi-metric dashboard layout. KPI cards with sparklines. Real-time data aesthetic with status indicators."),
        t("data-trend", "Trend Analysis", "Time-series visualization with projection. Highlighted inflection points. Annotated milestones on timeline."),
        t("data-distribution", "Distribution View", "Statistical distribution visualization. Histogram or density plot with annotations. Key percentiles highlighted."),
        t("data-correlation", "Correlation Matrix", "Relationship visualization between variables. Heat map or scatter plot matrix. Insight callouts for key patterns."),
    ]),
    (SlideTypeCategory::Process, &[
        t("process-timeline", "Timeline", "VISUAL STORYTELLING with 4-6 connected phase boxes, dramatic main illustration with motion effects, energy trails, particle systems, supporting info panels with specs."),
        t("process-flowchart", "Flowchart", "Decision flow with branching paths. Clear decision diamonds with outcomes. Color-coded paths for different scenarios."),
        t("process-flywheel", "Flywheel/Cycle", "Cyclical process with continuous flow. Reinforcing loop visualization. Energy/momentum visual indicators."),
        t("process-pipeline", "Pipeline", "Stage-by-stage progression visualization. Funnel or pipeline with conversion metrics. Drop-off indicators and optimization points."),
        t("process-journey", "Journey Map", "User/customer journey with touchpoints. Emotional highs and lows indicated. Channel and interaction markers."),
        t("process-steps", "Step-by-Step", "Numbered sequential steps with icons. Progress indicator showing current position. Action items for each step."),
    ]),
    (SlideTypeCategory::Technical, &[
        t("tech-architecture", "System Architecture", "HOLOGRAPHIC-STYLE schematic with wireframe overlays, glowing connection nodes, HUD-style brackets, floating spec cards, measurement systems, ambient scanning effects."),
        t("tech-stack", "Technology Stack", "Layered technology visualization. Component boxes with version/specs. Integration arrows between layers."),
        t("tech-api", "API/Integration", "API endpoint visualization with request/response flows. Data transformation indicators. Authentication and security markers."),
        t("tech-infrastructure", "Infrastructure", "Cloud/server infrastructure diagram. Service icons with connection lines. Scalability and redundancy indicators."),
        t("tech-dataflow", "Data Flow", "Data movement visualization through systems. Transformation points highlighted. Storage and processing nodes marked."),
        t("tech-security", "Security Model", "Security layers and boundaries. Access control visualization. Threat vectors and protection measures."),
    ]),
    (SlideTypeCategory::Business, &[
        t("business-strategy", "Strategy Framework", "Strategic framework with matrix/quadrant layout. Positioned elements with rationale. Action arrows showing direction."),
        t("business-roi", "ROI/Financial", "Financial metrics with growth trajectories. Investment vs return visualization. Payback period and projections."),
        t("business-market", "Market Analysis", "Market landscape with competitive positioning. Size/growth indicators. Opportunity zones highlighted."),
        t("business-swot", "SWOT Analysis", "Four-quadrant SWOT layout. Prioritized items in each quadrant. Visual weight indicating importance."),
        t("business-model", "Business Model", "Business model canvas or variant. Revenue streams and cost structure. Value proposition highlighted."),
        t("business-roadmap", "Product Roadmap", "Timeline with planned features/releases. Now/Next/Later categorization. Dependencies and milestones marked."),
    ]),
    (SlideTypeCategory::Comparison, &[
        t("compare-vs", "Side-by-Side", "PREMIUM side-by-side with visual differentiation, floating comparison metrics, gradient backgrounds, icon systems, callout annotations, ambient depth effects."),
        t("compare-before-after", "Before/After", "Transformation showcase with dramatic contrast. Split-screen or slider visualization. Improvement metrics highlighted."),
        t("compare-feature-matrix", "Feature Matrix", "Feature grid with checkmarks and highlights. Competitor columns with your advantage shown. Category groupings."),
        t("compare-pros-cons", "Pros/Cons", "Balanced view of advantages and disadvantages. Visual weight showing net positive. Decision guidance indicators."),
        t("compare-options", "Option Comparison", "Multiple options presented for decision. Scoring or rating for each option. Recommended choice highlighted."),
    ]),
    (SlideTypeCategory::Example, &[
        t("example-case-study", "Case Study", "Real-world example with documentary-style presentation. Context intro, challenge, solution, results. Metrics and testimonial integration."),
        t("example-testimonial", "Testimonial", "Quote display with contextual imagery. Customer photo/logo with attribution. Results metrics alongside quote."),
        t("example-demo", "Demo/Screenshot", "Product/interface showcase with annotations. Feature callouts with descriptions. User flow or interaction highlighted."),
        t("example-use-case", "Use Case", "Specific scenario walkthrough. User persona with context. Step-by-step application of solution."),
        t("example-results", "Results Showcase", "Achievement metrics prominently displayed. Before/after comparison. Timeline of improvements."),
    ]),
    (SlideTypeCategory::Storytelling, &[
        t("story-hero", "Hero Moment", "Dramatic visual moment capturing key insight. Cinematic composition with emotional impact. Single powerful message."),
        t("story-journey-point", "Journey Point", "Single point in larger narrative. Context from previous, setup for next. Emotional resonance with audience."),
        t("story-revelation", "Big Reveal", "Dramatic unveiling of key information. Building tension to climax. Visual surprise element."),
        t("story-challenge", "Challenge Setup", "Obstacle or challenge visualization. Stakes and consequences shown. Urgency indicators."),
        t("story-resolution", "Resolution", "Solution or achievement visualization. Triumph visual treatment. Positive outcome emphasis."),
    ]),
    (SlideTypeCategory::Educational, &[
        t("edu-definition", "Definition", "Term/concept definition with visual support. Etymology or breakdown of components. Related concepts linked."),
        t("edu-example-set", "Examples Set", "Multiple examples illustrating concept. Variety showing breadth of application. Common thread highlighted."),
        t("edu-quiz", "Quiz/Check", "Knowledge check or quiz question. Multiple choice or reflection prompt. Interactive engagement moment."),
        t("edu-summary", "Key Takeaways", "Summarized learning points. Numbered or bulleted key insights. Visual memory anchors."),
        t("edu-practice", "Practice/Exercise", "Hands-on activity prompt. Step-by-step instructions. Expected outcome preview."),
    ]),
    (SlideTypeCategory::Closing, &[
        t("close-summary", "Summary", "IMPACTFUL takeaways with premium visual recap, floating key insight cards, atmospheric depth, subtle particle effects. Key points crystallized."),
        t("close-cta", "Call to Action", "Bold CTA with clear next steps. Single focused action request. Supporting motivation/urgency."),
        t("close-contact", "Contact/Follow-up", "Contact information elegantly displayed. Social/web links with QR codes. Personal touch with photo."),
        t("close-thanks", "Thank You", "Elegant closing with appreciation. Brand reinforcement. Memorable final visual impression."),
        t("close-qa", "Q&A", "Questions invitation with engaging visual. Contact info for follow-up. Topic keywords or themes."),
    ]),
];

static BY_ID: LazyLock<HashMap<&'static str, (SlideTypeCategory, &'static SlideTypeTemplate)>> =
    LazyLock::new(|| {
        SLIDE_TYPE_LIBRARY
            .iter()
            .flat_map(|(category, templates)| templates.iter().map(move |tpl| (tpl.id, (*category, tpl))))
            .collect()
    });

pub fn find(type_id: &str) -> Option<&'static SlideTypeTemplate> {
    BY_ID.get(type_id).map(|(_, tpl)| *tpl)
}

pub fn category_of(type_id: &str) -> Option<SlideTypeCategory> {
    BY_ID.get(type_id).map(|(category, _)| *category)
}

pub fn templates_in(category: SlideTypeCategory) -> &'static [SlideTypeTemplate] {
    SLIDE_TYPE_LIBRARY
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, templates)| *templates)
        .unwrap_or(&[])
}

/// Template text for a type id. Unknown ids get the concept-diagram template.
pub fn get_template(type_id: &str) -> &'static str {
    find(type_id)
        .map(|tpl| tpl.template)
        .unwrap_or_else(|| templates_in(SlideTypeCategory::Concept)[0].template)
}

/// Mid-deck rotation used to fill the interior of a deck for each content category.
pub fn mid_types(category: ContentCategory) -> &'static [&'static str] {
    match category {
        ContentCategory::Technical => &["concept-diagram", "tech-architecture", "process-flowchart", "data-chart", "tech-stack", "concept-breakdown", "compare-vs", "example-demo"],
        ContentCategory::Business => &["problem-statement", "business-strategy", "data-chart", "business-roi", "compare-vs", "example-case-study", "process-timeline", "business-roadmap"],
        ContentCategory::Educational => &["concept-diagram", "edu-definition", "concept-breakdown", "edu-example-set", "process-steps", "data-chart", "concept-metaphor", "edu-summary"],
        ContentCategory::Creative => &["story-hero", "concept-metaphor", "story-journey-point", "example-demo", "compare-before-after", "story-revelation", "concept-ecosystem", "example-results"],
        ContentCategory::Marketing => &["problem-statement", "story-hero", "compare-vs", "example-testimonial", "data-chart", "example-case-study", "business-roi", "compare-feature-matrix"],
        ContentCategory::Scientific => &["concept-diagram", "data-chart", "process-flowchart", "data-correlation", "concept-layers", "example-results", "tech-dataflow", "data-trend"],
        ContentCategory::General => &["concept-diagram", "data-chart", "process-timeline", "compare-vs", "concept-breakdown", "example-case-study", "data-dashboard", "process-steps"],
    }
}

/// Opening type, then `mid[(i-1) % len]` for each interior slot, then the closing type
/// when there is more than one slide.
pub fn default_sequence(slide_count: usize, category: ContentCategory) -> Vec<String> {
    if slide_count == 0 {
        return Vec::new();
    }
    let mid = mid_types(category);
    let mut sequence = Vec::with_capacity(slide_count);
    sequence.push(OPENING_TYPE.to_string());
    for i in 1..slide_count.saturating_sub(1) {
        sequence.push(mid[(i - 1) % mid.len()].to_string());
    }
    if slide_count > 1 {
        sequence.push(CLOSING_TYPE.to_string());
    }
    sequence
}

/// Compact listing of every id by category, embedded in the analyzer's instructions.
pub fn catalog_listing() -> String {
    SLIDE_TYPE_LIBRARY
        .iter()
        .map(|(category, templates)| {
            let ids: Vec<&str> = templates.iter().map(|tpl| tpl.id).collect();
            let name = serde_json::to_value(category)
                .ok()
                .and_then(|v| v.as_str().map(crate::models::display_label))
                .unwrap_or_default();
            format!("**{}:** {}", name, ids.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
