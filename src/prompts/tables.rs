//! Fixed description tables keyed by the request enums.
//!
//! Every table is an exhaustive `match`, so adding a variant without its
//! description fails to compile.

use crate::models::{AspectRatio, CharacterGender, ColorPalette, LayoutStructure, RenderStyle, SlideStyle};

pub fn style_description(style: SlideStyle) -> &'static str {
    match style {
        SlideStyle::Professional => "clean corporate aesthetic with soft gradients, subtle geometric background accents, modern sans-serif typography, structured multi-column layouts, professional color palette with 1-2 accent colors plus neutrals",
        SlideStyle::Technical => "technical blueprint or diagram style with clear labeling, arrows, measurement lines, grid backgrounds, high contrast text, minimal color palette (blue, white, accents), engineering-focused aesthetic",
        SlideStyle::Creative => "bold artistic design with vibrant colors, dynamic asymmetric layouts, creative typography mixing, gradient backgrounds, artistic illustrations, expressive visual hierarchy",
        SlideStyle::Infographic => "data visualization focused with charts, graphs, stat cards, icon grids, clear visual hierarchy for information, balanced text and visual elements, professional yet engaging",
        SlideStyle::Educational => "clear instructional design with step-by-step visual flow, numbered sections, friendly illustrations, warm approachable aesthetic, process diagrams, learning-focused with clear progression",
        SlideStyle::PixelArt => "8-bit pixel art style with retro game aesthetic, blocky graphics, nostalgic color palette, pixelated icons and illustrations, chunky geometric elements, playful vintage gaming vibes",
        SlideStyle::Minimalist => "ultra-minimal design with abundant whitespace, single focal points, simple geometry, maximum negative space, elegant simplicity, zen-like clarity, limited color palette",
        SlideStyle::DarkNeon => "dark background with neon glow effects, cyberpunk aesthetic, high contrast design, electric colors on deep black, futuristic atmosphere, glowing accents and borders",
        SlideStyle::HandDrawn => "sketchy illustration style with hand-drawn aesthetic, rough organic lines, warm paper texture, pencil sketch feel, artistic imperfection, doodle borders and accents",
        SlideStyle::Glassmorphism => "frosted glass effect with translucent layers, soft blur backgrounds, modern UI aesthetic, glass-like transparency, backdrop blur effects, ethereal floating card elements",
        SlideStyle::Vintage => "aged-paper aesthetic with muted color palette (beige, brown, soft green), subtle vintage decor like compass or rope motifs, classic serif fonts, nostalgic warm tones",
        SlideStyle::Isometric3d => "isometric 3D illustration with dimensional graphics, depth effects, isometric perspective objects, spatial design with shadows, geometric 3D floating elements",
        SlideStyle::Watercolor => "soft watercolor painting style with flowing colors, artistic bleeding effects, painted texture, gentle brushstrokes, organic color transitions, muted earthy pastels",
        SlideStyle::Newspaper => "editorial print design with bold headlines, column layouts, serif typography zones, black and white with single accent color, newsprint texture, classic journalism aesthetic",
        SlideStyle::FlatDesign => "flat design style with bold solid colors, geometric shapes, no shadows or gradients, clean vector aesthetic, simple iconographic elements, modern minimalism",
        SlideStyle::GradientMesh => "modern gradient mesh with flowing color transitions, abstract fluid backgrounds, mesh gradients with smooth blends, contemporary color combinations, organic flowing shapes",
        SlideStyle::SciFiHud => "futuristic sci-fi HUD interface style with dark backgrounds (#0A0A12), cyan/teal primary accents (#00D4FF), orange secondary highlights (#FF6B35), technical schematics with wireframe diagrams, targeting reticles, data overlays with progress bars and stat displays, glowing edge lines, holographic effects, measurement annotations, modular panel layouts with rounded corners, high-tech aerospace feel",
        SlideStyle::DeepOcean => "nature documentary scientific analysis style with deep blue-gray oceanic backgrounds (#1A2A3A to #0D1B2A gradient), teal/cyan accent colors (#00CED1), white text with subtle glow, anatomical diagrams, scientific data visualizations with comparison charts, measurement callouts with labeled arrows, documentary-style layouts, educational yet cinematic atmosphere",
        SlideStyle::DevConsole => "developer console and software architecture style with very dark charcoal backgrounds (#0D0D0D to #1A1A1A), gold/amber primary accent color (#FFB800, #E6A800), white and light gray secondary text, system diagrams with data flow arrows, modular architecture blocks, subtle grid or matrix patterns, organized hierarchical layouts, warm gold highlights on dark surfaces",
        SlideStyle::NeonScientific => "cinematic scientific visualization style with very dark backgrounds (#000000 to #0A0F1A), glowing bioluminescent elements in cyan/teal (#00D4FF, #00CED1), warm orange/amber energy accents (#FF6B35, #FFB800), particle effects and flowing energy waves, holographic technical diagrams, high-contrast neon lighting, anatomical or molecular structures with glowing edges, cinematic depth with layered composition",
    }
}

/// Creative identity handed to the model for each style.
pub fn style_persona(style: SlideStyle) -> &'static str {
    match style {
        SlideStyle::Professional => "You are a senior corporate designer at a Fortune 500 company. Your presentations close billion-dollar deals. Every element exudes trust, competence, and sophistication.",
        SlideStyle::Technical => "You are a lead engineer creating mission briefings. Your diagrams explain complex systems with precision. Technical accuracy meets visual clarity.",
        SlideStyle::Creative => "You are an award-winning art director at a top creative agency. Bold, unexpected, visually striking: you push boundaries.",
        SlideStyle::Infographic => "You are a data visualization expert at a major newspaper. Your infographics go viral. Complex data becomes beautiful, digestible visual stories.",
        SlideStyle::Educational => "You are a curriculum designer for an online learning platform. Learning should be engaging and clear. Your slides make complex topics accessible and memorable.",
        SlideStyle::PixelArt => "You are a pixel artist who worked on iconic 8-bit games. Every pixel is intentional, every color evokes retro gaming magic.",
        SlideStyle::Minimalist => "You are a master of restraint in the tradition of Dieter Rams. Less is more. Every element earns its place. Whitespace is your primary tool.",
        SlideStyle::DarkNeon => "You are a concept artist for cyberpunk films and games. Neon cuts through darkness. Futuristic, edgy, electric.",
        SlideStyle::HandDrawn => "You are an illustrator whose sketchbook work went viral. Imperfection is charming. Warmth and human touch in every line.",
        SlideStyle::Glassmorphism => "You are a UI designer working on spatial computing interfaces. Frosted glass, depth, and light. Your interfaces feel like floating in clouds.",
        SlideStyle::Vintage => "You are a designer who restores classic print advertisements. Nostalgia, warmth, timeless elegance. The past reimagined for today.",
        SlideStyle::Isometric3d => "You are a 3D artist creating iconic app illustrations. Depth, dimension, and playful perspective. Objects float in perfect isometric harmony.",
        SlideStyle::Watercolor => "You are a fine artist whose watercolor work hangs in galleries. Soft edges, organic flow, dreamy atmosphere.",
        SlideStyle::Newspaper => "You are an editor at a legendary newspaper designing front pages. Bold headlines, tight columns, ink on paper.",
        SlideStyle::FlatDesign => "You are a product designer building a material design system. Clean vectors, bold colors, no shadows. Modern simplicity at its finest.",
        SlideStyle::GradientMesh => "You are a designer creating album covers for top artists. Flowing gradients, abstract beauty, contemporary art.",
        SlideStyle::SciFiHud => "You are the UI designer for blockbuster science fiction films. Holographic interfaces, tactical displays, aerospace precision.",
        SlideStyle::DeepOcean => "You are a graphics artist creating nature documentaries. Scientific accuracy meets cinematic beauty.",
        SlideStyle::DevConsole => "You are a senior developer designing technical documentation. Dark mode, syntax highlighting, clean architecture. Engineers will appreciate every detail.",
        SlideStyle::NeonScientific => "You are a VFX artist creating science visualizations for documentaries. Bioluminescent, dramatic, cinematic. Science made spectacular.",
    }
}

pub fn palette_description(palette: ColorPalette) -> &'static str {
    match palette {
        ColorPalette::Auto => "harmonious colors that complement the visual style and content mood, typically 2-3 accent colors plus neutrals",
        ColorPalette::CorporateBlue => "navy blue primary (#1E3A5F), light blue accents (#4A90D9), crisp white backgrounds, silver highlights - professional and trustworthy",
        ColorPalette::ModernPurple => "deep purple primary (#6B21A8), violet accents (#8B5CF6), soft lavender highlights, white backgrounds - innovative and creative",
        ColorPalette::NatureGreen => "forest green primary (#166534), sage accents (#86EFAC), warm cream backgrounds, earthy brown details - organic and sustainable",
        ColorPalette::WarmOrange => "burnt orange primary (#EA580C), coral accents (#FB923C), cream backgrounds, deep brown text - energetic and warm",
        ColorPalette::ElegantMonochrome => "black text, white backgrounds, sophisticated grays for panels and accents, subtle texture - timeless and elegant",
        ColorPalette::VibrantGradient => "bold gradients from cyan to magenta, electric accent colors, dynamic color transitions - modern and energetic",
        ColorPalette::OceanTeal => "deep teal primary (#0D9488), aquamarine accents (#5EEAD4), seafoam highlights, sandy beige backgrounds - calm and refreshing",
        ColorPalette::SunsetPink => "hot pink primary (#EC4899), peach accents (#FBBF24), soft coral highlights, warm cream backgrounds - playful and energetic",
        ColorPalette::ForestEarth => "deep brown primary (#78350F), terracotta accents (#D97706), olive green highlights, cream backgrounds - grounded and natural",
        ColorPalette::RoyalGold => "royal blue primary (#1E40AF), gold accents (#F59E0B), ivory backgrounds, deep navy text - prestigious and luxurious",
        ColorPalette::ArcticFrost => "ice blue primary (#38BDF8), silver accents (#94A3B8), white backgrounds, pale lavender highlights - cool and fresh",
        ColorPalette::NeonNight => "electric purple (#A855F7), neon green accents (#22C55E), hot pink highlights, dark backgrounds - bold and futuristic",
    }
}

pub fn layout_description(layout: LayoutStructure) -> &'static str {
    match layout {
        LayoutStructure::VisualHeavy => "large hero visuals taking 60-70% of space, minimal text areas, icon-centric design with dramatic imagery, strong visual impact, illustration-forward layouts",
        LayoutStructure::TextHeavy => "text-focused with 60-70% space for content, multi-column text layouts, bullet point sections, supporting graphics in corners or margins, subtle backgrounds",
        LayoutStructure::Balanced => "equal visual and text space, dual-column layouts with left-visual right-text or vice versa, versatile 50/50 compositions, flexible zones for various content",
    }
}

pub fn aspect_ratio_description(ratio: AspectRatio) -> &'static str {
    match ratio {
        AspectRatio::Widescreen => "16:9 widescreen presentation format",
        AspectRatio::Standard => "4:3 traditional presentation format",
        AspectRatio::Square => "1:1 square format",
        AspectRatio::Portrait => "9:16 vertical portrait format",
    }
}

/// Base identity of the presenter for each render style, used when no persona was generated.
pub fn render_style_description(render: RenderStyle) -> &'static str {
    match render {
        RenderStyle::Pixar => "A friendly 3D animated presenter character in Pixar/Disney animation style.\nCORE IDENTITY: Approachable adult, expressive features, warm smile, slightly exaggerated proportions (large expressive eyes, rounded features). Dynamic posture with professional bearing.\nCONSISTENT ELEMENTS: Same facial structure, hair style, and body proportions across ALL slides.\nWARDROBE ADAPTS: Lab coat for science, business casual for corporate, casual for creative topics.\nEXPRESSIONS: Enthusiastic, confident, engaged - varies with slide content tone.",
        RenderStyle::Real => "A photorealistic human presenter with professional presence.\nCORE IDENTITY: Professional adult with polished appearance, genuine warm expression, trustworthy features. Well-groomed, confident stance.\nCONSISTENT ELEMENTS: Same face, hair, skin tone, and build across ALL slides.\nWARDROBE ADAPTS: Suit for formal, smart casual for creative, lab coat for technical/scientific.\nEXPRESSIONS: Professional, authoritative yet approachable - varies with slide tone.",
        RenderStyle::Anime => "A dynamic presenter character in Japanese animation style.\nCORE IDENTITY: Stylized adult with large expressive eyes, simplified nose, dynamic hair. Energetic poses with expressive gestures.\nCONSISTENT ELEMENTS: Same face design, hair color/style, and character proportions across ALL slides.\nWARDROBE ADAPTS: Uniform, business attire, or casual depending on topic context.\nEXPRESSIONS: Exaggerated anime expressions - sparkly eyes for excitement, sweat drops for concern, confident smirks for emphasis.",
        RenderStyle::Cartoon => "A vibrant 2D Western cartoon-style presenter character.\nCORE IDENTITY: Exaggerated cartoon proportions, bold outlines, expressive rubbery features.\nCONSISTENT ELEMENTS: Same character design, color scheme, and recognizable silhouette across ALL slides.\nWARDROBE ADAPTS: Simple iconic outfits that read clearly at any size.\nEXPRESSIONS: Broad cartoon expressions with squash and stretch, exaggerated reactions.",
        RenderStyle::Sketch => "A hand-drawn sketch-style presenter character.\nCORE IDENTITY: Loose pencil/ink line art, artistic imperfection, warm organic feel, like a concept sketch come to life.\nCONSISTENT ELEMENTS: Same sketchy line style, character proportions, and recognizable features across ALL slides.\nWARDROBE ADAPTS: Suggested through loose line work rather than detailed rendering.\nEXPRESSIONS: Expressive through gestural lines, rough but readable emotional states.",
        RenderStyle::Chibi => "A cute chibi-style presenter character with exaggerated proportions.\nCORE IDENTITY: Small body, large head (3:1 ratio), oversized expressive eyes, simplified adorable features. Kawaii aesthetic with playful energy.\nCONSISTENT ELEMENTS: Same chibi proportions, face design, and color palette across ALL slides.\nWARDROBE ADAPTS: Simplified cute versions of appropriate attire.\nEXPRESSIONS: Big sparkly eyes, tiny mouth expressions, blush marks for emotion.",
        RenderStyle::LowPoly => "A geometric low-polygon 3D presenter character.\nCORE IDENTITY: Angular faceted geometry, clearly visible polygon edges, stylized 3D aesthetic.\nCONSISTENT ELEMENTS: Same polygon structure, face geometry, and color scheme across ALL slides.\nWARDROBE ADAPTS: Geometric simplified clothing with flat shaded surfaces.\nEXPRESSIONS: Subtle expressions through geometry shifts, readable but stylized.",
        RenderStyle::Mascot => "A friendly corporate mascot-style presenter character.\nCORE IDENTITY: Approachable branded character, simplified friendly features, iconic recognizable design.\nCONSISTENT ELEMENTS: Same mascot design, signature colors, and recognizable silhouette across ALL slides.\nWARDROBE ADAPTS: Minimal clothing, relies on character design and props.\nEXPRESSIONS: Friendly approachable expressions, always positive and engaging.",
    }
}

/// Empty for `Unspecified`: the model picks whatever fits.
pub fn gender_modifier(gender: CharacterGender) -> &'static str {
    match gender {
        CharacterGender::Unspecified => "",
        CharacterGender::Male => "The character is MALE with masculine features and presentation.",
        CharacterGender::Female => "The character is FEMALE with feminine features and presentation.",
    }
}

/// How a render style bends to a slide style. Rows follow `RenderStyle::ALL` order.
pub fn character_style_adaptation(style: SlideStyle, render: RenderStyle) -> &'static str {
    adaptation_row(style)[render as usize]
}

fn adaptation_row(style: SlideStyle) -> [&'static str; 8] {
    match style {
        SlideStyle::Professional => [
            "Polished 3D Pixar animation with professional studio lighting, corporate-appropriate attire, clean rendering with soft shadows.",
            "Photorealistic with professional studio lighting, tailored business attire, corporate headshot quality, clean backdrop integration.",
            "Professional anime style with clean lines, business attire, polished presentation, subtle expressions.",
            "Clean cartoon style with professional colors, business-appropriate design, polished but friendly.",
            "Refined pencil sketch style, professional subject matter, clean confident lines, business context.",
            "Professional chibi with business attire, cute but competent appearance, corporate-friendly kawaii.",
            "Clean geometric 3D with professional lighting, business-appropriate polygon design, modern tech aesthetic.",
            "Polished corporate mascot style, professional branding aesthetic, trustworthy friendly design.",
        ],
        SlideStyle::Technical => [
            "Precise 3D Pixar rendering with clean edges, technical/engineering attire (lab coat, safety gear), blueprint-compatible color grading.",
            "Photorealistic with technical styling, precise lighting, professional technical attire (lab coat, engineering vest).",
            "Technical anime style with precise lines, lab coat or engineer attire, focused analytical expression.",
            "Technical cartoon with blueprint aesthetics, precise outlines, engineering-themed design.",
            "Technical sketch style like engineering drawings, precise controlled lines, schematic feel.",
            "Technical chibi with lab coat, small tools or equipment, cute engineer aesthetic.",
            "Precise geometric rendering, technical color palette, engineering-grade polygon design.",
            "Technical mascot with engineering props, precise friendly design, tech company aesthetic.",
        ],
        SlideStyle::Creative => [
            "Vibrant 3D Pixar animation with dynamic pose, bold color accents, creative attire, expressive artistic lighting.",
            "Photorealistic with creative artistic lighting, creative casual attire, dynamic energetic presence.",
            "Expressive anime style with dynamic poses, artistic flair, creative colorful design.",
            "Bold expressive cartoon with vibrant colors, dynamic poses, artistic freedom.",
            "Loose expressive sketch style, artistic gestural lines, creative energy.",
            "Playful creative chibi with artistic props, colorful expressive design.",
            "Artistic low-poly with bold colors, creative geometric interpretation.",
            "Creative mascot with artistic flair, playful dynamic design, bold colors.",
        ],
        SlideStyle::Infographic => [
            "Clean simplified 3D Pixar style suited for data visualization context, professional styling, friendly approachable rendering.",
            "Clean professional rendering suited for data visualization, approachable presence.",
            "Clean anime style optimized for infographic integration, simple readable design.",
            "Simple clean cartoon for data context, clear readable design.",
            "Clean sketch style that complements data visualization, simple lines.",
            "Simple chibi design for infographic friendliness, data-presenter aesthetic.",
            "Clean geometric design for data visualization, simple readable forms.",
            "Friendly data mascot, infographic-compatible design, approachable presenter.",
        ],
        SlideStyle::Educational => [
            "Warm friendly 3D Pixar animation with approachable lighting, teacher/instructor attire, engaging welcoming expression.",
            "Warm approachable photorealistic rendering, friendly lighting, educator styling, inviting presence.",
            "Friendly anime teacher style, warm approachable design, encouraging expressions.",
            "Warm friendly cartoon teacher aesthetic, approachable educational design.",
            "Warm sketchy illustration style, friendly educational aesthetic.",
            "Adorable teacher chibi, educational props, encouraging kawaii presence.",
            "Friendly geometric design, warm educational colors, approachable forms.",
            "Educational mascot style, friendly learning companion, encouraging presence.",
        ],
        SlideStyle::PixelArt => [
            "Transform 3D Pixar to 8-bit pixel art style: blocky geometry, limited color palette, pixelated edges, nostalgic sprite-like appearance.",
            "Transform to pixel art avatar: recognizable features in chunky pixels, retro game character aesthetic.",
            "Anime character as pixel sprite, retro game aesthetic, limited color palette.",
            "Cartoon as pixel art sprite, classic game aesthetic, chunky pixels.",
            "Sketch style rendered in pixels, hand-drawn feel in blocky form.",
            "Chibi pixel sprite, cute retro game character, limited colors.",
            "Low-poly merged with pixel aesthetic, geometric retro style.",
            "Mascot as pixel game character, retro sprite aesthetic.",
        ],
        SlideStyle::Minimalist => [
            "Simplified minimal 3D Pixar rendering: clean forms, reduced detail, zen-like simplicity, essential features only.",
            "Minimal photorealistic treatment: simplified clean rendering, essential details only, quiet presence.",
            "Minimal anime with reduced lines, essential features, clean simplicity.",
            "Ultra-simplified cartoon, essential shapes only, minimal design.",
            "Minimal sketch with few essential lines, zen-like simplicity.",
            "Ultra-simple chibi, minimal features, essential cute forms.",
            "Extremely simplified geometry, minimal polygon count, essential forms.",
            "Simplified mascot silhouette, essential recognizable features only.",
        ],
        SlideStyle::DarkNeon => [
            "Cyberpunk neon Pixar aesthetic: dramatic rim lighting in electric colors (cyan, magenta), glowing edge highlights, dark silhouette with vibrant glow.",
            "Photorealistic with neon lighting: dramatic electric highlights, glowing rim lights, cyberpunk atmosphere.",
            "Neon anime aesthetic with glowing outlines, cyberpunk color scheme, electric highlights.",
            "Neon cartoon style with glowing edges, cyberpunk colors, dark background.",
            "Neon-outlined sketch on dark background, glowing line effects.",
            "Cyberpunk chibi with neon glow effects, electric color accents.",
            "Neon-lit geometric form, glowing polygon edges, cyberpunk aesthetic.",
            "Neon cyberpunk mascot with glowing accents, futuristic design.",
        ],
        SlideStyle::HandDrawn => [
            "Transform Pixar to sketchy hand-drawn style: pencil/charcoal lines, organic imperfect strokes, warm paper texture feel.",
            "Transform to illustrated pencil sketch: hand-drawn portrait style, artistic linework, warm organic aesthetic.",
            "Hand-drawn anime sketch style, loose gestural lines, artistic feel.",
            "Loose sketchy cartoon, hand-drawn charm, organic imperfect lines.",
            "Enhanced sketch aesthetic, artistic pencil work, charcoal textures.",
            "Hand-drawn chibi sketch, cute doodle style, warm organic lines.",
            "Geometric forms rendered in sketch style, hand-drawn angular lines.",
            "Hand-drawn mascot illustration, sketchy friendly design.",
        ],
        SlideStyle::Glassmorphism => [
            "3D Pixar with frosted glass overlay: character visible through translucent panels, soft blur effects, ethereal glass-like framing.",
            "Photorealistic integrated with glass effects: presenter behind frosted panels, modern translucent aesthetic.",
            "Anime character with glass overlay effects, frosted UI integration.",
            "Cartoon with glassmorphism framing, translucent panel integration.",
            "Sketch style behind frosted glass effects, ethereal layering.",
            "Chibi with glass UI elements, frosted kawaii aesthetic.",
            "Geometric form with glass effects, translucent modern integration.",
            "Mascot with glassmorphism UI, modern frosted aesthetic.",
        ],
        SlideStyle::Vintage => [
            "Transform Pixar to vintage aesthetic: muted sepia-toned colors, aged paper texture overlay, nostalgic warm tones.",
            "Apply vintage photographic treatment: sepia tones, aged photo aesthetic, nostalgic warm coloring.",
            "Vintage anime style, muted retro colors, classic aged aesthetic.",
            "Retro vintage cartoon, classic animation feel, aged color palette.",
            "Aged sketch on vintage paper, sepia tones, nostalgic feel.",
            "Vintage chibi with retro colors, classic cute aesthetic.",
            "Retro-styled geometric design, vintage color palette.",
            "Classic vintage mascot style, retro branding aesthetic.",
        ],
        SlideStyle::Isometric3d => [
            "Render Pixar in isometric 3D perspective: character at isometric angle, dimensional shading, spatial depth integration.",
            "Transform to stylized isometric illustration: 3D isometric rendering, matching spatial perspective.",
            "Isometric anime character, matching dimensional perspective.",
            "Isometric cartoon design, 3D spatial integration.",
            "Isometric sketch style, dimensional line work.",
            "Isometric chibi, cute 3D perspective matching.",
            "Perfect isometric low-poly, geometric 3D harmony.",
            "Isometric mascot design, spatial brand integration.",
        ],
        SlideStyle::Watercolor => [
            "Transform Pixar to soft watercolor painting: gentle color bleeds, artistic brushwork texture, painted aesthetic with soft edges.",
            "Transform to watercolor portrait: soft painted textures, artistic color bleeding, gentle brushwork.",
            "Watercolor anime style, soft painted edges, artistic color washes.",
            "Watercolor cartoon, painted texture, soft artistic edges.",
            "Watercolor sketch, loose painted linework, artistic bleeding.",
            "Watercolor chibi, soft painted kawaii, gentle colors.",
            "Watercolor treatment on geometric forms, soft painted polygons.",
            "Watercolor mascot illustration, soft painted branding.",
        ],
        SlideStyle::Newspaper => [
            "Transform Pixar to editorial illustration: high contrast black and white with accent color, newsprint texture, bold graphic treatment.",
            "Transform to editorial graphic: high contrast photographic treatment, newspaper photo aesthetic.",
            "Editorial anime style, high contrast, newspaper graphic aesthetic.",
            "Editorial cartoon, bold newspaper style, high contrast.",
            "Editorial sketch illustration, newspaper graphic style.",
            "Editorial chibi, newspaper-friendly graphic design.",
            "High contrast geometric design, editorial graphic style.",
            "Editorial mascot, newspaper-style brand illustration.",
        ],
        SlideStyle::FlatDesign => [
            "Simplify Pixar to flat design: bold solid colors, no shadows or gradients, clean vector-style silhouette.",
            "Transform to flat illustration: simplified geometric forms, solid colors, clean vector silhouette.",
            "Flat anime style, bold colors, no gradients, clean design.",
            "Flat cartoon design, solid colors, geometric simplification.",
            "Flat vector style with sketch influence, clean solid forms.",
            "Flat chibi design, bold solid colors, simple geometry.",
            "Flat-shaded low-poly, solid color polygons, clean design.",
            "Flat mascot design, solid brand colors, clean vector style.",
        ],
        SlideStyle::GradientMesh => [
            "3D Pixar with flowing gradient aesthetic: smooth color transitions, mesh gradient coloring, contemporary artistic style.",
            "Photorealistic with gradient overlay enhancement: smooth color transitions, contemporary gradient aesthetic.",
            "Anime with gradient mesh coloring, flowing color transitions.",
            "Cartoon with smooth gradient fills, modern color blends.",
            "Sketch with gradient color washes, artistic blends.",
            "Chibi with gradient mesh coloring, smooth kawaii colors.",
            "Gradient-filled polygons, smooth color mesh on geometry.",
            "Mascot with gradient styling, modern color transitions.",
        ],
        SlideStyle::SciFiHud => [
            "Render Pixar as holographic projection: cyan/teal translucent glow, scanline effects, HUD targeting brackets, futuristic digital presence.",
            "Transform to holographic avatar: semi-transparent glowing form, digital scanlines, HUD overlay elements.",
            "Holographic anime character, digital HUD integration, sci-fi glow.",
            "Holographic cartoon, digital projection aesthetic, HUD elements.",
            "Digital hologram sketch, glowing lines, sci-fi overlay.",
            "Holographic chibi, cute digital projection, HUD kawaii.",
            "Holographic geometric form, glowing polygon edges, HUD integration.",
            "Holographic mascot projection, futuristic brand presence.",
        ],
        SlideStyle::DeepOcean => [
            "3D Pixar with underwater documentary aesthetic: blue-teal color grading, bioluminescent edge glow, depth atmosphere.",
            "Apply underwater documentary treatment: blue color grading, documentary lighting, oceanic atmosphere.",
            "Underwater anime style, blue-teal color grading, bioluminescent accents.",
            "Underwater cartoon aesthetic, ocean color palette, depth effects.",
            "Underwater sketch style, blue-toned linework, ocean atmosphere.",
            "Ocean chibi, underwater kawaii, bioluminescent cute accents.",
            "Underwater geometric design, ocean blue polygons, depth lighting.",
            "Ocean mascot style, underwater brand presence, marine aesthetic.",
        ],
        SlideStyle::DevConsole => [
            "3D Pixar with developer aesthetic: dark mode color scheme, gold/amber accent highlights (#FFB800), technical precision.",
            "Apply developer dark theme treatment: dark mode aesthetic, gold accent lighting, technical presentation style.",
            "Developer anime style, dark theme colors, amber code accents.",
            "Dev cartoon style, dark mode aesthetic, terminal colors.",
            "Developer sketch, dark background, amber highlight lines.",
            "Developer chibi, dark theme kawaii, code aesthetic.",
            "Dark mode geometric design, amber accent polygons.",
            "Developer mascot, dark theme brand, tech company aesthetic.",
        ],
        SlideStyle::NeonScientific => [
            "3D Pixar with bioluminescent sci-fi aesthetic: glowing cyan/teal edges (#00D4FF), dramatic spot lighting, particle effects.",
            "Apply sci-fi scientific treatment: dramatic neon lighting, bioluminescent highlights, cinematic presentation.",
            "Neon scientific anime, bioluminescent glow, dramatic sci-fi lighting.",
            "Neon scientific cartoon, glowing effects, dramatic presentation.",
            "Neon-lit scientific sketch, glowing line effects, dramatic atmosphere.",
            "Neon scientific chibi, glowing kawaii, bioluminescent cute.",
            "Bioluminescent geometric form, glowing polygon edges, scientific aesthetic.",
            "Neon scientific mascot, glowing brand presence, dramatic lighting.",
        ],
    }
}
