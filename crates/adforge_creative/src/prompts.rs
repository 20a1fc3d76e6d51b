//! Prompt templates for creative package generation.
//!
//! Three templates exist: the brand persona (system prompt), the campaign
//! prompt with the JSON output contract, and the refinement prompt that
//! replays the previous package with section-scoped corrections.

use adforge_core::{BrandDna, CampaignBrief, CreativePackage, SectionFeedback};
use std::fmt::Write;

/// Render a string list for prompt embedding, with a fallback for empty lists.
fn join_or(items: &[String], separator: &str, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(separator)
    }
}

/// The brand persona sent as the system prompt.
pub fn system_prompt(brand: &BrandDna) -> String {
    format!(
        "You are a world-class performance marketing creative director embodying the {name} brand.

## YOUR BRAND IDENTITY
- Positioning: {positioning}
- Personality: {personality}
- Tone of Voice: {tone}
- Primary Audience: {audience}
- Audience Sophistication: {sophistication}
- Audience Pains: {pains}
- Audience Desires: {desires}
- Differentiators: {differentiators}
- Competitors: {competitors}

## COPY RULES (ABSOLUTE)
- FORBIDDEN words — never use: {forbidden}
- POWER words — weave in naturally: {power}
- Approved CTAs: {ctas}

## VISUAL GUARDRAILS
- Visual style: {visual_style}
- Colors: {colors}
- Imagery don'ts: {imagery_dont}

You have deep expertise in direct response advertising, consumer psychology, and platform-native creative strategy. Every output must drive high ROAS.

You MUST respond with valid JSON only — no markdown fences, no prose outside the JSON structure.",
        name = brand.name(),
        positioning = brand.positioning(),
        personality = brand.brand_personality(),
        tone = brand.tone_of_voice().join(", "),
        audience = brand.target_audience_primary(),
        sophistication = brand.audience_sophistication_level(),
        pains = brand.audience_pains().join(" | "),
        desires = brand.audience_desires().join(" | "),
        differentiators = brand.differentiators().join(" | "),
        competitors = brand.competitor_names().join(", "),
        forbidden = join_or(brand.forbidden_words(), ", ", "none"),
        power = join_or(brand.power_words(), ", ", "none"),
        ctas = brand.cta().join(", "),
        visual_style = brand.visual_style(),
        colors = brand.primary_colors().join(", "),
        imagery_dont = join_or(brand.imagery_dont(), " | ", "none"),
    )
}

/// The campaign brief section shared by the generation and refinement prompts.
fn brief_section(brief: &CampaignBrief) -> String {
    let size = brief.platform().ad_size();
    let context = if brief.additional_context().is_empty() {
        "None"
    } else {
        brief.additional_context()
    };

    format!(
        "## CAMPAIGN BRIEF
- Product: {product}
- Description: {description}
- Audience Segment: {segment}
- Emotional Angle: {angle}
- Offer: {offer}
- Platform: {label}
- Platform Dimensions: {width}×{height}px
- Safe Zone: {safe_zone}
- Objective: {objective}
- Additional Context: {context}",
        product = brief.product_name(),
        description = brief.product_description(),
        segment = brief.audience_segment(),
        angle = brief.emotional_angle(),
        offer = brief.offer(),
        label = size.label,
        width = size.width,
        height = size.height,
        safe_zone = size.safe_zone_description,
        objective = brief.objective(),
        context = context,
    )
}

/// The campaign prompt: brief plus the exact JSON contract for the package.
pub fn user_prompt(brief: &CampaignBrief) -> String {
    let size = brief.platform().ad_size();

    format!(
        r#"Generate a complete ad creative package for the following campaign.

{brief_section}

## OUTPUT FORMAT
Return a JSON object with this exact structure:

{{
  "hooks": [
    {{
      "text": "hook text — max 125 characters, punchy, scroll-stopping",
      "technique": "e.g. Pattern Interrupt | Curiosity Gap | Social Proof | Bold Claim | Direct Question",
      "psychologicalTrigger": "e.g. Fear of Missing Out | Identity | Status | Curiosity | Loss Aversion"
    }}
  ],
  "adCopy": {{
    "problemAgitateCTA": {{
      "frameworkName": "Problem-Agitate-CTA",
      "headline": "bold, benefit-driven headline",
      "body": "2–3 sentences: name the pain, agitate it, then introduce the solution",
      "cta": "action-oriented CTA from approved list"
    }},
    "comparison": {{
      "frameworkName": "Before/After Comparison",
      "headline": "contrast-driven headline",
      "body": "2–3 sentences showing transformation",
      "cta": "action-oriented CTA"
    }},
    "mythBust": {{
      "frameworkName": "Myth Bust",
      "headline": "\"You don't need X to get Y\" style headline",
      "body": "2–3 sentences busting the myth and offering truth",
      "cta": "action-oriented CTA"
    }}
  }},
  "imagePrompts": [
    {{
      "purpose": "hero",
      "prompt": "Detailed prompt: visual style, subject, lighting, composition, mood, color palette. Must reflect brand visual style.",
      "negativePrompt": "What to avoid — stock photo aesthetics, competing brand colors, forbidden imagery",
      "aspectRatio": "{aspect}"
    }},
    {{
      "purpose": "lifestyle",
      "prompt": "Lifestyle scene: environment, emotion, subject activity, natural lighting, authentic feel",
      "negativePrompt": "Overproduced, staged, corporate, stock-photo feel",
      "aspectRatio": "{aspect}"
    }},
    {{
      "purpose": "text_overlay",
      "prompt": "Clean, minimal background optimised for text overlay. Simple gradient or texture. Brand colors. Breathing room.",
      "negativePrompt": "Busy patterns, faces, text in image, distracting elements",
      "aspectRatio": "{aspect}"
    }}
  ],
  "layoutSpec": {{
    "platformDimensions": "{width}×{height}px",
    "safeZone": "{safe_zone}",
    "textHierarchy": [
      "1. Hook — placement, size, weight, color",
      "2. Sub-headline — placement and style",
      "3. Body copy — placement and style",
      "4. CTA button — placement, size, color"
    ],
    "ctaPlacement": "Specific placement guidance for {label}",
    "colorUsage": "How to apply brand colors to this specific layout",
    "moodboardKeywords": ["keyword1", "keyword2", "keyword3", "keyword4", "keyword5"]
  }},
  "abVariants": [
    {{
      "variantId": "A",
      "hypothesis": "Testing X because we believe Y audience responds to Z",
      "hook": "Variant A hook — full text",
      "differentiator": "What makes this variant structurally different"
    }},
    {{
      "variantId": "B",
      "hypothesis": "Testing X because we believe Y audience responds to Z",
      "hook": "Variant B hook — full text",
      "differentiator": "What makes this variant structurally different"
    }},
    {{
      "variantId": "C",
      "hypothesis": "Testing X because we believe Y audience responds to Z",
      "hook": "Variant C hook — full text",
      "differentiator": "What makes this variant structurally different"
    }}
  ]
}}

Generate exactly 5 hooks. Make every word earn its place."#,
        brief_section = brief_section(brief),
        aspect = size.aspect_ratio,
        width = size.width,
        height = size.height,
        safe_zone = size.safe_zone_description,
        label = size.label,
    )
}

/// The refinement prompt: previous package plus section-scoped corrections.
///
/// Empty feedback falls back to the plain campaign prompt — there is
/// nothing to correct, so the request is a regeneration.
pub fn refinement_prompt(
    brief: &CampaignBrief,
    previous: &CreativePackage,
    feedback: &SectionFeedback,
) -> String {
    if feedback.is_empty() {
        return user_prompt(brief);
    }

    let mut sections: Vec<String> = Vec::new();

    if let Some(note) = non_blank(&feedback.hooks) {
        sections.push(format!("HOOKS FEEDBACK: {note}"));
    }
    if let Some(note) = non_blank(&feedback.ad_copy) {
        sections.push(format!("AD COPY FEEDBACK: {note}"));
    }
    if let Some(note) = non_blank(&feedback.image_prompts) {
        sections.push(format!("IMAGE PROMPTS FEEDBACK (global): {note}"));
    }
    for (index, note) in &feedback.per_image_feedback {
        if note.trim().is_empty() {
            continue;
        }
        let label = previous
            .image_prompts()
            .get(*index)
            .map(|prompt| prompt.purpose().to_string())
            .unwrap_or_else(|| format!("image {index}"));
        sections.push(format!("IMAGE PROMPT [{label}] FEEDBACK: {note}"));
    }
    if let Some(note) = non_blank(&feedback.layout_spec) {
        sections.push(format!("LAYOUT SPEC FEEDBACK: {note}"));
    }
    if let Some(note) = non_blank(&feedback.ab_variants) {
        sections.push(format!("A/B VARIANTS FEEDBACK: {note}"));
    }

    // The previous package always serializes; fall back to the debug shape
    // rather than panicking if that ever changes.
    let previous_json = serde_json::to_string_pretty(previous)
        .unwrap_or_else(|_| format!("{previous:?}"));

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "You previously generated an ad creative package for this campaign. The user has reviewed it and left specific feedback. Regenerate the ENTIRE output incorporating all corrections.

{brief_section}

## PREVIOUS OUTPUT (for reference)
{previous_json}

## USER FEEDBACK — APPLY ALL OF THIS
{feedback_lines}

Regenerate the full JSON output, addressing every piece of feedback. Keep what worked; fix what didn't. Return the same JSON structure as before. No prose, no markdown fences.",
        brief_section = brief_section(brief),
        previous_json = previous_json,
        feedback_lines = sections.join("\n"),
    );
    prompt
}

fn non_blank(note: &Option<String>) -> Option<&str> {
    note.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::{
        AbVariant, AdCopyBlock, AdCopySet, CreativePackage, Hook, ImagePrompt, ImagePurpose,
        LayoutSpec, Objective, Platform, SophisticationLevel, VariantId,
    };

    fn brand() -> BrandDna {
        BrandDna::builder()
            .name("Acme Coffee")
            .positioning("Specialty coffee without the pretension")
            .brand_personality("Warm, blunt")
            .target_audience_primary("Remote workers")
            .audience_sophistication_level(SophisticationLevel::SolutionAware)
            .audience_pains(vec!["Bad office coffee".to_string()])
            .audience_desires(vec!["A better morning".to_string()])
            .forbidden_words(vec!["artisanal".to_string(), "curated".to_string()])
            .cta(vec!["Shop Now".to_string()])
            .visual_style("Natural light, matte tones")
            .primary_colors(vec!["#2B1D16".to_string()])
            .build()
            .unwrap()
    }

    fn brief() -> CampaignBrief {
        CampaignBrief::builder()
            .product_name("Midnight Roast")
            .product_description("A dark roast for late shifts")
            .audience_segment("Night-shift nurses")
            .emotional_angle("Relief after a long night")
            .offer("20% off the first bag")
            .platform(Platform::MetaFeedPortrait)
            .objective(Objective::Conversions)
            .build()
            .unwrap()
    }

    fn block() -> AdCopyBlock {
        AdCopyBlock::new("f", "h", "b", "c")
    }

    fn package() -> CreativePackage {
        CreativePackage::new(
            vec![Hook::new("hook", "t", "p")],
            AdCopySet::new(block(), block(), block()),
            vec![
                ImagePrompt::new(ImagePurpose::Hero, "p", "n", "4:5"),
                ImagePrompt::new(ImagePurpose::Lifestyle, "p", "n", "4:5"),
            ],
            LayoutSpec::new("1080×1350px", "sz", vec![], "cta", "colors", vec![]),
            vec![AbVariant::new(VariantId::A, "h", "k", "d")],
        )
    }

    #[test]
    fn system_prompt_embeds_brand_identity() {
        let prompt = system_prompt(&brand());
        assert!(prompt.contains("embodying the Acme Coffee brand"));
        assert!(prompt.contains("FORBIDDEN words — never use: artisanal, curated"));
        assert!(prompt.contains("Audience Sophistication: solution-aware"));
        assert!(prompt.contains("valid JSON only"));
    }

    #[test]
    fn system_prompt_renders_empty_lists_as_none() {
        let prompt = system_prompt(
            &BrandDna::builder()
                .name("Bare")
                .positioning("p")
                .brand_personality("bp")
                .target_audience_primary("ta")
                .audience_sophistication_level(SophisticationLevel::Unaware)
                .visual_style("vs")
                .build()
                .unwrap(),
        );
        assert!(prompt.contains("never use: none"));
        assert!(prompt.contains("weave in naturally: none"));
        assert!(prompt.contains("Imagery don'ts: none"));
    }

    #[test]
    fn user_prompt_carries_platform_geometry() {
        let prompt = user_prompt(&brief());
        assert!(prompt.contains("Platform: Meta Feed — Portrait (4:5)"));
        assert!(prompt.contains("Platform Dimensions: 1080×1350px"));
        assert!(prompt.contains("\"aspectRatio\": \"4:5\""));
        assert!(prompt.contains("Generate exactly 5 hooks."));
    }

    #[test]
    fn user_prompt_defaults_blank_context_to_none() {
        let prompt = user_prompt(&brief());
        assert!(prompt.contains("Additional Context: None"));
    }

    #[test]
    fn empty_feedback_falls_back_to_user_prompt() {
        let prompt = refinement_prompt(&brief(), &package(), &SectionFeedback::default());
        assert_eq!(prompt, user_prompt(&brief()));
    }

    #[test]
    fn refinement_prompt_labels_each_feedback_section() {
        let mut feedback = SectionFeedback {
            hooks: Some("Lean into curiosity".to_string()),
            layout_spec: Some("CTA lower".to_string()),
            ..Default::default()
        };
        feedback
            .per_image_feedback
            .insert(1, "Too staged".to_string());
        feedback.per_image_feedback.insert(7, "n/a".to_string());

        let prompt = refinement_prompt(&brief(), &package(), &feedback);
        assert!(prompt.contains("HOOKS FEEDBACK: Lean into curiosity"));
        assert!(prompt.contains("LAYOUT SPEC FEEDBACK: CTA lower"));
        // index 1 resolves to the prompt's purpose
        assert!(prompt.contains("IMAGE PROMPT [lifestyle] FEEDBACK: Too staged"));
        // index 7 is out of range and falls back to the raw index
        assert!(prompt.contains("IMAGE PROMPT [image 7] FEEDBACK: n/a"));
        assert!(prompt.contains("## PREVIOUS OUTPUT (for reference)"));
        assert!(prompt.contains("Keep what worked; fix what didn't."));
    }

    #[test]
    fn refinement_prompt_embeds_previous_package_json() {
        let feedback = SectionFeedback {
            ad_copy: Some("Shorter headlines".to_string()),
            ..Default::default()
        };
        let prompt = refinement_prompt(&brief(), &package(), &feedback);
        assert!(prompt.contains("\"problemAgitateCTA\""));
    }
}
