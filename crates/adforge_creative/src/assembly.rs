//! Request assembly: folding brand assets and reference images into a
//! single multimodal generation request.

use crate::prompts::{refinement_prompt, system_prompt, user_prompt};
use adforge_core::{
    BrandDna, CampaignBrief, DataUrl, GenerateRequest, Input, MediaSource, Message,
    RefinementRequest, ReferenceImages, Role,
};
use tracing::debug;

/// Convert labeled data URLs into alternating label/image input pairs.
///
/// Each present asset contributes a `[Label]:` text input followed by its
/// image block. Invalid data URLs are skipped rather than failing the run.
fn image_blocks(brand: &BrandDna, refs: &ReferenceImages) -> Vec<Input> {
    let assets: [(&str, Option<&String>); 5] = [
        ("Brand Logo", brand.assets().logo().as_ref()),
        ("Hero Shot", brand.assets().hero_shot().as_ref()),
        ("Brand Mascot", brand.assets().mascot().as_ref()),
        ("Reference Model", refs.model().as_ref()),
        ("Reference Product", refs.product_variant().as_ref()),
    ];

    let mut blocks = Vec::new();
    for (label, data_url) in assets {
        let Some(raw) = data_url else { continue };
        let Some(parsed) = DataUrl::parse(raw) else {
            debug!(label = label, "Skipping asset with invalid data URL");
            continue;
        };
        blocks.push(Input::Text(format!("[{label}]:")));
        blocks.push(Input::Image {
            mime: Some(parsed.mime().clone()),
            source: MediaSource::Base64(parsed.data().clone()),
        });
    }
    blocks
}

fn assemble(brand: &BrandDna, refs: &ReferenceImages, prompt_text: String) -> GenerateRequest {
    let mut content = image_blocks(brand, refs);
    content.push(Input::Text(prompt_text));

    GenerateRequest {
        messages: vec![Message {
            role: Role::User,
            content,
        }],
        system: Some(system_prompt(brand)),
        max_tokens: None,
        temperature: None,
        model: None,
    }
}

/// Assemble the request for a fresh generation run.
pub fn assemble_generate(
    brand: &BrandDna,
    brief: &CampaignBrief,
    refs: &ReferenceImages,
) -> GenerateRequest {
    assemble(brand, refs, user_prompt(brief))
}

/// Assemble the request for a refinement run.
pub fn assemble_refine(
    brand: &BrandDna,
    brief: &CampaignBrief,
    refs: &ReferenceImages,
    refinement: &RefinementRequest,
) -> GenerateRequest {
    assemble(
        brand,
        refs,
        refinement_prompt(brief, refinement.previous(), refinement.feedback()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::{BrandAssets, Objective, Platform, SophisticationLevel};

    fn brand_with_logo() -> BrandDna {
        BrandDna::builder()
            .name("Acme")
            .positioning("p")
            .brand_personality("bp")
            .target_audience_primary("ta")
            .audience_sophistication_level(SophisticationLevel::Aware)
            .visual_style("vs")
            .assets(BrandAssets::new(
                Some("data:image/png;base64,iVBOR".to_string()),
                None,
                Some("not-a-data-url".to_string()),
            ))
            .build()
            .unwrap()
    }

    fn brief() -> CampaignBrief {
        CampaignBrief::builder()
            .product_name("Widget")
            .product_description("d")
            .audience_segment("s")
            .emotional_angle("a")
            .offer("o")
            .platform(Platform::InstagramFeed)
            .objective(Objective::Awareness)
            .build()
            .unwrap()
    }

    #[test]
    fn assets_become_labeled_image_pairs() {
        let refs = ReferenceImages::new(Some("data:image/jpeg;base64,/9j".to_string()), None);
        let request = assemble_generate(&brand_with_logo(), &brief(), &refs);

        let content = &request.messages[0].content;
        // logo pair + reference model pair + prompt text; mascot is invalid
        // and contributes nothing
        assert_eq!(content.len(), 5);
        assert_eq!(content[0], Input::Text("[Brand Logo]:".to_string()));
        assert!(matches!(
            &content[1],
            Input::Image {
                mime: Some(mime),
                source: MediaSource::Base64(data)
            } if mime == "image/png" && data == "iVBOR"
        ));
        assert_eq!(content[2], Input::Text("[Reference Model]:".to_string()));
        assert!(matches!(&content[4], Input::Text(text) if text.contains("## CAMPAIGN BRIEF")));
    }

    #[test]
    fn system_prompt_travels_in_its_own_field() {
        let request = assemble_generate(&brand_with_logo(), &brief(), &ReferenceImages::default());
        assert!(request.system.as_deref().unwrap().contains("Acme"));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
    }

    #[test]
    fn no_assets_yields_prompt_only_content() {
        let brand = BrandDna::builder()
            .name("Bare")
            .positioning("p")
            .brand_personality("bp")
            .target_audience_primary("ta")
            .audience_sophistication_level(SophisticationLevel::Unaware)
            .visual_style("vs")
            .build()
            .unwrap();

        let request = assemble_generate(&brand, &brief(), &ReferenceImages::default());
        assert_eq!(request.messages[0].content.len(), 1);
    }
}
