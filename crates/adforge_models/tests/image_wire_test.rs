//! Wire-level tests for the image clients against a mock server.

use adforge_core::{ImageProvider, ImageRequest};
use adforge_interface::ImageDriver;
use adforge_models::{FluxClient, GeminiImageClient, IdeogramClient};

fn image_request() -> ImageRequest {
    ImageRequest::builder()
        .prompt("A matte ceramic mug on a windowsill at dawn")
        .negative_prompt("stock photo aesthetics")
        .aspect_ratio("4:5")
        .build()
        .unwrap()
}

#[tokio::test]
async fn ideogram_normalizes_first_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate")
        .match_header("Api-Key", "ideo-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": [{"url": "https://ideogram.ai/img/1.png"}]}"#)
        .create_async()
        .await;

    let client = IdeogramClient::new("ideo-key").with_base_url(server.url());
    let image = client.render(&image_request()).await.unwrap();

    assert_eq!(image.provider(), &ImageProvider::Ideogram);
    assert_eq!(image.url(), "https://ideogram.ai/img/1.png");
    mock.assert_async().await;
}

#[tokio::test]
async fn ideogram_errors_on_empty_data() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let client = IdeogramClient::new("ideo-key").with_base_url(server.url());
    assert!(client.render(&image_request()).await.is_err());
}

#[tokio::test]
async fn flux_routes_to_schnell_without_reference() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/fal-ai/flux/schnell")
        .match_header("Authorization", "Key fal-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"images": [{"url": "https://fal.media/img/1.png"}]}"#)
        .create_async()
        .await;

    let client = FluxClient::new("fal-key").with_base_url(server.url());
    let image = client.render(&image_request()).await.unwrap();

    assert_eq!(image.provider(), &ImageProvider::Flux);
    assert_eq!(image.url(), "https://fal.media/img/1.png");
    mock.assert_async().await;
}

#[tokio::test]
async fn flux_routes_to_image_to_image_with_public_reference() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/fal-ai/flux/dev/image-to-image")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"images": [{"url": "https://fal.media/img/2.png"}]}"#)
        .create_async()
        .await;

    let request = ImageRequest::builder()
        .prompt("restyle this")
        .aspect_ratio("1:1")
        .reference_image(Some("https://example.com/ref.png".to_string()))
        .influence_strength(Some(0.55f32))
        .build()
        .unwrap();

    let client = FluxClient::new("fal-key").with_base_url(server.url());
    let image = client.render(&request).await.unwrap();

    assert_eq!(image.url(), "https://fal.media/img/2.png");
    mock.assert_async().await;
}

#[tokio::test]
async fn gemini_reencodes_inline_image_as_data_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent",
        )
        .match_header("x-goog-api-key", "goog-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "iVBOR"}}]}}]}"#,
        )
        .create_async()
        .await;

    let client = GeminiImageClient::new("goog-key", "gemini-2.0-flash-exp-image-generation")
        .with_base_url(server.url());
    let image = client.render(&image_request()).await.unwrap();

    assert_eq!(image.provider(), &ImageProvider::Gemini);
    assert_eq!(image.url(), "data:image/png;base64,iVBOR");
    mock.assert_async().await;
}

#[tokio::test]
async fn gemini_errors_when_no_image_part_returned() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "cannot comply"}]}}]}"#)
        .create_async()
        .await;

    let client = GeminiImageClient::new("goog-key", "gemini-2.0-flash-exp-image-generation")
        .with_base_url(server.url());
    assert!(client.render(&image_request()).await.is_err());
}
