use content_moderator::{ContentModerator, operations};
use contentmod_core::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let region = std::env::var("CONTENT_MODERATOR_REGION").unwrap_or_else(|_| "westus".to_string());

    // Create a client
    let config = ClientConfig::builder()
        .with_base_url(operations::region_endpoint(&region))
        .with_accept_language("en-US")
        .build();
    let moderator = ContentModerator::new(config);

    // Screen a text, asking for personal data and classification
    let screen = moderator
        .text_moderation()
        .screen_text(
            "text/plain",
            "Is this a crap email abcdef@abcd.com, phone: 6657789887, IP: 255.255.255.255?",
        )
        .arg("language", "eng")
        .arg("autocorrect", true)
        .arg("PII", true)
        .arg("classify", true)
        .await?;

    for term in screen.detected_terms() {
        println!("term: {:?} at {:?}", term.term, term.index);
    }
    if let Some(pii) = &screen.pii {
        println!("emails: {}, phones: {}", pii.email.len(), pii.phone.len());
    }

    // Detect the language of the same text
    let language = moderator
        .text_moderation()
        .detect_language("text/plain", "Bonjour tout le monde")
        .await?;
    println!("language: {:?}", language.detected_language);

    Ok(())
}
