//! # content-moderator
//!
//! Typed client for the content moderation REST API: image and text moderation,
//! image and term list management, human reviews and moderation jobs.
//!
//! The service is described as data in [`operations`]; every call goes through the
//! generic invocation core of [`contentmod_core`].
//!
//! ```rust,no_run
//! use content_moderator::{ContentModerator, operations};
//! use contentmod_core::ClientConfig;
//!
//! # async fn example() -> Result<(), contentmod_core::InvokeError> {
//! let config = ClientConfig::builder()
//!     .with_base_url(operations::region_endpoint("westus"))
//!     .build();
//! let moderator = ContentModerator::new(config);
//!
//! let screen = moderator
//!     .text_moderation()
//!     .screen_text("text/plain", "Is this a crap email abcdef@abcd.com?")
//!     .arg("language", "eng")
//!     .arg("PII", true)
//!     .await?;
//!
//! for term in screen.detected_terms() {
//!     println!("{:?}", term.term);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Any operation can also be called by id through [`Client::invoke`] with
//! [`CallArgs`](contentmod_core::CallArgs).

use contentmod_core::{Client, ClientConfig, ReqwestTransport, Transport};

pub mod models;
pub mod operations;

pub use self::operations::image_lists::ImageLists;
pub use self::operations::image_moderation::ImageModeration;
pub use self::operations::list_images::ListImages;
pub use self::operations::list_terms::ListTerms;
pub use self::operations::reviews::{Reviews, video_frame_form};
pub use self::operations::term_lists::TermLists;
pub use self::operations::text_moderation::TextModeration;

/// Entry point of the moderation service, grouping its operations.
///
/// Cheap to clone; clones share the configuration and the transport.
pub struct ContentModerator<T = ReqwestTransport> {
    client: Client<T>,
}

impl<T> Clone for ContentModerator<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ContentModerator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentModerator")
            .field("client", &self.client)
            .finish()
    }
}

impl ContentModerator {
    /// Creates a client using the default HTTP transport.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(operations::table(), config),
        }
    }
}

impl<T> ContentModerator<T>
where
    T: Transport,
{
    /// Creates a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            client: Client::with_transport(operations::table(), config, transport),
        }
    }

    /// The underlying generic client.
    pub fn client(&self) -> &Client<T> {
        &self.client
    }

    /// Image moderation operations.
    pub fn image_moderation(&self) -> ImageModeration<'_, T> {
        ImageModeration::new(&self.client)
    }

    /// Text moderation operations.
    pub fn text_moderation(&self) -> TextModeration<'_, T> {
        TextModeration::new(&self.client)
    }

    /// Image list management operations.
    pub fn image_lists(&self) -> ImageLists<'_, T> {
        ImageLists::new(&self.client)
    }

    /// Term list management operations.
    pub fn term_lists(&self) -> TermLists<'_, T> {
        TermLists::new(&self.client)
    }

    /// Operations on the images of image lists.
    pub fn list_images(&self) -> ListImages<'_, T> {
        ListImages::new(&self.client)
    }

    /// Operations on the terms of term lists.
    pub fn list_terms(&self) -> ListTerms<'_, T> {
        ListTerms::new(&self.client)
    }

    /// Review, job and video review operations.
    pub fn reviews(&self) -> Reviews<'_, T> {
        Reviews::new(&self.client)
    }
}
