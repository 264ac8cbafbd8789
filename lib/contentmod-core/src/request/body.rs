use bytes::{BufMut, Bytes, BytesMut};
use serde::Serialize;

use crate::descriptor::BodyKind;
use crate::error::InvokeError;

/// The body of an invocation.
///
/// The content type defaults to the one declared by the operation, except for
/// multipart bodies which carry their boundary.
#[derive(Clone, derive_more::Debug)]
pub struct RequestBody {
    kind: BodyKind,
    content_type: Option<String>,
    #[debug(ignore)]
    data: Bytes,
}

impl RequestBody {
    /// Serializes a DTO as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Serialization`] when the DTO cannot be serialized.
    pub fn json<T>(value: &T) -> Result<Self, InvokeError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(value)?;
        Ok(Self {
            kind: BodyKind::Json,
            content_type: None,
            data: data.into(),
        })
    }

    /// Raw bytes sent with the content type declared by the operation.
    pub fn raw(data: impl Into<Bytes>) -> Self {
        Self {
            kind: BodyKind::Raw,
            content_type: None,
            data: data.into(),
        }
    }

    /// Raw bytes sent with an explicit content type.
    pub fn raw_with_content_type(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            kind: BodyKind::Raw,
            content_type: Some(content_type.into()),
            data: data.into(),
        }
    }

    /// A text payload sent with the content type declared by the operation.
    pub fn text(text: impl Into<String>) -> Self {
        Self::raw(text.into())
    }

    /// The body kind.
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// The explicit content type, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The encoded payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

#[derive(Debug, Clone)]
struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

/// A `multipart/form-data` payload made of named text and binary parts.
///
/// ```rust
/// use contentmod_core::Multipart;
///
/// let form = Multipart::new()
///     .bytes("frameImageZip", "frames.zip", "application/zip", vec![0x50, 0x4b])
///     .text("frameMetadata", r#"[{"Timestamp":"0"}]"#);
///
/// assert!(form.content_type().starts_with("multipart/form-data; boundary="));
/// ```
#[derive(Debug, Clone)]
pub struct Multipart {
    boundary: String,
    parts: Vec<Part>,
}

impl Default for Multipart {
    fn default() -> Self {
        Self::new()
    }
}

impl Multipart {
    /// Creates an empty form with a generated boundary.
    pub fn new() -> Self {
        let boundary = format!("----formdata-contentmod-{}", uuid::Uuid::new_v4());
        Self {
            boundary,
            parts: Vec::new(),
        }
    }

    /// Adds a text part.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            name: name.into(),
            filename: None,
            content_type: None,
            data: Bytes::from(value.into()),
        });
        self
    }

    /// Adds a binary (file) part.
    #[must_use]
    pub fn bytes(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.parts.push(Part {
            name: name.into(),
            filename: Some(filename.into()),
            content_type: Some(content_type.into()),
            data: data.into(),
        });
        self
    }

    /// The boundary separating parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The `content-type` header value, boundary included.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encodes the form.
    pub fn encode(&self) -> Bytes {
        let boundary = &self.boundary;
        let mut buffer = BytesMut::new();

        for part in &self.parts {
            buffer.put_slice(format!("--{boundary}\r\n").as_bytes());
            let name = escape_quoted(&part.name);
            let disposition = match &part.filename {
                Some(filename) => format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{}\"\r\n",
                    escape_quoted(filename)
                ),
                None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
            };
            buffer.put_slice(disposition.as_bytes());
            if let Some(content_type) = &part.content_type {
                buffer.put_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            buffer.put_slice(b"\r\n");
            buffer.put_slice(&part.data);
            buffer.put_slice(b"\r\n");
        }

        buffer.put_slice(format!("--{boundary}--\r\n").as_bytes());
        buffer.freeze()
    }
}

/// Escapes a `Content-Disposition` quoted value the way HTML forms do.
fn escape_quoted(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl From<Multipart> for RequestBody {
    fn from(value: Multipart) -> Self {
        Self {
            kind: BodyKind::Multipart,
            content_type: Some(value.content_type()),
            data: value.encode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Metadata {
        name: String,
        description: Option<String>,
    }

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(&Metadata {
            name: "list".to_string(),
            description: None,
        })
        .expect("serializable");

        assert_eq!(body.kind(), BodyKind::Json);
        assert_eq!(body.content_type(), None);
        insta::assert_snapshot!(
            String::from_utf8_lossy(body.data()),
            @r#"{"Name":"list","Description":null}"#
        );
    }

    #[test]
    fn test_raw_body_keeps_bytes() {
        let body = RequestBody::raw_with_content_type(vec![0x47, 0x49, 0x46], "image/jpeg");

        assert_eq!(body.kind(), BodyKind::Raw);
        assert_eq!(body.content_type(), Some("image/jpeg"));
        assert_eq!(body.data().as_ref(), b"GIF");
        insta::assert_debug_snapshot!(body, @r#"
        RequestBody {
            kind: Raw,
            content_type: Some(
                "image/jpeg",
            ),
            ..
        }
        "#);
    }

    #[test]
    fn test_multipart_encoding() {
        let form = Multipart::new()
            .bytes("frameImageZip", "frames.zip", "application/zip", &b"PK"[..])
            .text("frameMetadata", "[]");
        let boundary = form.boundary().to_string();

        let body = RequestBody::from(form);
        let encoded = String::from_utf8_lossy(body.data()).replace(&boundary, "BOUNDARY");

        assert_eq!(body.kind(), BodyKind::Multipart);
        assert_eq!(
            body.content_type(),
            Some(format!("multipart/form-data; boundary={boundary}").as_str())
        );
        insta::assert_snapshot!(encoded.replace("\r\n", "\n"), @r#"
        --BOUNDARY
        Content-Disposition: form-data; name="frameImageZip"; filename="frames.zip"
        Content-Type: application/zip

        PK
        --BOUNDARY
        Content-Disposition: form-data; name="frameMetadata"

        []
        --BOUNDARY--
        "#);
    }

    #[test]
    fn test_multipart_escapes_disposition_values() {
        let form = Multipart::new()
            .bytes(
                "frame\"Image",
                "a.zip\"\r\nX-Injected: yes",
                "application/zip",
                &b"PK"[..],
            )
            .text("line\nbreak", "value");
        let boundary = form.boundary().to_string();

        let encoded = String::from_utf8_lossy(&form.encode()).replace(&boundary, "BOUNDARY");

        insta::assert_snapshot!(encoded.replace("\r\n", "\n"), @r#"
        --BOUNDARY
        Content-Disposition: form-data; name="frame%22Image"; filename="a.zip%22%0D%0AX-Injected: yes"
        Content-Type: application/zip

        PK
        --BOUNDARY
        Content-Disposition: form-data; name="line%0Abreak"

        value
        --BOUNDARY--
        "#);
    }
}
