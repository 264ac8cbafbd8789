use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Status;

/// Language detected in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectedLanguage {
    /// ISO 639-3 language code.
    pub detected_language: Option<String>,
    /// Processing status.
    pub status: Option<Status>,
    /// Tracking id.
    pub tracking_id: Option<String>,
}

/// A term found in a screened text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectedTerms {
    /// Position of the term in the text.
    pub index: Option<i32>,
    /// Position of the term in the original text.
    pub original_index: Option<i32>,
    /// Id of the list the term was found in.
    pub list_id: Option<i32>,
    /// The term.
    pub term: Option<String>,
}

/// Score of one classification category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassificationCategory {
    /// Score, between 0 and 1.
    pub score: Option<f64>,
}

/// Classification of a screened text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Classification {
    /// Sexually explicit or adult content.
    pub category1: Option<ClassificationCategory>,
    /// Sexually suggestive or mature content.
    pub category2: Option<ClassificationCategory>,
    /// Offensive content.
    pub category3: Option<ClassificationCategory>,
    /// True when a human review is recommended.
    pub review_recommended: Option<bool>,
}

/// An email address found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Email {
    /// Detected value.
    pub detected: Option<String>,
    /// Sub type.
    pub sub_type: Option<String>,
    /// The email address.
    pub text: Option<String>,
    /// Position in the text.
    pub index: Option<i32>,
}

/// A social security number found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ssn {
    /// The number.
    pub text: Option<String>,
    /// Position in the text.
    pub index: Option<i32>,
}

/// An IP address found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ipa {
    /// Sub type.
    pub sub_type: Option<String>,
    /// The address.
    pub text: Option<String>,
    /// Position in the text.
    pub index: Option<i32>,
}

/// A phone number found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Phone {
    /// Country code.
    pub country_code: Option<String>,
    /// The number.
    pub text: Option<String>,
    /// Position in the text.
    pub index: Option<i32>,
}

/// A postal address found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// The address.
    pub text: Option<String>,
    /// Position in the text.
    pub index: Option<i32>,
}

/// Personal data found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pii {
    /// Email addresses.
    #[serde(rename = "Email", default)]
    pub email: Vec<Email>,
    /// Social security numbers.
    #[serde(rename = "SSN", default)]
    pub ssn: Vec<Ssn>,
    /// IP addresses.
    #[serde(rename = "IPA", default)]
    pub ipa: Vec<Ipa>,
    /// Phone numbers.
    #[serde(rename = "Phone", default)]
    pub phone: Vec<Phone>,
    /// Postal addresses.
    #[serde(rename = "Address", default)]
    pub address: Vec<Address>,
}

/// Result of a text screening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Screen {
    /// Original text.
    pub original_text: Option<String>,
    /// Normalized text.
    pub normalized_text: Option<String>,
    /// Autocorrected text.
    pub auto_corrected_text: Option<String>,
    /// Miscellaneous data.
    pub misrepresentation: Option<Vec<String>>,
    /// Classification, when requested.
    pub classification: Option<Classification>,
    /// Processing status.
    pub status: Option<Status>,
    /// Personal data, when requested.
    #[serde(rename = "PII")]
    pub pii: Option<Pii>,
    /// Language of the text.
    pub language: Option<String>,
    /// Terms found in the text.
    pub terms: Option<Vec<DetectedTerms>>,
    /// Tracking id.
    pub tracking_id: Option<String>,
    /// Any other field returned by the service.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Screen {
    /// The terms found in the text, empty when none matched.
    pub fn detected_terms(&self) -> &[DetectedTerms] {
        self.terms.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_with_pii_and_terms() {
        let screen: Screen = serde_json::from_str(
            r#"{
                "OriginalText": "crap 425-555-0100",
                "Language": "eng",
                "Terms": [{"Index": 0, "OriginalIndex": 0, "ListId": 0, "Term": "crap"}],
                "PII": {"Phone": [{"CountryCode": "US", "Text": "425-555-0100", "Index": 5}]},
                "Status": {"Code": 3000, "Description": "OK"},
                "TrackingId": "abc"
            }"#,
        )
        .expect("decodes");

        assert_eq!(screen.detected_terms().len(), 1);
        let pii = screen.pii.expect("pii");
        assert_eq!(pii.phone.len(), 1);
        assert!(pii.email.is_empty());
        assert!(screen.extra.is_empty());
    }

    #[test]
    fn test_screen_terms_null() {
        let screen: Screen =
            serde_json::from_str(r#"{"Terms": null, "Extra": 1}"#).expect("decodes");

        assert!(screen.detected_terms().is_empty());
        insta::assert_debug_snapshot!(screen.extra, @r#"
        {
            "Extra": Number(1),
        }
        "#);
    }
}
