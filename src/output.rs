//! Output types: the extracted fields and the wire envelope they arrive in.

use serde::{Deserialize, Serialize};

/// The structured fields extracted from one document image.
///
/// Every field is opaque text, passed through exactly as the extraction
/// service returned it. No parsing, trimming, or format validation happens
/// client-side: an expiration date is whatever string the service produced.
///
/// Wire names are camelCase (`documentNumber`, `expirationDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Full name as printed on the document.
    pub name: String,
    /// Document number as printed on the document.
    pub document_number: String,
    /// Expiration date, verbatim from the service.
    pub expiration_date: String,
}

/// The envelope a successful extraction response arrives in.
///
/// The service replies `{ "data": { ...fields... } }`. Unknown sibling or
/// nested fields are ignored; a 2xx body that does not decode into this
/// shape is treated as unusable by the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub data: ExtractionResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_documented_payload() {
        let body = r#"{"data":{"name":"A","documentNumber":"123","expirationDate":"2030-01-01"}}"#;
        let resp: ExtractResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.name, "A");
        assert_eq!(resp.data.document_number, "123");
        assert_eq!(resp.data.expiration_date, "2030-01-01");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let result = ExtractionResult {
            name: "Jane Doe".into(),
            document_number: "X-99-11".into(),
            expiration_date: "2031-12-31".into(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"documentNumber\""), "got: {json}");
        assert!(json.contains("\"expirationDate\""), "got: {json}");
        assert!(!json.contains("document_number"));
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = r#"{"data":{"name":"A","documentNumber":"123"}}"#;
        assert!(serde_json::from_str::<ExtractResponse>(body).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"{"data":{"name":"A","documentNumber":"1","expirationDate":"2","confidence":0.97},"requestId":"r-1"}"#;
        let resp: ExtractResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.document_number, "1");
    }
}
