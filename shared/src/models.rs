//! RSVP request model and validation.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Keys that must be present in every submission, checked in this order.
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "email", "guest_count", "non_veg", "veg"];

/// A single RSVP form submission.
///
/// Values are kept exactly as submitted; only key presence is enforced.
#[derive(Debug, Clone)]
pub struct RsvpSubmission {
    pub name: Value,
    /// Recipient of the confirmation, used verbatim
    pub email: Value,
    pub guest_count: Value,
    pub non_veg: Value,
    pub veg: Value,
    pub comments: Option<Value>,
}

impl RsvpSubmission {
    /// Decode and validate a raw JSON request body.
    ///
    /// Rejects malformed JSON, non-object bodies and bodies missing any of
    /// [`REQUIRED_FIELDS`]; the first missing key is reported.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(Error::InvalidJson)?;

        let object = match value {
            Value::Object(object) => object,
            _ => {
                return Err(Error::Validation(
                    "Request body must be a JSON object".to_string(),
                ))
            }
        };

        if let Some(missing) = REQUIRED_FIELDS.iter().find(|k| !object.contains_key(**k)) {
            return Err(Error::MissingField(*missing));
        }

        Ok(Self::from(object))
    }

    /// Comments worth rendering, if any. Missing, `null` and `""` count as none.
    pub fn comments(&self) -> Option<Cow<'_, str>> {
        self.comments
            .as_ref()
            .map(field_text)
            .filter(|c| !c.is_empty())
    }
}

/// Text of a submitted value as it appears in the email: strings unquoted,
/// anything else in its JSON form.
pub fn field_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

impl From<Map<String, Value>> for RsvpSubmission {
    fn from(mut object: Map<String, Value>) -> Self {
        let mut take = |key: &str| object.remove(key).unwrap_or(Value::Null);
        Self {
            name: take("name"),
            email: take("email"),
            guest_count: take("guest_count"),
            non_veg: take("non_veg"),
            veg: take("veg"),
            comments: Some(take("comments")).filter(|c| !c.is_null()),
        }
    }
}

/// Whether a `Content-Type` header value declares a JSON body.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("application/json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "Asha",
            "email": "asha@example.com",
            "guest_count": 2,
            "non_veg": 1,
            "veg": 1
        })
    }

    #[test]
    fn test_parse_valid_submission() {
        let body = serde_json::to_vec(&valid()).unwrap();
        let rsvp = RsvpSubmission::from_json(&body).unwrap();
        assert_eq!(rsvp.name, "Asha");
        assert_eq!(rsvp.email, "asha@example.com");
        assert_eq!(rsvp.guest_count.to_string(), "2");
        assert!(rsvp.comments().is_none());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for field in REQUIRED_FIELDS {
            let mut value = valid();
            value.as_object_mut().unwrap().remove(field);
            let body = serde_json::to_vec(&value).unwrap();

            match RsvpSubmission::from_json(&body) {
                Err(Error::MissingField(name)) => assert_eq!(name, field),
                other => panic!("expected missing {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_first_missing_field_reported() {
        let err = RsvpSubmission::from_json(br#"{"name":"Asha"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Missing field: email");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = RsvpSubmission::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, Error::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid request body:"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = RsvpSubmission::from_json(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_values_accepted_as_submitted() {
        let body = br#"{"name":null,"email":"asha@example.com","guest_count":"2","non_veg":"1","veg":1.5,"comments":42}"#;
        let rsvp = RsvpSubmission::from_json(body).unwrap();

        assert_eq!(field_text(&rsvp.name), "null");
        assert_eq!(field_text(&rsvp.guest_count), "2");
        assert_eq!(field_text(&rsvp.non_veg), "1");
        assert_eq!(field_text(&rsvp.veg), "1.5");
        assert_eq!(rsvp.comments().as_deref(), Some("42"));
    }

    #[test]
    fn test_field_text_unquotes_strings_only() {
        assert_eq!(field_text(&json!("Asha")), "Asha");
        assert_eq!(field_text(&json!(3)), "3");
        assert_eq!(field_text(&json!(false)), "false");
        assert_eq!(field_text(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_empty_and_null_comments_ignored() {
        let mut value = valid();
        value["comments"] = json!("");
        let rsvp = RsvpSubmission::from_json(&serde_json::to_vec(&value).unwrap()).unwrap();
        assert!(rsvp.comments().is_none());

        value["comments"] = Value::Null;
        let rsvp = RsvpSubmission::from_json(&serde_json::to_vec(&value).unwrap()).unwrap();
        assert!(rsvp.comments().is_none());
    }

    #[test]
    fn test_content_type_detection() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type(""));
    }
}
