//! Contact form submission to the hosting platform's form handler.
//!
//! The handler lives at the site origin root and accepts URL-encoded fields.
//! Any 2xx status counts as delivered; there is no retry.

use thiserror::Error;

use super::config::SITE;
use super::platform;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("form handler answered {0}")]
    Rejected(u16),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// First required field left blank, if any. Phone is optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactError::MissingField(field)))
    }

    /// URL-encoded request body: the handler's hidden fields, then the visible ones.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("form-name", SITE.form_name)
            // Honeypot; humans leave it empty.
            .append_pair("bot-field", "")
            .append_pair("name", &self.name)
            .append_pair("email", &self.email)
            .append_pair("phone", &self.phone)
            .append_pair("message", &self.message)
            .finish()
    }
}

/// POST the form to the origin root.
pub async fn submit(form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;

    let origin = platform::page_origin().unwrap_or_else(|| SITE.fallback_origin.to_string());
    let url = format!("{}/", origin.trim_end_matches('/'));

    let response = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.encode())
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        tracing::warn!(status = status.as_u16(), "contact form rejected");
        Err(ContactError::Rejected(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Anna Kowalska".into(),
            email: "anna@example.pl".into(),
            phone: String::new(),
            message: "Dzień dobry & witam".into(),
        }
    }

    #[test]
    fn encodes_hidden_fields_first() {
        let body = filled().encode();
        assert!(body.starts_with("form-name=contact&bot-field=&"), "{body}");
        assert!(body.contains("name=Anna+Kowalska"));
        assert!(body.contains("email=anna%40example.pl"));
        assert!(body.contains("phone=&"));
        assert!(body.ends_with("message=Dzie%C5%84+dobry+%26+witam"), "{body}");
    }

    #[test]
    fn phone_is_optional_but_others_are_not() {
        assert!(filled().validate().is_ok());

        let mut form = filled();
        form.email = "   ".into();
        assert!(matches!(
            form.validate(),
            Err(ContactError::MissingField("email"))
        ));

        assert!(matches!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField("name"))
        ));
    }
}
