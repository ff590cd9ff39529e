use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::services::Service;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    PhoneRequired,
    ServiceRequired,
    MessageRequired,
}

impl FieldError {
    #[cfg(test)]
    pub const ALL: [FieldError; 6] = [
        FieldError::NameRequired,
        FieldError::EmailRequired,
        FieldError::EmailInvalid,
        FieldError::PhoneRequired,
        FieldError::ServiceRequired,
        FieldError::MessageRequired,
    ];

    pub fn field(self) -> Field {
        match self {
            FieldError::NameRequired => Field::FullName,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::PhoneRequired => Field::Phone,
            FieldError::ServiceRequired => Field::Service,
            FieldError::MessageRequired => Field::Message,
        }
    }

    pub fn translation_key(self) -> &'static str {
        match self {
            FieldError::NameRequired => "form.errors.nameRequired",
            FieldError::EmailRequired => "form.errors.emailRequired",
            FieldError::EmailInvalid => "form.errors.emailInvalid",
            FieldError::PhoneRequired => "form.errors.phoneRequired",
            FieldError::ServiceRequired => "form.errors.serviceRequired",
            FieldError::MessageRequired => "form.errors.messageRequired",
        }
    }
}

/// Raw values as typed into the quote form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// A validated lead, ready to send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub message: String,
}

impl LeadFormData {
    #[cfg(test)]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks every field independently so all problems surface at once.
    pub fn validate(&self) -> Result<LeadSubmission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.push(FieldError::NameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::EmailInvalid);
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push(FieldError::PhoneRequired);
        }

        let service = Service::from_wire_name(&self.service);
        if service.is_none() {
            errors.push(FieldError::ServiceRequired);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::MessageRequired);
        }

        match service {
            Some(service) if errors.is_empty() => Ok(LeadSubmission {
                full_name: full_name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                service,
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejected {
    /// Validation failed; errors are recorded on the form.
    Invalid,
    /// A submission is already in flight or finished.
    Busy,
}

/// State of the quote form across validation and submission.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    data: LeadFormData,
    errors: Vec<FieldError>,
    submit_failed: bool,
    status: FormStatus,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            data: LeadFormData::default(),
            errors: Vec::new(),
            submit_failed: false,
            status: FormStatus::Editing,
        }
    }
}

impl LeadForm {
    pub fn data(&self) -> &LeadFormData {
        &self.data
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    pub fn submit_failed(&self) -> bool {
        self.submit_failed
    }

    /// Edits are only accepted while the form is interactive.
    pub fn update(&mut self, field: Field, value: String) {
        if self.status != FormStatus::Editing {
            return;
        }
        self.data.set(field, value);
        self.errors.retain(|e| e.field() != field);
    }

    pub fn preselect(&mut self, service: Service) {
        self.update(Field::Service, service.wire_name().to_string());
    }

    pub fn begin_submit(&mut self) -> Result<LeadSubmission, Rejected> {
        if self.status != FormStatus::Editing {
            return Err(Rejected::Busy);
        }
        match self.data.validate() {
            Ok(submission) => {
                self.errors.clear();
                self.submit_failed = false;
                self.status = FormStatus::Submitting;
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors;
                Err(Rejected::Invalid)
            }
        }
    }

    pub fn finish(&mut self, result: &Result<(), SubmitError>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.data = LeadFormData::default();
                self.status = FormStatus::Submitted;
            }
            Err(_) => {
                self.submit_failed = true;
                self.status = FormStatus::Editing;
            }
        }
    }

    pub fn send_another(&mut self) {
        *self = LeadForm::default();
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("lead request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("lead endpoint responded with status {0}")]
    Status(u16),
}

/// Sends the lead to the configured endpoint, or simulates the round-trip.
pub async fn submit_lead(lead: &LeadSubmission) -> Result<(), SubmitError> {
    let Some(endpoint) = config::get_lead_endpoint() else {
        TimeoutFuture::new(config::SIMULATED_SUBMIT_DELAY_MS).await;
        info!("Simulated lead submission for {}", lead.service.wire_name());
        return Ok(());
    };

    let response = Request::post(endpoint).json(lead)?.send().await?;
    if !response.ok() {
        warn!("Lead endpoint returned {}", response.status());
        return Err(SubmitError::Status(response.status()));
    }
    info!("Lead submitted for {}", lead.service.wire_name());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LeadFormData {
        LeadFormData {
            full_name: "Jane Smith".into(),
            email: "jane@co.com".into(),
            phone: "+1 555 0100".into(),
            service: "Air Freight".into(),
            message: "2 pallets".into(),
        }
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::default();
        let data = valid();
        for field in [Field::FullName, Field::Email, Field::Phone, Field::Service, Field::Message] {
            form.update(field, data.get(field).to_string());
        }
        form
    }

    #[test]
    fn empty_form_flags_every_field() {
        let errors = LeadFormData::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::PhoneRequired,
                FieldError::ServiceRequired,
                FieldError::MessageRequired,
            ]
        );
    }

    #[test]
    fn bad_email_only_flags_email_and_does_not_submit() {
        let mut form = filled_form();
        form.update(Field::Email, "not-an-email".into());
        assert_eq!(form.begin_submit(), Err(Rejected::Invalid));
        assert_eq!(form.errors(), &[FieldError::EmailInvalid]);
        assert_eq!(form.error_for(Field::FullName), None);
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn whitespace_around_at_is_rejected() {
        for email in ["jane @co.com", "jane@ co.com", "@co.com", "jane@"] {
            let data = LeadFormData { email: email.into(), ..valid() };
            assert_eq!(data.validate().unwrap_err(), vec![FieldError::EmailInvalid], "{}", email);
        }
    }

    #[test]
    fn unknown_service_is_rejected() {
        let data = LeadFormData { service: "Dangerous Goods".into(), ..valid() };
        assert_eq!(data.validate().unwrap_err(), vec![FieldError::ServiceRequired]);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = LeadForm::default();
        assert_eq!(form.begin_submit(), Err(Rejected::Invalid));
        form.update(Field::Phone, "+971 4 000 0000".into());
        assert_eq!(form.error_for(Field::Phone), None);
        assert_eq!(form.error_for(Field::Email), Some(FieldError::EmailRequired));
    }

    #[test]
    fn valid_form_submits_and_resets() {
        let mut form = filled_form();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.service, Service::AirFreight);
        assert_eq!(form.status(), FormStatus::Submitting);

        form.finish(&Ok(()));
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.data(), &LeadFormData::default());

        form.send_another();
        assert_eq!(form, LeadForm::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(Rejected::Busy));
        form.update(Field::FullName, "Someone Else".into());
        assert_eq!(form.data().full_name, "Jane Smith");
    }

    #[test]
    fn failed_submission_keeps_input() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish(&Err(SubmitError::Status(502)));
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(form.submit_failed());
        assert_eq!(form.data(), &valid());

        assert!(form.begin_submit().is_ok());
        assert!(!form.submit_failed());
    }

    #[test]
    fn preselected_service_can_be_overridden() {
        let mut form = LeadForm::default();
        form.preselect(Service::WarehouseStorage);
        assert_eq!(form.data().service, "Warehouse Storage");
        form.update(Field::Service, "Sea Freight".into());
        assert_eq!(form.data().service, "Sea Freight");
    }

    #[test]
    fn payload_uses_camel_case_and_wire_names() {
        let submission = valid().validate().unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["fullName"], "Jane Smith");
        assert_eq!(json["service"], "Air Freight");
    }
}
