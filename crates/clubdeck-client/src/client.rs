//! The HTTP client for the backend endpoints.
//!
//! All endpoints are same-origin in production; auth rides on cookies.
//! JSON-returning endpoints get `X-Requested-With: XMLHttpRequest` so the
//! server can tell AJAX from a full-page submission; the delete endpoint
//! speaks the `HX-Request` dialect instead. Login, forgot-password and
//! contact live under the language prefix (`/en/...` for English).

use reqwest::multipart;
use url::Url;

use clubdeck_forms::i18n::Lang;

use crate::error::ApiError;
use crate::reply::{self, RegistrationStatus, ServerReply, Story};

const AJAX_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Which contact form variant is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactKind {
    /// The general contact form.
    #[default]
    Ongoing,
    /// The services information-request variant.
    Services,
}

impl ContactKind {
    /// Wire value of the `form_type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Services => "services",
        }
    }
}

/// Contact form payload.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Club the sender represents.
    pub club_name: String,
    /// Reply address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Free-form message.
    pub message: String,
    /// Form variant.
    pub kind: ContactKind,
}

/// Registration form payload (submitted against an invite token).
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

/// Client for the clubdeck backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    lang: Lang,
}

impl ApiClient {
    /// Creates a client for the backend at `base` (e.g.
    /// `http://localhost:5001`).
    pub fn new(base: &str, lang: Lang) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base)?,
            lang,
        })
    }

    /// Returns the interface language the client submits under.
    #[must_use]
    pub fn lang(&self) -> Lang {
        self.lang
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    fn localized(&self, path: &str) -> String {
        self.endpoint(&format!("{}{}", self.lang.path_prefix(), path))
    }

    async fn post_form(
        &self,
        url: String,
        form: multipart::Form,
    ) -> Result<ServerReply, ApiError> {
        tracing::debug!(%url, "submitting form");
        let resp = self
            .http
            .post(&url)
            .header(AJAX_HEADER.0, AJAX_HEADER.1)
            .multipart(form)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        let result = reply::interpret_reply(status, &body);
        if let Err(err) = &result {
            tracing::warn!(%url, status, %err, "form submission failed");
        }
        result
    }

    /// `POST /login` (multipart). Success carries a redirect target.
    pub async fn login(&self, email: &str, password: &str) -> Result<ServerReply, ApiError> {
        let form = multipart::Form::new()
            .text("email", email.to_owned())
            .text("password", password.to_owned());
        self.post_form(self.localized("/login"), form).await
    }

    /// `POST /forgot-password` (form-encoded).
    pub async fn forgot_password(&self, email: &str) -> Result<ServerReply, ApiError> {
        let url = self.localized("/forgot-password");
        tracing::debug!(%url, "requesting password reset link");
        let resp = self
            .http
            .post(&url)
            .header(AJAX_HEADER.0, AJAX_HEADER.1)
            .form(&[("email", email)])
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        reply::interpret_reply(status, &body)
    }

    /// `POST /reset-password/:token` (multipart).
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
        confirm: &str,
    ) -> Result<ServerReply, ApiError> {
        let form = multipart::Form::new()
            .text("password", password.to_owned())
            .text("confirm_password", confirm.to_owned());
        self.post_form(self.endpoint(&format!("/reset-password/{token}")), form)
            .await
    }

    /// `GET /api/registration/:token`.
    pub async fn registration_status(&self, token: &str) -> Result<RegistrationStatus, ApiError> {
        let url = self.endpoint(&format!("/api/registration/{token}"));
        let resp = self
            .http
            .get(&url)
            .header(AJAX_HEADER.0, AJAX_HEADER.1)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        reply::interpret_json(status, &body)
    }

    /// `POST /register/:token` (multipart, token repeated in the body).
    pub async fn register(
        &self,
        token: &str,
        reg: &RegistrationForm,
    ) -> Result<ServerReply, ApiError> {
        let form = multipart::Form::new()
            .text("token", token.to_owned())
            .text("first_name", reg.first_name.clone())
            .text("last_name", reg.last_name.clone())
            .text("email", reg.email.clone())
            .text("password", reg.password.clone())
            .text("confirm_password", reg.confirm_password.clone());
        self.post_form(self.endpoint(&format!("/register/{token}")), form)
            .await
    }

    /// `POST /admin/send-registration-link` (multipart).
    pub async fn send_registration_link(
        &self,
        club_id: &str,
        email: &str,
    ) -> Result<ServerReply, ApiError> {
        let form = multipart::Form::new()
            .text("club_id", club_id.to_owned())
            .text("email", email.to_owned());
        self.post_form(self.endpoint("/admin/send-registration-link"), form)
            .await
    }

    /// `POST /contact` (multipart).
    pub async fn contact(&self, contact: &ContactForm) -> Result<ServerReply, ApiError> {
        let form = multipart::Form::new()
            .text("first_name", contact.first_name.clone())
            .text("last_name", contact.last_name.clone())
            .text("club_name", contact.club_name.clone())
            .text("email", contact.email.clone())
            .text("phone", contact.phone.clone())
            .text("message", contact.message.clone())
            .text("form_type", contact.kind.as_str());
        self.post_form(self.localized("/contact"), form).await
    }

    /// `POST /dashboard/update-password` (multipart).
    pub async fn update_password(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<ServerReply, ApiError> {
        let form = multipart::Form::new()
            .text("current_password", current.to_owned())
            .text("new_password", new.to_owned())
            .text("confirm_new_password", confirm.to_owned());
        self.post_form(self.endpoint("/dashboard/update-password"), form)
            .await
    }

    /// `POST /dashboard/invite-user` (multipart).
    pub async fn invite_user(&self, email: &str) -> Result<ServerReply, ApiError> {
        let form = multipart::Form::new().text("email", email.to_owned());
        self.post_form(self.endpoint("/dashboard/invite-user"), form)
            .await
    }

    /// `POST /admin/delete-user/:id`.
    ///
    /// Sent with `HX-Request: true`; success is an empty 2xx body.
    pub async fn delete_user(&self, user_id: u64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/admin/delete-user/{user_id}"));
        tracing::debug!(%url, user_id, "deleting user");
        let resp = self
            .http
            .post(&url)
            .header("HX-Request", "true")
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        let result = reply::interpret_delete_reply(status, &body);
        if let Err(err) = &result {
            tracing::warn!(user_id, status, %err, "delete rejected");
        }
        result
    }

    /// `GET /static/data/success_stories.json`.
    pub async fn success_stories(&self) -> Result<Vec<Story>, ApiError> {
        let url = self.endpoint("/static/data/success_stories.json");
        let resp = self.http.get(&url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        reply::interpret_json(status, &body)
    }
}
