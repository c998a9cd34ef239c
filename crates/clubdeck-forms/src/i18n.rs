//! Localized status messages.
//!
//! The site serves Dutch at the root and English under a `/en` prefix; the
//! client layer carries its own small catalog for the messages it produces
//! itself (validation failures, network errors, busy labels). Server-sent
//! messages are shown verbatim and never pass through here.

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    /// Dutch, the default.
    #[default]
    Nl,
    /// English.
    En,
}

impl Lang {
    /// Parses a language code; anything other than `en` is Dutch.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("en") {
            Self::En
        } else {
            Self::Nl
        }
    }

    /// Returns the URL path prefix for this language (`""` or `"/en"`).
    #[must_use]
    pub fn path_prefix(self) -> &'static str {
        match self {
            Self::Nl => "",
            Self::En => "/en",
        }
    }
}

/// A client-produced message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Generic transport failure.
    NetworkError,
    /// Email field is empty but needed first (forgot password).
    EnterEmailFirst,
    /// Email field content is not an address.
    EnterValidEmail,
    /// Login attempted with missing or invalid credentials.
    EnterEmailAndPassword,
    /// Some required field is empty or invalid.
    FillAllFields,
    /// A required field is empty.
    FieldRequired,
    /// Password shorter than the minimum.
    PasswordTooShort,
    /// Password and confirmation differ.
    PasswordsNotMatch,
    /// Busy label while sending a form.
    Sending,
    /// Busy label while updating a password.
    Updating,
    /// Busy label while resetting a password.
    Resetting,
}

/// Returns the catalog text for `msg` in `lang`.
///
/// Keys without a translation fall back to English.
#[must_use]
pub fn text(lang: Lang, msg: Msg) -> &'static str {
    match (lang, msg) {
        (Lang::Nl, Msg::NetworkError) => {
            "Netwerkfout. Controleer je verbinding en probeer opnieuw."
        }
        (Lang::En, Msg::NetworkError) => {
            "Network error. Please check your connection and try again."
        }
        (Lang::Nl, Msg::EnterEmailFirst) => "Voer eerst je e-mailadres in.",
        (Lang::En, Msg::EnterEmailFirst) => "Please enter your email address first.",
        (Lang::Nl, Msg::EnterValidEmail) => "Voer een geldig e-mailadres in.",
        (Lang::En, Msg::EnterValidEmail) => "Please enter a valid email address.",
        (Lang::Nl, Msg::EnterEmailAndPassword) => {
            "Voer een geldig e-mailadres en wachtwoord in."
        }
        (Lang::En, Msg::EnterEmailAndPassword) => {
            "Please enter a valid email address and password."
        }
        (Lang::Nl, Msg::FillAllFields) => "Vul alle velden correct in.",
        (Lang::En, Msg::FillAllFields) => "Please fill in all fields correctly.",
        (Lang::Nl, Msg::FieldRequired) => "Dit veld is verplicht.",
        (Lang::En, Msg::FieldRequired) => "This field is required.",
        (Lang::Nl, Msg::PasswordTooShort) => "Wachtwoord moet minimaal 8 tekens bevatten.",
        (Lang::En, Msg::PasswordTooShort) => "Password must be at least 8 characters.",
        (Lang::Nl, Msg::PasswordsNotMatch) => "Wachtwoorden komen niet overeen",
        (Lang::En, Msg::PasswordsNotMatch) => "Passwords do not match",
        (Lang::Nl, Msg::Sending) => "Versturen...",
        (Lang::En, Msg::Sending) => "Sending...",
        (Lang::Nl, Msg::Updating) => "Bijwerken...",
        (Lang::En, Msg::Updating) => "Updating...",
        (Lang::Nl, Msg::Resetting) => "Bezig met resetten...",
        (Lang::En, Msg::Resetting) => "Resetting...",
    }
}
