#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # clubdeck-forms
//!
//! Client-side form behavior: the validation rules the server also
//! enforces, the localized status messages, and the submit lifecycle every
//! remote form shares (validity gate, busy flag, exactly one visible
//! banner, tolerance for responses that arrive after a reset).
//!
//! ## Example
//!
//! ```rust
//! use clubdeck_forms::form::{Field, Outcome, RemoteForm};
//! use clubdeck_forms::i18n::Lang;
//! use clubdeck_forms::validate;
//!
//! let mut form = RemoteForm::new(Lang::En)
//!     .field(Field::new("email").validator(validate::email))
//!     .field(Field::new("password").validator(validate::required));
//!
//! form.set_value("email", "user@club.test");
//! form.set_value("password", "secret");
//!
//! let ticket = form.begin_submit().expect("valid form");
//! form.finish_submit(&ticket, Outcome::failure("wrong password"));
//! assert!(!form.is_busy());
//! ```

pub mod form;
pub mod i18n;
pub mod validate;

pub use form::{Field, Outcome, RemoteForm, SubmitTicket};
pub use i18n::{Lang, Msg};
