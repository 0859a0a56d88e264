//! Fan one text out to several translation APIs and collect every answer.
//!
//! The core is [`application::aggregate::translate_all`]: it runs each
//! [`domain::traits::Translator`] concurrently and returns exactly one
//! [`domain::model::TranslationOutcome`] per adapter, successes first.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::aggregate::{translate_all, translate_text};
pub use domain::error::{AppError, ErrorKind, StoreError, TranslateError};
pub use domain::model::{ProviderKind, TranslationOutcome, TranslationRequest};
pub use domain::traits::{CredentialStore, HttpTransport, Translator};
pub use state::AppState;
