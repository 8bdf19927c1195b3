//! Legacy AWS signing dialects.
//!
//! Three historically-evolved protocols behind one [`SignParams`] seam:
//!
//! - [`QuerySigner`]: query-string signature version 2
//! - [`RestSigner`]: header-based REST signature
//! - [`V4Signer`]: partial signature version 4 (canonical request and
//!   string-to-sign only), with a pre-signed URL path
//!
//! All three share the canonicalization skeleton in [`canonical`] and the
//! HMAC-SHA256/base64 signer from `awssign-core`. Adapters never mutate the
//! caller's parameters; each returns a fresh augmented set.
//!
//! [`SignParams`]: awssign_core::SignParams

pub mod canonical;
pub mod constants;

mod credential;
pub use credential::Credential;

mod sign_query;
pub use sign_query::QuerySigner;

mod sign_rest;
pub use sign_rest::RestSigner;

mod sign_v4;
pub use sign_v4::V4Signer;
