//! Core components for computing legacy AWS request signatures.
//!
//! This crate holds the pieces every signing dialect shares:
//!
//! - [`ParamSet`]: the order-irrelevant parameter multimap that
//!   canonicalization is defined over
//! - [`SigningContext`]: the complete input to one signing operation
//! - [`SignParams`]: the trait protocol adapters implement
//! - [`hash`] and [`time`]: HMAC/base64 and RFC 3339 helpers
//!
//! The engine is a pure function: no I/O, no cross-call state, no logging of
//! secrets. Issuing the signed request is the caller's business.
//!
//! ## Example
//!
//! ```no_run
//! use awssign_core::{ParamSet, SignParams, SigningContext};
//!
//! # #[derive(Debug)] struct MySigner;
//! # #[derive(Debug)] struct MyCredential;
//! # impl SignParams for MySigner {
//! #     type Credential = MyCredential;
//! #     fn sign_params(
//! #         &self,
//! #         _: &SigningContext,
//! #         _: &Self::Credential,
//! #     ) -> awssign_core::Result<ParamSet> { todo!() }
//! # }
//! # fn example(signer: MySigner, credential: MyCredential) -> awssign_core::Result<()> {
//! let params: ParamSet = [("Action", "Publish"), ("Message", "Hi Test")]
//!     .into_iter()
//!     .collect();
//! let ctx = SigningContext::new(
//!     http::Method::GET,
//!     "sns.us-east-1.amazonaws.com",
//!     "/",
//!     params,
//! )?;
//!
//! let signed = signer.sign_params(&ctx, &credential)?;
//! assert!(signed.contains("Signature"));
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;

mod error;
pub use error::{Error, ErrorKind, Result};

mod params;
pub use params::{ParamSet, SigningContext};

mod api;
pub use api::SignParams;
