use std::fmt::Debug;

use crate::{ParamSet, SigningContext};

/// SignParams is the trait every protocol adapter implements.
///
/// An adapter takes one [`SigningContext`] plus a credential and returns the
/// parameter set augmented with whatever the protocol requires, always
/// including a computed `Signature`. Adapters are non-destructive: the
/// context's own parameters are never touched, so repeated or concurrent
/// signings over one context are safe.
pub trait SignParams: Debug {
    /// Credential type required by this adapter.
    type Credential;

    /// Sign the request described by `req`, returning the augmented
    /// parameter set.
    fn sign_params(
        &self,
        req: &SigningContext,
        credential: &Self::Credential,
    ) -> crate::Result<ParamSet>;
}
