use crate::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// ProvideCredentialChain tries a list of credential providers in order.
///
/// The first provider returning `Some` wins. A provider returning `None` or
/// an error is skipped and the next one is tried; the chain only returns
/// `None` once every provider has been asked.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Arc<dyn ProvideCredential<Credential = C>>>,
}

impl<C> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
        }
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.insert(0, Arc::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("credential loaded from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("credential provider {provider:?} failed: {err}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}
