pub mod aws;

use async_trait::async_trait;

use crate::errors::ProviderError;

/// A Cognito user pool as seen by the sweep: read-only except for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPool {
    pub id: String,
    pub name: String,
}

/// Outcome of an app registry existence probe. "Not found" is a value here,
/// not an error: it is the signal that a pool is orphaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLookup {
    Found,
    NotFound,
}

/// User pool administration: list, describe triggers, delete.
#[async_trait]
pub trait IdentityPoolAdmin {
    /// Returns every user pool in the region, following pagination tokens
    /// until exhausted. No filtering.
    async fn list_pools(&self) -> Result<Vec<IdentityPool>, ProviderError>;

    /// Lambda trigger ARNs declared in the pool's lifecycle configuration;
    /// empty when the pool declares none.
    async fn pool_triggers(&self, pool_id: &str) -> Result<Vec<String>, ProviderError>;

    async fn delete_pool(&self, pool_id: &str) -> Result<(), ProviderError>;
}

/// Existence probe against the Amplify app registry.
#[async_trait]
pub trait AppRegistry {
    async fn lookup_app(&self, app_id: &str) -> Result<AppLookup, ProviderError>;
}

/// Lambda function deletion by ARN.
#[async_trait]
pub trait FunctionService {
    /// Deletes the function. Reports `ProviderError::NotFound` when it is
    /// already gone; callers that want idempotence swallow that kind.
    async fn delete_function(&self, arn: &str) -> Result<(), ProviderError>;
}
