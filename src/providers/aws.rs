use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_amplify::Client as AmplifyClient;
use aws_sdk_cognitoidentityprovider::types::LambdaConfigType;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use aws_sdk_lambda::Client as LambdaClient;
use tracing::debug;

use super::{AppLookup, AppRegistry, FunctionService, IdentityPool, IdentityPoolAdmin};
use crate::errors::ProviderError;

const COGNITO: &str = "cognito-idp";
const AMPLIFY: &str = "amplify";
const LAMBDA: &str = "lambda";

/// Shared SDK config for all three clients, pinned to the target region.
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// Cognito user pool administration.
pub struct CognitoPools {
    client: CognitoClient,
    page_size: i32,
}

impl CognitoPools {
    pub fn new(config: &SdkConfig, page_size: i32) -> Self {
        Self {
            client: CognitoClient::new(config),
            page_size,
        }
    }
}

#[async_trait]
impl IdentityPoolAdmin for CognitoPools {
    async fn list_pools(&self) -> Result<Vec<IdentityPool>, ProviderError> {
        let mut pools = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_user_pools()
                .max_results(self.page_size)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|err| {
                    let err = err.into_service_error();
                    if err.is_too_many_requests_exception() {
                        ProviderError::Throttled {
                            service: COGNITO,
                            message: err.to_string(),
                        }
                    } else {
                        ProviderError::Other {
                            service: COGNITO,
                            message: err.to_string(),
                        }
                    }
                })?;

            for pool in page.user_pools() {
                let (Some(id), Some(name)) = (pool.id(), pool.name()) else {
                    continue;
                };
                pools.push(IdentityPool {
                    id: id.to_string(),
                    name: name.to_string(),
                });
            }

            next_token = page.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
            debug!(fetched = pools.len(), "following user pool pagination");
        }

        Ok(pools)
    }

    async fn pool_triggers(&self, pool_id: &str) -> Result<Vec<String>, ProviderError> {
        let described = self
            .client
            .describe_user_pool()
            .user_pool_id(pool_id)
            .send()
            .await
            .map_err(|err| {
                let err = err.into_service_error();
                if err.is_resource_not_found_exception() {
                    ProviderError::NotFound {
                        service: COGNITO,
                        message: err.to_string(),
                    }
                } else if err.is_too_many_requests_exception() {
                    ProviderError::Throttled {
                        service: COGNITO,
                        message: err.to_string(),
                    }
                } else {
                    ProviderError::Other {
                        service: COGNITO,
                        message: err.to_string(),
                    }
                }
            })?;

        Ok(described
            .user_pool()
            .and_then(|pool| pool.lambda_config())
            .map(trigger_arns)
            .unwrap_or_default())
    }

    async fn delete_pool(&self, pool_id: &str) -> Result<(), ProviderError> {
        self.client
            .delete_user_pool()
            .user_pool_id(pool_id)
            .send()
            .await
            .map_err(|err| {
                let err = err.into_service_error();
                if err.is_too_many_requests_exception() {
                    ProviderError::Throttled {
                        service: COGNITO,
                        message: err.to_string(),
                    }
                } else {
                    ProviderError::Other {
                        service: COGNITO,
                        message: err.to_string(),
                    }
                }
            })?;
        Ok(())
    }
}

/// Flattens the lifecycle trigger slots of a pool's lambda config into the
/// set of declared function ARNs.
fn trigger_arns(config: &LambdaConfigType) -> Vec<String> {
    [
        config.pre_sign_up(),
        config.custom_message(),
        config.post_confirmation(),
        config.pre_authentication(),
        config.post_authentication(),
        config.define_auth_challenge(),
        config.create_auth_challenge(),
        config.verify_auth_challenge_response(),
        config.pre_token_generation(),
        config.user_migration(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect()
}

/// Amplify app existence probe.
pub struct AmplifyRegistry {
    client: AmplifyClient,
}

impl AmplifyRegistry {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: AmplifyClient::new(config),
        }
    }
}

#[async_trait]
impl AppRegistry for AmplifyRegistry {
    async fn lookup_app(&self, app_id: &str) -> Result<AppLookup, ProviderError> {
        match self.client.get_app().app_id(app_id).send().await {
            Ok(_) => Ok(AppLookup::Found),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_not_found_exception() {
                    Ok(AppLookup::NotFound)
                } else {
                    Err(ProviderError::Other {
                        service: AMPLIFY,
                        message: err.to_string(),
                    })
                }
            }
        }
    }
}

/// Lambda function deletion.
pub struct LambdaFunctions {
    client: LambdaClient,
}

impl LambdaFunctions {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: LambdaClient::new(config),
        }
    }
}

#[async_trait]
impl FunctionService for LambdaFunctions {
    async fn delete_function(&self, arn: &str) -> Result<(), ProviderError> {
        match self.client.delete_function().function_name(arn).send().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_resource_not_found_exception() {
                    Err(ProviderError::NotFound {
                        service: LAMBDA,
                        message: err.to_string(),
                    })
                } else if err.is_too_many_requests_exception() {
                    Err(ProviderError::Throttled {
                        service: LAMBDA,
                        message: err.to_string(),
                    })
                } else {
                    Err(ProviderError::Other {
                        service: LAMBDA,
                        message: err.to_string(),
                    })
                }
            }
        }
    }
}
