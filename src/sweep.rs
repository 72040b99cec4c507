use futures::future::join_all;
use tracing::{info, warn};

use crate::config::SweepConfig;
use crate::errors::ProviderError;
use crate::providers::{AppLookup, AppRegistry, FunctionService, IdentityPool, IdentityPoolAdmin};

/// Pools created by Amplify Studio follow this naming convention; anything
/// else is not ours to touch.
pub const POOL_NAME_PREFIX: &str = "amplify_backend_manager_";

/// Extracts the Amplify app id embedded in a Studio user pool name.
///
/// The name must carry the Studio prefix and contain at least one
/// underscore-delimited segment starting with `d` (the app id). Returns
/// `None` for anything else.
pub fn derive_app_id(name: &str) -> Option<&str> {
    if !name.starts_with(POOL_NAME_PREFIX) {
        return None;
    }
    name.split('_').find(|segment| segment.starts_with('d'))
}

/// Returns the subset of `pools` whose Amplify app no longer exists,
/// preserving input order.
///
/// Liveness checks run concurrently and are all joined before any verdict
/// is acted on. Pools with non-conforming names are excluded with a warning
/// and never looked up. Any registry error aborts the run.
pub async fn filter_orphaned<R>(
    registry: &R,
    pools: Vec<IdentityPool>,
) -> Result<Vec<IdentityPool>, ProviderError>
where
    R: AppRegistry,
{
    let verdicts = join_all(pools.iter().map(|pool| async move {
        let Some(app_id) = derive_app_id(&pool.name) else {
            warn!(pool = %pool.name, "ignoring user pool with non-conforming name");
            return Ok(false);
        };
        match registry.lookup_app(app_id).await? {
            AppLookup::NotFound => Ok(true),
            AppLookup::Found => Ok(false),
        }
    }))
    .await;

    let mut orphaned = Vec::new();
    for (pool, verdict) in pools.into_iter().zip(verdicts) {
        if verdict? {
            orphaned.push(pool);
        }
    }
    Ok(orphaned)
}

/// Deletes every lambda trigger declared in the pool's configuration.
///
/// No-op when the pool declares none. Deletions run concurrently and are
/// all joined; a trigger that is already gone is skipped, any other failure
/// aborts.
pub async fn remove_triggers<A, F>(
    admin: &A,
    functions: &F,
    pool_id: &str,
) -> Result<(), ProviderError>
where
    A: IdentityPoolAdmin,
    F: FunctionService,
{
    let triggers = admin.pool_triggers(pool_id).await?;
    if triggers.is_empty() {
        return Ok(());
    }

    let results = join_all(triggers.iter().map(|arn| async move {
        info!(%arn, "deleting lambda trigger");
        match functions.delete_function(arn).await {
            Err(err) if err.is_not_found() => {
                info!(%arn, "lambda trigger already deleted");
                Ok(())
            }
            other => other,
        }
    }))
    .await;

    for result in results {
        result?;
    }
    Ok(())
}

/// Runs the full sweep: list, filter, then per orphaned pool remove its
/// triggers, delete it, and pause for the configured delay.
///
/// Pools are processed strictly sequentially; the pause is issued after
/// every deletion, including the last. The first unhandled error aborts the
/// remainder of the run.
pub async fn run<A, R, F>(
    admin: &A,
    registry: &R,
    functions: &F,
    config: &SweepConfig,
) -> Result<(), ProviderError>
where
    A: IdentityPoolAdmin,
    R: AppRegistry,
    F: FunctionService,
{
    let pools = admin.list_pools().await?;
    info!(count = pools.len(), "listed user pools");

    let orphaned = filter_orphaned(registry, pools).await?;
    info!(count = orphaned.len(), "user pools belong to deleted apps");

    for pool in orphaned {
        remove_triggers(admin, functions, &pool.id).await?;
        info!(name = %pool.name, id = %pool.id, "deleting user pool");
        admin.delete_pool(&pool.id).await?;
        // Stay under the user pool API rate limit.
        tokio::time::sleep(config.delete_delay).await;
    }

    Ok(())
}
