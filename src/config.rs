use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Region to clean; required, no default.
pub const REGION_ENV: &str = "AWS_REGION";

/// ListUserPools caps MaxResults at 60.
const MAX_PAGE_SIZE: i32 = 60;

pub struct SweepConfig {
    pub region: String,
    pub delete_delay: Duration,
    pub page_size: i32,
}

impl SweepConfig {
    pub fn new(region: String, delay_ms: u64, page_size: i32) -> Self {
        Self {
            region,
            delete_delay: Duration::from_millis(delay_ms),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// Reads the target region from the environment (after loading `.env`).
/// Returns `None` when unset or blank, in which case the caller is expected
/// to print usage and exit before touching any provider.
pub fn region_from_env() -> Option<String> {
    dotenv().ok();
    env::var(REGION_ENV).ok().filter(|r| !r.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped_to_provider_limits() {
        let config = SweepConfig::new("us-west-2".to_string(), 1000, 500);
        assert_eq!(config.page_size, 60);

        let config = SweepConfig::new("us-west-2".to_string(), 1000, 0);
        assert_eq!(config.page_size, 1);

        let config = SweepConfig::new("us-west-2".to_string(), 1000, 50);
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn delay_is_millis() {
        let config = SweepConfig::new("us-west-2".to_string(), 250, 50);
        assert_eq!(config.delete_delay, Duration::from_millis(250));
    }
}
