use clap::Parser;

/// Deletes Cognito user pools left behind by deleted Amplify apps, along
/// with any lambda triggers still wired into them.
///
/// The target region comes from the AWS_REGION environment variable.
#[derive(Parser, Debug)]
#[command(name = "poolsweep", version, about)]
pub struct Cli {
    /// Milliseconds to pause after each user pool deletion, to stay under
    /// the provider rate limit.
    #[arg(long, env = "SWEEP_DELETE_DELAY_MS", default_value_t = 1000)]
    pub delay_ms: u64,

    /// Page size for the user pool listing (1-60).
    #[arg(long, env = "SWEEP_PAGE_SIZE", default_value_t = 50)]
    pub page_size: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["poolsweep"]);
        assert_eq!(cli.delay_ms, 1000);
        assert_eq!(cli.page_size, 50);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["poolsweep", "--delay-ms", "0", "--page-size", "10"]);
        assert_eq!(cli.delay_ms, 0);
        assert_eq!(cli.page_size, 10);
    }
}
