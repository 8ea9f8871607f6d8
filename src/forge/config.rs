//! Configuration for GitHub API connections.
use secrecy::SecretString;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default page size for paginated compare queries
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with the hosting service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// REST API base URL without a trailing slash.
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Skip write operations and log what would have happened instead.
    pub dry_run: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
            dry_run: false,
        }
    }
}
