/// Host used to expand bare GitHub handles into profile URLs
pub const GITHUB_HOST: &str = "github.com";
pub const GITHUB_BASE_URL: &str = const_str::concat!("https://", GITHUB_HOST, "/");

/// Settings sources
pub const CONFIG_FILE: &str = "cardqr.toml";
pub const ENV_PREFIX: &str = "CARDQR";

/// Output defaults
pub const DEFAULT_SVG_PATH: &str = "vcf_qr.svg";
pub const DEFAULT_MODULE_SIZE: u32 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";
