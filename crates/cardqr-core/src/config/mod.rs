use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_MODULE_SIZE, DEFAULT_SVG_PATH, ENV_PREFIX,
};
use crate::error::CoreResult;
use crate::types::{ErrorCorrection, LineEnding};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub contact: ContactConfig,
    pub output: OutputConfig,
    pub qr: QrConfig,
    pub logging: LoggingConfig,
}

/// Contact fields fed to the vCard builder.
///
/// Every field is optional; empty strings mean "not supplied".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Full formatted name (FN). Derived from the structured parts when empty.
    pub name: String,
    pub given: String,
    pub surname: String,
    /// Populates NICKNAME and X-PREFERRED-NAME.
    pub preferred_name: String,
    pub email: String,
    pub phone: String,
    /// GitHub username or full profile URL.
    pub github: String,
    pub city: String,
    pub country: String,
    pub note: String,
    /// Remote avatar image, http(s) only.
    pub avatar: String,
    /// Remote PGP public key, http(s) only.
    pub pgp_key_uri: String,
    /// 8, 16 or 40 hex characters; separators are ignored.
    pub pgp_fingerprint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub svg_path: String,
    /// Also write the raw record here when set.
    pub vcf_path: Option<String>,
    pub line_ending: LineEnding,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    pub error_correction: ErrorCorrection,
    /// Edge length of one QR module in SVG user units.
    pub module_size: u32,
    pub quiet_zone: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads settings from the optional `cardqr.toml` file and `CARDQR_*`
    /// environment variables. Environment variables take precedence over the file.
    ///
    /// Nested keys use a double underscore, e.g. `CARDQR_CONTACT__EMAIL`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Loads settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match `Settings`.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }

    fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("output.svg_path", DEFAULT_SVG_PATH)?
            .set_default("output.line_ending", LineEnding::default().name())?
            .set_default("qr.error_correction", ErrorCorrection::default().as_str())?
            .set_default("qr.module_size", i64::from(DEFAULT_MODULE_SIZE))?
            .set_default("qr.quiet_zone", true)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }
}

/// ## Summary
/// Loads settings from `.env`, `cardqr.toml` and the environment.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        svg_path = %settings.output.svg_path,
        line_ending = %settings.output.line_ending,
        "Settings loaded"
    );
    Ok(settings)
}
