use crate::server::error::config::ConfigError;

pub static DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";
pub static DEFAULT_ESI_TOKEN_URL: &str = "https://login.eveonline.com/v2/oauth/token";
/// Every 6 hours at the top of the hour
pub static DEFAULT_MEMBER_TRACKING_CRON: &str = "0 0 */6 * * *";

pub struct Config {
    pub contact_email: String,
    pub esi_client_id: String,
    pub esi_client_secret: String,
    pub esi_callback_url: String,
    pub esi_url: String,
    pub esi_token_url: String,
    pub database_url: String,
    pub member_tracking_cron: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let contact_email = required("CONTACT_EMAIL")?;
        if !contact_email.contains('@') {
            return Err(ConfigError::InvalidEnvValue {
                var: "CONTACT_EMAIL".to_string(),
                reason: "expected an email address".to_string(),
            });
        }

        let member_tracking_cron =
            optional("MEMBER_TRACKING_CRON", DEFAULT_MEMBER_TRACKING_CRON);
        // sec min hour day-of-month month day-of-week [year]
        let fields = member_tracking_cron.split_whitespace().count();
        if !(6..=7).contains(&fields) {
            return Err(ConfigError::InvalidEnvValue {
                var: "MEMBER_TRACKING_CRON".to_string(),
                reason: format!("expected 6 or 7 cron fields, found {}", fields),
            });
        }

        let user_agent = format!(
            "{}/{} ({}; +{})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email,
            env!("CARGO_PKG_REPOSITORY")
        );

        Ok(Self {
            contact_email,
            esi_client_id: required("ESI_CLIENT_ID")?,
            esi_client_secret: required("ESI_CLIENT_SECRET")?,
            esi_callback_url: required("ESI_CALLBACK_URL")?,
            esi_url: optional("ESI_URL", DEFAULT_ESI_URL),
            esi_token_url: optional("ESI_TOKEN_URL", DEFAULT_ESI_TOKEN_URL),
            database_url: required("DATABASE_URL")?,
            member_tracking_cron,
            user_agent,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
