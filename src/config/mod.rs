use std::fmt;

/// Environment variable holding the GitHub login to score
pub const ENV_LOGIN_VAR: &str = "GH_LOGIN";

/// Environment variable holding the GitHub token used for the GraphQL API
pub const ENV_TOKEN_VAR: &str = "GH_TOKEN";

/// Account identity and bearer token for a single run.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{} is not set", var),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read credentials from the process environment.
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    credentials_from(|name| std::env::var(name).ok())
}

/// Build credentials from an arbitrary variable lookup.
///
/// Values are trimmed; a variable that is unset or blank counts as missing.
/// The login is checked first so the diagnostic always names the first
/// missing variable.
pub fn credentials_from<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let login = required(&lookup, ENV_LOGIN_VAR)?;
    let token = required(&lookup, ENV_TOKEN_VAR)?;
    Ok(Credentials { login, token })
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(val) => {
            let trimmed = val.trim().to_string();
            if trimmed.is_empty() {
                Err(ConfigError::Missing(name))
            } else {
                Ok(trimmed)
            }
        }
        None => Err(ConfigError::Missing(name)),
    }
}
