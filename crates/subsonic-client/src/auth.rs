//! Credential resolution.

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::params::{PARAM_API_KEY, PARAM_SALT, PARAM_TOKEN, PARAM_USERNAME};
use crate::salt::SaltToken;

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// OpenSubsonic `apiKey` parameter.
    ApiKey { key: String },
    /// `u` + `t` + `s` token authentication.
    Password { username: String, password: String },
}

impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::ApiKey { .. } => f
                .debug_struct("ApiKey")
                .field("key", &"[REDACTED]")
                .finish(),
            AuthMode::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

impl AuthMode {
    /// Pick the auth mode from the raw config fields.
    ///
    /// Exactly one of "api key" or "username and password" must be set.
    pub fn resolve(config: &ClientConfig) -> Result<Self> {
        let key = non_empty(config.api_key.as_deref());
        let username = non_empty(config.username.as_deref());
        let password = non_empty(config.password.as_deref());

        match (key, username, password) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(config_error(
                "api key and username/password are mutually exclusive",
            )),
            (Some(key), None, None) => Ok(AuthMode::ApiKey {
                key: key.to_string(),
            }),
            (None, Some(username), Some(password)) => Ok(AuthMode::Password {
                username: username.to_string(),
                password: password.to_string(),
            }),
            (None, Some(_), None) => Err(config_error("username set without password")),
            (None, None, Some(_)) => Err(config_error("password set without username")),
            (None, None, None) => Err(config_error(
                "no credentials: set an api key or a username and password",
            )),
        }
    }

    /// Returns true for API key authentication.
    pub fn is_api_key(&self) -> bool {
        matches!(self, AuthMode::ApiKey { .. })
    }

    /// The username, if password authentication is used.
    pub fn username(&self) -> Option<&str> {
        match self {
            AuthMode::ApiKey { .. } => None,
            AuthMode::Password { username, .. } => Some(username),
        }
    }

    /// Auth parameters for one request. `salt` must be `Some` in password mode.
    pub(crate) fn to_pairs(&self, salt: Option<SaltToken>) -> Result<Vec<(String, String)>> {
        match (self, salt) {
            (AuthMode::ApiKey { key }, _) => Ok(vec![(PARAM_API_KEY.to_string(), key.clone())]),
            (AuthMode::Password { username, .. }, Some(SaltToken { salt, token })) => Ok(vec![
                (PARAM_USERNAME.to_string(), username.clone()),
                (PARAM_TOKEN.to_string(), token),
                (PARAM_SALT.to_string(), salt),
            ]),
            (AuthMode::Password { .. }, None) => Err(Error::new(ErrorKind::CryptoUnavailable(
                "password authentication requires a salt".to_string(),
            ))),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn config_error(message: &str) -> Error {
    Error::new(ErrorKind::Config(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(api_key: Option<&str>, username: Option<&str>, password: Option<&str>) -> Result<AuthMode> {
        let config = ClientConfig {
            api_key: api_key.map(String::from),
            username: username.map(String::from),
            password: password.map(String::from),
            ..ClientConfig::default()
        };
        AuthMode::resolve(&config)
    }

    #[test]
    fn test_api_key_mode() {
        let mode = resolve(Some("k"), None, None).unwrap();
        assert!(mode.is_api_key());
        assert_eq!(mode.username(), None);
    }

    #[test]
    fn test_password_mode() {
        let mode = resolve(None, Some("alice"), Some("sesame")).unwrap();
        assert_eq!(
            mode,
            AuthMode::Password {
                username: "alice".into(),
                password: "sesame".into()
            }
        );
        assert_eq!(mode.username(), Some("alice"));
    }

    #[test]
    fn test_invalid_combinations() {
        let cases = [
            (Some("k"), Some("alice"), Some("sesame")),
            (Some("k"), Some("alice"), None),
            (Some("k"), None, Some("sesame")),
            (None, Some("alice"), None),
            (None, None, Some("sesame")),
            (None, None, None),
        ];
        for (key, user, pass) in cases {
            let err = resolve(key, user, pass).unwrap_err();
            assert!(err.is_config_error(), "{key:?} {user:?} {pass:?}");
        }
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        assert!(resolve(Some(""), Some("alice"), Some("sesame")).is_ok());
        assert!(resolve(Some("k"), Some(""), Some("")).is_ok());
        assert!(resolve(None, Some("alice"), Some("")).is_err());
    }

    #[test]
    fn test_auth_pairs() {
        let mode = AuthMode::ApiKey { key: "k".into() };
        let pairs = mode.to_pairs(None).unwrap();
        assert_eq!(pairs, vec![("apiKey".to_string(), "k".to_string())]);

        let mode = AuthMode::Password {
            username: "demo".into(),
            password: "demo".into(),
        };
        let pairs = mode
            .to_pairs(Some(SaltToken::derive("demo", "c19b2d")))
            .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("u".to_string(), "demo".to_string()),
                ("t".to_string(), "4aa44610e7c8b09fa33569f2182aa7a9".to_string()),
                ("s".to_string(), "c19b2d".to_string()),
            ]
        );
        assert!(mode.to_pairs(None).is_err());
    }

    #[test]
    fn test_debug_redacts() {
        let mode = AuthMode::Password {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{:?}", mode);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));

        let debug = format!("{:?}", AuthMode::ApiKey { key: "secret-key".into() });
        assert!(!debug.contains("secret-key"));
    }
}
