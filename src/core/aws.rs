//! AWS SSO sessions from the shared AWS config file.
//!
//! Only `[sso-session NAME]` sections are read; profiles are ignored.

use crate::core::dirs::get_aws_config_path;
use crate::core::error::{LazyTfError, Result};
use crate::core::executor::{execute_streaming, CommandStream};
use serde::Serialize;

pub const AWS_BIN: &str = "aws";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SsoSession {
    pub name: String,
    pub start_url: String,
    pub region: String,
    pub scopes: String,
}

/// Parses `[sso-session ...]` sections out of AWS config text.
pub fn parse_sso_sessions(content: &str) -> Vec<SsoSession> {
    let mut sessions: Vec<SsoSession> = Vec::new();
    let mut in_session = false;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            in_session = false;
            if let Some(name) = line
                .strip_prefix("[sso-session ")
                .and_then(|rest| rest.strip_suffix(']'))
            {
                sessions.push(SsoSession {
                    name: name.trim().to_string(),
                    ..Default::default()
                });
                in_session = true;
            }
            continue;
        }

        let (true, Some(session)) = (in_session, sessions.last_mut()) else {
            continue;
        };
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "sso_start_url" => session.start_url = value,
            "sso_region" => session.region = value,
            "sso_registration_scopes" => session.scopes = value,
            _ => {}
        }
    }

    sessions
}

/// Reads the SSO sessions defined in `~/.aws/config` (or `$AWS_CONFIG_FILE`).
pub fn discover_sso_sessions() -> Result<Vec<SsoSession>> {
    let path = get_aws_config_path()?;
    let content =
        std::fs::read_to_string(&path).map_err(|e| LazyTfError::aws_config_read_failed(&path, e))?;
    let sessions = parse_sso_sessions(&content);
    log::debug!("Found {} SSO sessions in {}", sessions.len(), path.display());
    Ok(sessions)
}

pub fn sso_login_args(session: &SsoSession) -> Vec<String> {
    vec![
        "sso".to_string(),
        "login".to_string(),
        "--sso-session".to_string(),
        session.name.clone(),
    ]
}

/// Runs `aws sso login --sso-session NAME`, which opens a browser.
pub fn run_sso_login(session: &SsoSession) -> CommandStream {
    execute_streaming(AWS_BIN, &sso_login_args(session), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# shared config
[default]
region = eu-west-1

[sso-session acme]
sso_start_url = https://acme.awsapps.com/start
sso_region = eu-west-1
sso_registration_scopes = sso:account:access

[profile dev]
sso_session = acme
sso_region = us-east-1

[sso-session sandbox]
sso_start_url=https://sandbox.awsapps.com/start
"#;

    #[test]
    fn test_parse_sso_sessions() {
        let sessions = parse_sso_sessions(SAMPLE);
        assert_eq!(sessions.len(), 2);

        assert_eq!(sessions[0].name, "acme");
        assert_eq!(sessions[0].start_url, "https://acme.awsapps.com/start");
        assert_eq!(sessions[0].region, "eu-west-1");
        assert_eq!(sessions[0].scopes, "sso:account:access");

        assert_eq!(sessions[1].name, "sandbox");
        assert_eq!(sessions[1].start_url, "https://sandbox.awsapps.com/start");
        assert!(sessions[1].region.is_empty());
    }

    #[test]
    fn test_profile_keys_do_not_leak_into_sessions() {
        let sessions = parse_sso_sessions(SAMPLE);
        assert_eq!(sessions[0].region, "eu-west-1");
    }

    #[test]
    fn test_parse_empty_config() {
        assert!(parse_sso_sessions("").is_empty());
        assert!(parse_sso_sessions("[default]\nregion = x\n").is_empty());
    }

    #[test]
    fn test_sso_login_args() {
        let session = SsoSession {
            name: "acme".to_string(),
            ..Default::default()
        };
        assert_eq!(
            sso_login_args(&session),
            vec!["sso", "login", "--sso-session", "acme"]
        );
    }
}
