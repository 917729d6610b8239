//! Boundary with the external tax information provider.
//!
//! The provider is queried with the simplified CUIT digits substituted into a
//! configured URI template, authenticating with `UserName`/`Password`
//! headers. This module only builds that request description; performing the
//! HTTP call and interpreting the response belong to the caller.
//!
//! Configuration is deserialized from whatever source the host application
//! uses. Keys are PascalCase so an existing `TaxInfoProvider` settings section
//! maps directly:
//!
//! ```rust
//! use cuit_number::CuitNumber;
//! use cuit_number::provider::TaxInfoProviderConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config: TaxInfoProviderConfig = serde_json::from_str(r#"{
//!         "UriTemplate": "https://{host}/api/v1/taxinfo/{cuit}",
//!         "Host": "taxinfo.example.com",
//!         "Username": "service",
//!         "Password": "secret"
//!     }"#)?;
//!     config.validate()?;
//!
//!     let cuit = CuitNumber::new("20-31111111-7".to_string())?;
//!     let request = config.request_for(&cuit)?;
//!     assert_eq!(request.url, "https://taxinfo.example.com/api/v1/taxinfo/20311111117");
//!     Ok(())
//! }
//! ```

use crate::cuit::CuitNumber;
use crate::error::{ConfigError, ConfigResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header carrying the provider user name.
pub const USERNAME_HEADER: &str = "UserName";

/// Header carrying the provider password.
pub const PASSWORD_HEADER: &str = "Password";

const HOST_PARAMETER: &str = "host";
const CUIT_PARAMETER: &str = "cuit";

/// Settings for the tax information provider.
///
/// `uri_template` supports simple string expansion only: `{host}` and
/// `{cuit}`, each substituted as-is. RFC 6570 operator forms such as
/// `{+host}`, `{?cuit}` or `{/cuit}` and multi-variable expressions are not
/// expanded and are rejected as [`ConfigError::UnknownParameter`]; write the
/// literal separators into the template instead.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxInfoProviderConfig {
    /// URI template with `{host}` and `{cuit}` parameters
    pub uri_template: String,
    pub host: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for TaxInfoProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaxInfoProviderConfig")
            .field("uri_template", &self.uri_template)
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl TaxInfoProviderConfig {
    /// Validate the configuration.
    ///
    /// Ensures the template and host are present and that the template only
    /// references parameters this module can expand, including `{cuit}`.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.uri_template.is_empty() {
            return Err(ConfigError::MissingSetting {
                setting: "UriTemplate",
            });
        }

        if self.host.is_empty() {
            return Err(ConfigError::MissingSetting { setting: "Host" });
        }

        let parameters = template_parameters(&self.uri_template)?;
        if !parameters.contains(&CUIT_PARAMETER) {
            return Err(ConfigError::MissingCuitParameter {
                template: self.uri_template.clone(),
            });
        }

        Ok(())
    }

    /// Expand the URI template for a CUIT.
    ///
    /// The provider receives the simplified digits, never the dashed form.
    pub fn resolve_url(&self, cuit: &CuitNumber) -> ConfigResult<String> {
        let mut url = String::with_capacity(self.uri_template.len() + self.host.len());
        let mut rest = self.uri_template.as_str();

        while let Some(start) = rest.find('{') {
            url.push_str(&rest[..start]);
            let (parameter, after) = split_expression(&self.uri_template, &rest[start + 1..])?;

            match parameter {
                HOST_PARAMETER => url.push_str(&self.host),
                CUIT_PARAMETER => url.push_str(cuit.simplified_value()),
                other => {
                    return Err(ConfigError::UnknownParameter {
                        template: self.uri_template.clone(),
                        parameter: other.to_string(),
                    });
                }
            }
            rest = after;
        }
        url.push_str(rest);

        Ok(url)
    }

    /// Describe the request to send to the provider for `cuit`.
    pub fn request_for(&self, cuit: &CuitNumber) -> ConfigResult<TaxInfoRequest> {
        let url = self.resolve_url(cuit)?;
        debug!("Prepared tax info request for CUIT {} at {}", cuit, url);

        Ok(TaxInfoRequest {
            url,
            headers: vec![
                (USERNAME_HEADER.to_string(), self.username.clone()),
                (PASSWORD_HEADER.to_string(), self.password.clone()),
            ],
        })
    }
}

/// A fully resolved provider request, ready for an HTTP client.
#[derive(Clone, PartialEq, Eq)]
pub struct TaxInfoRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl TaxInfoRequest {
    /// Look up a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for TaxInfoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key == PASSWORD_HEADER {
                    (key.as_str(), "<redacted>")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("TaxInfoRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .finish()
    }
}

/// Split `name}rest` into `name` and `rest`.
fn split_expression<'a>(template: &str, expression: &'a str) -> ConfigResult<(&'a str, &'a str)> {
    let end = expression
        .find('}')
        .ok_or_else(|| ConfigError::UnterminatedExpression {
            template: template.to_string(),
        })?;
    Ok((&expression[..end], &expression[end + 1..]))
}

/// Every parameter referenced by `template`, rejecting unknown ones.
fn template_parameters(template: &str) -> ConfigResult<Vec<&str>> {
    let mut parameters = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let (parameter, after) = split_expression(template, &rest[start + 1..])?;
        if parameter != HOST_PARAMETER && parameter != CUIT_PARAMETER {
            return Err(ConfigError::UnknownParameter {
                template: template.to_string(),
                parameter: parameter.to_string(),
            });
        }
        parameters.push(parameter);
        rest = after;
    }

    Ok(parameters)
}
