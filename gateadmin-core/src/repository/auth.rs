use crate::conf::Credentials;
use crate::error::ClientError;
use crate::repository::{ConfigRepository, paths};
use crate::transport::ExchangeRequest;
use http::header::SET_COOKIE;
use serde::Serialize;
use tracing::info;

pub const TOKEN_COOKIE: &str = "jwt";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    access_key: &'a str,
    secret_key: &'a str,
}

impl ConfigRepository {
    /// Exchanges credentials for a token and stores it in the session.
    ///
    /// Later calls on any transport sharing the session carry it as a bearer
    /// token. A successful response without a `jwt` cookie means the server
    /// has authentication disabled; the session is then left without a token.
    /// Rejected credentials yield [`ClientError::Unauthorized`].
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let body = LoginRequest {
            access_key: &credentials.access_key,
            secret_key: &credentials.secret_key,
        };
        let request = ExchangeRequest::post(paths::login()).with_json(&body)?;
        let response = self.transport.send(request).await?;

        let token = response
            .headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(token_from_cookie);

        match token {
            Some(token) => {
                self.session().set_token(token);
                info!(access_key = %credentials.access_key, "logged in to admin server");
            }
            // Servers without a signing secret accept every call unauthenticated.
            None => {
                self.session().clear_token();
                info!(
                    access_key = %credentials.access_key,
                    "admin server issued no token, authentication is disabled"
                );
            }
        }
        Ok(())
    }

    /// Forgets the session token locally.
    pub fn logout(&self) {
        self.session().clear_token();
    }
}

/// Value of the `jwt` pair in one `Set-Cookie` header, attributes dropped.
pub(crate) fn token_from_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    if name.trim() != TOKEN_COOKIE || value.is_empty() {
        return None;
    }
    Some(value.trim_matches('"').to_owned())
}
