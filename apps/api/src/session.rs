//! Current-user lookup. Sessions are issued by the external identity service and
//! mirrored into Redis as `session:<token>` → user id.

use anyhow::Result;
use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use redis::AsyncCommands;
use tracing::debug;

const SESSION_COOKIE: &str = "session";

#[async_trait]
pub trait SessionLookup: Send + Sync {
    /// The user id bound to `token`, or `None` for an unknown or expired session.
    async fn current_user(&self, token: &str) -> Result<Option<String>>;
}

pub struct RedisSessions {
    client: redis::Client,
}

impl RedisSessions {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionLookup for RedisSessions {
    async fn current_user(&self, token: &str) -> Result<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let user_id: Option<String> = conn.get(format!("session:{token}")).await?;
        debug!("Session lookup resolved: {}", user_id.is_some());
        Ok(user_id)
    }
}

/// Extracts the session token from `Authorization: Bearer <token>` or the `session` cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Resolves the signed-in user for a request, if any.
pub async fn current_user(
    sessions: &dyn SessionLookup,
    headers: &HeaderMap,
) -> Result<Option<String>> {
    match session_token(headers) {
        Some(token) => sessions.current_user(&token).await,
        None => Ok(None),
    }
}


#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::testing::StaticSessions;
    use super::*;

    #[test]
    fn test_bearer_token_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_cookie_token_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session=tok-9; lang=en"),
        );
        assert_eq!(session_token(&headers), Some("tok-9".to_string()));
    }

    #[test]
    fn test_no_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("session="));
        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_current_user_resolves_known_token() {
        let sessions = StaticSessions::with("tok", "user-3");
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));

        let user = current_user(&sessions, &headers).await.unwrap();
        assert_eq!(user, Some("user-3".to_string()));

        let user = current_user(&sessions, &HeaderMap::new()).await.unwrap();
        assert_eq!(user, None);
    }
}
