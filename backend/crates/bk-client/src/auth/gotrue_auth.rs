use crate::{AuthBackend, AuthUser, BackendClient, ClientResult, Session};

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Auth endpoints of the hosted backend (`/auth/v1`)
pub struct GoTrueAuth {
    client: BackendClient,
}

impl GoTrueAuth {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthBackend for GoTrueAuth {
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        let req = self
            .client
            .request(Method::POST, "/auth/v1/token?grant_type=password", None)
            .json(&Credentials { email, password });

        let session: Session = self.client.execute_json(req).await?;
        debug!("Signed in as {}", session.user.id);
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> ClientResult<Option<Session>> {
        let req = self
            .client
            .request(Method::POST, "/auth/v1/signup", None)
            .json(&Credentials { email, password });

        let body = self.client.execute(req).await?.unwrap_or(Value::Null);

        // Without auto-confirmation the response is the bare user
        if body.get("access_token").is_none() {
            debug!("Sign-up accepted, awaiting e-mail confirmation");
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(body)?))
    }

    async fn sign_out(&self, session: &Session) -> ClientResult<()> {
        let req = self.client.request(
            Method::POST,
            "/auth/v1/logout",
            Some(&session.access_token),
        );

        self.client.execute(req).await?;
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> ClientResult<AuthUser> {
        let req = self
            .client
            .request(Method::GET, "/auth/v1/user", Some(access_token));

        self.client.execute_json(req).await
    }
}
