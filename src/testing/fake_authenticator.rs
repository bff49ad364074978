use std::sync::{Arc, Mutex};

use url::Url;

use crate::domain::{AppError, Credentials, Session};
use crate::ports::{Authenticator, CredentialPrompt};

/// Authenticator accepting a single password and recording session lifecycle.
#[derive(Debug, Clone)]
pub struct FakeAuthenticator {
    accepted_password: String,
    pub logins: Arc<Mutex<Vec<String>>>,
    pub logouts: Arc<Mutex<Vec<String>>>,
}

impl FakeAuthenticator {
    pub fn accepting(password: &str) -> Self {
        Self {
            accepted_password: password.to_string(),
            logins: Arc::new(Mutex::new(vec![])),
            logouts: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn logged_in_users(&self) -> Vec<String> {
        self.logins.lock().unwrap().clone()
    }

    pub fn closed_sessions(&self) -> Vec<String> {
        self.logouts.lock().unwrap().clone()
    }
}

impl Authenticator for FakeAuthenticator {
    fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        if credentials.password != self.accepted_password {
            return Err(AppError::LoginFailed("INVALID_LOGIN".into()));
        }
        self.logins.lock().unwrap().push(credentials.username.clone());
        Ok(Session {
            session_id: format!("session-{}", credentials.username),
            instance_url: Url::parse("https://fake.example.com").unwrap(),
            api_version: "32.0".into(),
        })
    }

    fn logout(&self, session: &Session) -> Result<(), AppError> {
        self.logouts.lock().unwrap().push(session.session_id.clone());
        Ok(())
    }
}

/// Prompt answering with fixed values and counting how often it was asked.
#[derive(Debug, Clone)]
pub struct FakePrompt {
    username: String,
    password: String,
    pub asked: Arc<Mutex<Vec<&'static str>>>,
}

impl FakePrompt {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            asked: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn questions(&self) -> Vec<&'static str> {
        self.asked.lock().unwrap().clone()
    }
}

impl CredentialPrompt for FakePrompt {
    fn username(&self) -> Result<String, AppError> {
        self.asked.lock().unwrap().push("username");
        Ok(self.username.clone())
    }

    fn password(&self) -> Result<String, AppError> {
        self.asked.lock().unwrap().push("password");
        Ok(self.password.clone())
    }
}
