use std::collections::HashMap;
use std::sync::Arc;

use artisan_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::AccountLookup;
use auth::AccountRecord;
use auth::Authenticator;
use auth::JwtHandler;
use auth::LookupError;
use auth::PasswordHasher;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

pub const ARTISAN_ID: &str = "7f1c9a4e-2b36-4d3e-9a51-0c8e6f2d1b77";
pub const ARTISAN_EMAIL: &str = "a@x.com";
pub const ARTISAN_PASSWORD: &str = "pass_word!";

/// Account store kept in memory, keyed by exact email
pub struct InMemoryArtisans {
    records: HashMap<String, AccountRecord>,
}

impl InMemoryArtisans {
    pub fn with_artisan(id: &str, email: &str, password: &str) -> Self {
        let hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");

        let mut records = HashMap::new();
        records.insert(email.to_string(), AccountRecord::new(id, email, hash));

        Self { records }
    }
}

#[async_trait]
impl AccountLookup for InMemoryArtisans {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, LookupError> {
        Ok(self.records.get(email).cloned())
    }
}

/// Account store that is always down
pub struct UnavailableArtisans;

#[async_trait]
impl AccountLookup for UnavailableArtisans {
    async fn find_by_email(&self, _email: &str) -> Result<Option<AccountRecord>, LookupError> {
        Err(LookupError::Unavailable("connection refused".to_string()))
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application with one known artisan
    pub async fn spawn() -> Self {
        Self::spawn_with(Arc::new(InMemoryArtisans::with_artisan(
            ARTISAN_ID,
            ARTISAN_EMAIL,
            ARTISAN_PASSWORD,
        )))
        .await
    }

    /// Spawn the application in a background task on top of the given account store
    pub async fn spawn_with(accounts: Arc<dyn AccountLookup>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let jwt_handler = Arc::new(JwtHandler::new(JWT_SECRET));
        let authenticator = Arc::new(Authenticator::new(
            accounts,
            Arc::new(PasswordHasher::new()),
            jwt_handler.clone(),
            chrono::Duration::hours(TOKEN_LIFETIME_HOURS),
        ));

        let application = create_router(authenticator, jwt_handler);
        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Log in and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
