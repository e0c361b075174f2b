use std::str::FromStr;
use std::sync::Arc;

use auth::HashingCost;
use auth::PasswordHasher;
use auth::TokenService;
use menu_service::domain::authentication::service::Authenticator;
use menu_service::domain::category::service::CategoryService;
use menu_service::domain::food::service::FoodService;
use menu_service::domain::user::service::UserService;
use menu_service::inbound::http::router::create_router;
use menu_service::inbound::http::router::AppState;
use menu_service::outbound::database;
use menu_service::outbound::repositories::SqliteCategoryRepository;
use menu_service::outbound::repositories::SqliteFoodRepository;
use menu_service::outbound::repositories::SqliteUserRepository;
use menu_service::outbound::seed::SeedData;
use menu_service::outbound::seed::Seeder;
use serde_json::json;
use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_SECONDS: u64 = 3600;

const TEST_SEED: &str = r#"{
    "categories": [
        { "id": 1, "name": "Pizzas" },
        { "id": 2, "name": "Drinks" }
    ],
    "foods": [
        { "name": "Margherita", "price": 32.9, "category_id": 1 },
        { "name": "Cola", "price": 6.5, "category_id": 2 }
    ]
}"#;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application on a random port, backed by a fresh in-memory
    /// database holding two categories and two foods.
    pub async fn spawn() -> Self {
        let pool = test_pool().await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let category_repository = Arc::new(SqliteCategoryRepository::new(pool.clone()));
        let food_repository = Arc::new(SqliteFoodRepository::new(pool.clone()));

        Seeder::new(pool.clone())
            .seed(SeedData::from_json(TEST_SEED).unwrap())
            .await
            .expect("Failed to seed test database");

        // Minimum Argon2 cost keeps the suite fast.
        let password_hasher = PasswordHasher::new(HashingCost {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Invalid test hashing cost");

        let state = AppState {
            user_service: Arc::new(UserService::new(
                Arc::clone(&user_repository),
                password_hasher.clone(),
            )),
            authenticator: Arc::new(Authenticator::new(
                user_repository,
                password_hasher,
                TokenService::new(TEST_SECRET),
                TOKEN_TTL_SECONDS,
            )
            .expect("Failed to build authenticator")),
            category_service: Arc::new(CategoryService::new(category_repository)),
            food_service: Arc::new(FoodService::new(food_repository)),
        };

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(TEST_SECRET),
        }
    }

    /// Register a user and sign them in, returning the session token.
    pub async fn signed_in_user(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/users")
            .json(&json!({ "name": "Test User", "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = self
            .post("/signin")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");

        body["token"]
            .as_str()
            .expect("Sign-in returned no token")
            .to_string()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }
}

/// A single long-lived connection: every pooled connection to
/// `sqlite::memory:` would otherwise open its own empty database.
async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid SQLite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    database::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
