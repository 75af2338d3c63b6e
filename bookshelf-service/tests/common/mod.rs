use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use bookshelf_service::book::errors::BookError;
use bookshelf_service::book::models::Book;
use bookshelf_service::book::models::BookDraft;
use bookshelf_service::book::models::BookId;
use bookshelf_service::book::ports::BookRepository;
use bookshelf_service::category::errors::CategoryError;
use bookshelf_service::category::models::Category;
use bookshelf_service::category::models::CategoryDraft;
use bookshelf_service::category::models::CategoryId;
use bookshelf_service::category::ports::CategoryRepository;
use bookshelf_service::domain::book::service::BookService;
use bookshelf_service::domain::category::service::CategoryService;
use bookshelf_service::domain::user::service::AuthService;
use bookshelf_service::inbound::http::router::create_router;
use bookshelf_service::user::errors::AuthError;
use bookshelf_service::user::models::EmailAddress;
use bookshelf_service::user::models::NewUser;
use bookshelf_service::user::models::Role;
use bookshelf_service::user::models::User;
use bookshelf_service::user::models::UserId;
use bookshelf_service::user::models::UserName;
use bookshelf_service::user::ports::AuthServicePort;
use bookshelf_service::user::ports::UserRepository;
use chrono::Utc;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store so tests exercise the full HTTP stack without
/// a database.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail(user.email.as_str().to_string()));
        }
        let now = Utc::now();
        let created = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn admin_exists(&self) -> Result<bool, AuthError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.role == Role::Admin))
    }
}

pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
    next_id: AtomicI64,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, draft: &CategoryDraft) -> Result<Category, CategoryError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name == draft.name) {
            return Err(CategoryError::DuplicateName(draft.name.clone()));
        }
        let now = Utc::now();
        let created = Category {
            id: CategoryId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: draft.name.clone(),
            description: draft.description.clone(),
            created_at: now,
            updated_at: now,
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CategoryError> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: CategoryId,
        draft: &CategoryDraft,
    ) -> Result<Option<Category>, CategoryError> {
        let mut categories = self.categories.lock().unwrap();
        if categories
            .iter()
            .any(|c| c.id != id && c.name == draft.name)
        {
            return Err(CategoryError::DuplicateName(draft.name.clone()));
        }
        match categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.name = draft.name.clone();
                category.description = draft.description.clone();
                category.updated_at = Utc::now();
                Ok(Some(category.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryError> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() < before)
    }
}

pub struct InMemoryBookRepository {
    books: Mutex<Vec<Book>>,
    next_id: AtomicI64,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(
        &self,
        user_id: UserId,
        draft: &BookDraft,
        categories: Vec<Category>,
    ) -> Result<Book, BookError> {
        let now = Utc::now();
        let created = Book {
            id: BookId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: draft.title.clone(),
            author: draft.author.clone(),
            isbn: draft.isbn.clone(),
            publish_year: draft.publish_year,
            description: draft.description.clone(),
            user_id,
            categories,
            created_at: now,
            updated_at: now,
        };
        self.books.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_all(&self, user_id: UserId) -> Result<Vec<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: BookId, user_id: UserId) -> Result<Option<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id && b.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        id: BookId,
        user_id: UserId,
        draft: &BookDraft,
        categories: Vec<Category>,
    ) -> Result<Option<Book>, BookError> {
        let mut books = self.books.lock().unwrap();
        match books
            .iter_mut()
            .find(|b| b.id == id && b.user_id == user_id)
        {
            Some(book) => {
                book.title = draft.title.clone();
                book.author = draft.author.clone();
                book.isbn = draft.isbn.clone();
                book.publish_year = draft.publish_year;
                book.description = draft.description.clone();
                book.categories = categories;
                book.updated_at = Utc::now();
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: BookId, user_id: UserId) -> Result<bool, BookError> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|b| !(b.id == id && b.user_id == user_id));
        Ok(books.len() < before)
    }

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.categories.iter().any(|c| c.id == category_id))
            .cloned()
            .collect())
    }
}

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    auth_service: Arc<AuthService<InMemoryUserRepository>>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let category_repository = Arc::new(InMemoryCategoryRepository::new());
        let book_repository = Arc::new(InMemoryBookRepository::new());

        let auth_service = Arc::new(AuthService::new(
            user_repository,
            Arc::clone(&authenticator),
            24,
        ));
        let category_service = Arc::new(CategoryService::new(Arc::clone(&category_repository)));
        let book_service = Arc::new(BookService::new(book_repository, category_repository));

        let router = create_router(
            Arc::clone(&auth_service) as Arc<dyn AuthServicePort>,
            book_service,
            category_service,
            authenticator,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            auth_service,
        }
    }

    /// Create the bootstrap admin and return a token for it
    pub async fn seed_admin(&self) -> String {
        let name = UserName::new("Admin".to_string()).unwrap();
        let email = EmailAddress::new("admin@example.com".to_string()).unwrap();
        self.auth_service
            .ensure_admin(name, email, "admin123")
            .await
            .expect("Failed to seed admin");

        let outcome = self
            .auth_service
            .login("admin@example.com", "admin123")
            .await
            .expect("Failed to log in as admin");
        outcome.token
    }

    /// Register a user through the API and return the bearer token
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
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
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}
