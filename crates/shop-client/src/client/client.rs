use crate::{AuthTokens, ClientError, ClientResult, Credentials, ProfileUpdate, Registration};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the storefront REST API
pub struct Client {
    pub base_url: String,
    pub access_token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:8080/api")
    /// * `access_token` - Optional access token sent as a bearer credential
    pub fn new(base_url: &str, access_token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            access_token: access_token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Replace the bearer credential used for subsequent requests.
    pub fn set_access_token(&mut self, access_token: Option<&str>) {
        self.access_token = access_token.map(String::from);
    }

    /// Endpoint URL under the base path, ending in `/`.
    ///
    /// Each segment is percent-encoded on its own, so ids cannot add path
    /// levels, a query or a fragment.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(format!("{}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| {
                ClientError::invalid_url(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments)
            .push("");

        Ok(url)
    }

    /// Build a request with optional bearer token
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        debug!("{method} {url}");

        let mut req = self.client.request(method, url);

        if let Some(ref token) = self.access_token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and turn non-2xx answers into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api(
                status.as_u16(),
                Self::error_message(status, &text),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Pull a human-readable message out of an error body.
    ///
    /// Looks at `detail`, `message` and `error` (string or `{message}`),
    /// falling back to the status reason.
    fn error_message(status: StatusCode, text: &str) -> String {
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        let Ok(body) = serde_json::from_str::<Value>(text) else {
            return reason.to_string();
        };

        ["detail", "message", "error"]
            .iter()
            .find_map(|key| match body.get(key) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Object(o)) => o
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(String::from),
                _ => None,
            })
            .unwrap_or_else(|| reason.to_string())
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Exchange credentials for a profile and token pair
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AuthTokens> {
        let req = self
            .request(Method::POST, self.endpoint(&["user", "login"])?)
            .json(credentials);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create an account; the server answers with profile and tokens
    pub async fn register(&self, registration: &Registration) -> ClientResult<AuthTokens> {
        let req = self
            .request(Method::POST, self.endpoint(&["user", "register"])?)
            .json(registration);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Update a user's profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<Value> {
        let id = update.id.to_string();
        let req = self
            .request(Method::PUT, self.endpoint(&["user", id.as_str()])?)
            .json(&update.body());
        self.execute(req).await
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Save the cart; the payload shape is owned by the caller
    pub async fn save_cart<T>(&self, cart: &T) -> ClientResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let req = self
            .request(Method::POST, self.endpoint(&["cart", "save"])?)
            .json(cart);
        self.execute(req).await
    }

    /// Get the current user's cart
    pub async fn get_cart(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, self.endpoint(&["cart"])?);
        self.execute(req).await
    }

    /// Add to a user's cart
    pub async fn add_cart(&self, user_id: i64) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct AddCartRequest {
            user_id: i64,
        }

        let req = self
            .request(Method::POST, self.endpoint(&["cart", "add"])?)
            .json(&AddCartRequest { user_id });
        self.execute(req).await
    }

    // =========================================================================
    // Home Feed Operations
    // =========================================================================

    /// New arrivals section
    pub async fn new_arrivals(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, self.endpoint(&["home", "new"])?);
        self.execute(req).await
    }

    /// Popular products section
    pub async fn hot_products(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, self.endpoint(&["home", "hot"])?);
        self.execute(req).await
    }

    /// Unread message count for a user
    pub async fn message_count(&self, user_id: i64) -> ClientResult<Value> {
        let mut url = self.endpoint(&["home", "message"])?;
        url.query_pairs_mut().append_pair("userId", &user_id.to_string());
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }

    /// Randomised product picks for the home page
    pub async fn home_products(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, self.endpoint(&["home", "products"])?);
        self.execute(req).await
    }

    /// Home page banner
    pub async fn home_banner(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, self.endpoint(&["home", "recommend"])?);
        self.execute(req).await
    }

    // =========================================================================
    // Order Notification Operations
    // =========================================================================

    /// Unread order notifications for a user
    pub async fn notifications(&self, user_id: i64) -> ClientResult<Value> {
        let mut url = self.endpoint(&["order", "notification"])?;
        url.query_pairs_mut().append_pair("userId", &user_id.to_string());
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }

    /// Mark all of a user's order notifications as read
    pub async fn mark_notifications_read(&self, user_id: i64) -> ClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct MarkRequest {
            user_id: i64,
        }

        let req = self
            .request(Method::PUT, self.endpoint(&["order", "mark-notification"])?)
            .json(&MarkRequest { user_id });
        self.execute(req).await
    }

    // =========================================================================
    // Question Operations
    // =========================================================================

    /// List the questions asked about a product
    pub async fn product_questions(&self, product_id: &str) -> ClientResult<Value> {
        let url = self.endpoint(&["question", "product", path_id(product_id)?, "list"])?;
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }

    /// Ask a question about a product
    pub async fn submit_question(&self, product_id: &str, content: &str) -> ClientResult<Value> {
        let url = self.endpoint(&["question", "product", path_id(product_id)?, "add"])?;
        let req = self
            .request(Method::POST, url)
            .json(&ContentRequest { content });
        self.execute(req).await
    }

    /// Answer a question
    pub async fn submit_answer(&self, question_id: &str, content: &str) -> ClientResult<Value> {
        let url = self.endpoint(&["question", "answer", path_id(question_id)?, "add"])?;
        let req = self
            .request(Method::POST, url)
            .json(&ContentRequest { content });
        self.execute(req).await
    }
}

#[derive(Serialize)]
struct ContentRequest<'a> {
    content: &'a str,
}

/// An id used as one path segment. Dot segments would be dropped from the
/// path, so they are refused along with the empty id.
fn path_id(id: &str) -> ClientResult<&str> {
    if matches!(id, "" | "." | "..") {
        return Err(ClientError::invalid_url(format!("'{id}' is not a usable path id")));
    }
    Ok(id)
}
