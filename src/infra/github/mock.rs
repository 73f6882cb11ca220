//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of the GitHub REST calls
//! made while collecting credits.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! let ctx = mock.repo("owner", "repo");
//!
//! // Contributor listing, page by page
//! ctx.contributors_page(1, &["alice", "bob"], true).await;
//! ctx.contributors_page(2, &["carol"], false).await;
//! ctx.contributors_no_content().await;
//! ctx.contributors_rate_limited(1_700_000_000).await;
//!
//! // User profiles (server-level, not repo-scoped)
//! mock.user("alice").name("Alice A").get().await;
//! mock.user("bob").get().await; // null name
//! mock.user("ghost").get_not_found().await;
//! ```

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::client::GitHubClient;

/// Create a mock contributor JSON object as returned by the list endpoint.
fn mock_contributor(login: &str, contributions: u64) -> serde_json::Value {
    json!({
        "login": login,
        "id": 1,
        "node_id": "U_test",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "url": format!("https://api.github.com/users/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "type": "User",
        "site_admin": false,
        "contributions": contributions
    })
}

/// Create a mock user JSON object as returned by `GET /users/{login}`.
fn mock_user(login: &str, name: Option<&str>) -> serde_json::Value {
    json!({
        "login": login,
        "id": 1,
        "node_id": "U_test",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "url": format!("https://api.github.com/users/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "type": "User",
        "site_admin": false,
        "name": name,
        "company": null,
        "blog": "",
        "location": null,
        "public_repos": 3,
        "followers": 0,
        "following": 0
    })
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest",
        "status": "404"
    }))
}

fn rate_limited(reset: u64) -> ResponseTemplate {
    ResponseTemplate::new(403)
        .insert_header("x-ratelimit-limit", "60")
        .insert_header("x-ratelimit-remaining", "0")
        .insert_header("x-ratelimit-reset", reset.to_string().as_str())
        .set_body_json(json!({
            "message": "API rate limit exceeded for 127.0.0.1.",
            "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
        }))
}

/// wiremock-based GitHub mock server for testing.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get an authenticated GitHubClient configured to use this mock server.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(&self.server.uri(), Some("test-token")).unwrap()
    }

    /// Get a GitHubClient without a token.
    pub fn anonymous_client(&self) -> GitHubClient {
        GitHubClient::new(&self.server.uri(), None).unwrap()
    }

    /// Create a repository context for building mocks.
    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            repo,
        }
    }

    /// Create a user profile mock builder.
    pub fn user<'a>(&'a self, login: &'a str) -> MockUserBuilder<'a> {
        MockUserBuilder {
            server: &self.server,
            login,
            name: None,
            auth: AuthExpectation::Any,
            expected_calls: None,
        }
    }

    /// All requests received so far, in arrival order.
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

// ============ Builder Pattern API ============

/// Repository context for building mocks.
pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
}

impl MockRepoContext<'_> {
    fn contributors_path(&self) -> String {
        format!("/repos/{}/{}/contributors", self.owner, self.repo)
    }

    /// Mock one page of the contributors listing.
    ///
    /// Page 1 matches the initial request (no `page` parameter). When
    /// `has_next` is set, the response links to `page + 1`. Contribution
    /// counts descend from the page size so the list looks like GitHub's
    /// most-active-first ordering.
    pub async fn contributors_page(&self, page: u32, logins: &[&str], has_next: bool) {
        let body: Vec<serde_json::Value> = logins
            .iter()
            .enumerate()
            .map(|(i, login)| mock_contributor(login, (logins.len() - i) as u64))
            .collect();

        let mut response = ResponseTemplate::new(200).set_body_json(body);
        if has_next {
            let link = format!(
                "<{}{}?per_page=100&page={}>; rel=\"next\"",
                self.server.uri(),
                self.contributors_path(),
                page + 1
            );
            response = response.insert_header("link", link.as_str());
        }

        let mock = Mock::given(method("GET"))
            .and(path(self.contributors_path()))
            .and(query_param("per_page", "100"));
        let mock = if page == 1 {
            mock.and(query_param_is_missing("page"))
        } else {
            mock.and(query_param("page", page.to_string()))
        };

        mock.respond_with(response).mount(self.server).await;
    }

    /// Mock the 204 reply GitHub sends for an empty repository.
    pub async fn contributors_no_content(&self) {
        Mock::given(method("GET"))
            .and(path(self.contributors_path()))
            .respond_with(ResponseTemplate::new(204))
            .mount(self.server)
            .await;
    }

    /// Mock a 404 for the contributors listing.
    pub async fn contributors_not_found(&self) {
        Mock::given(method("GET"))
            .and(path(self.contributors_path()))
            .respond_with(not_found())
            .mount(self.server)
            .await;
    }

    /// Mock an exhausted rate limit for the contributors listing.
    pub async fn contributors_rate_limited(&self, reset: u64) {
        Mock::given(method("GET"))
            .and(path(self.contributors_path()))
            .respond_with(rate_limited(reset))
            .mount(self.server)
            .await;
    }
}

/// How a user mock constrains the `Authorization` header.
enum AuthExpectation<'a> {
    Any,
    Token(&'a str),
    Anonymous,
}

/// Builder for `GET /users/{login}` mocks.
pub struct MockUserBuilder<'a> {
    server: &'a MockServer,
    login: &'a str,
    name: Option<&'a str>,
    auth: AuthExpectation<'a>,
    expected_calls: Option<u64>,
}

impl<'a> MockUserBuilder<'a> {
    /// Set the profile name (default: `null`).
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Only match requests carrying `Authorization: Bearer <token>`.
    pub fn expect_token(mut self, token: &'a str) -> Self {
        self.auth = AuthExpectation::Token(token);
        self
    }

    /// Only match requests without an `Authorization` header.
    pub fn expect_anonymous(mut self) -> Self {
        self.auth = AuthExpectation::Anonymous;
        self
    }

    /// Verify on drop that the profile was requested exactly `n` times.
    pub fn expect_calls(mut self, n: u64) -> Self {
        self.expected_calls = Some(n);
        self
    }

    fn mock(&self) -> wiremock::MockBuilder {
        let mock =
            Mock::given(method("GET")).and(path(format!("/users/{}", self.login)));
        match self.auth {
            AuthExpectation::Any => mock,
            AuthExpectation::Token(token) => {
                mock.and(header("authorization", format!("Bearer {token}").as_str()))
            }
            AuthExpectation::Anonymous => {
                mock.and(|req: &Request| !req.headers.contains_key("authorization"))
            }
        }
    }

    /// Mock a successful profile lookup.
    pub async fn get(self) {
        let mut mock = self
            .mock()
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_user(self.login, self.name)));
        if let Some(n) = self.expected_calls {
            mock = mock.expect(n);
        }
        mock.mount(self.server).await;
    }

    /// Mock a 404 for the profile lookup.
    pub async fn get_not_found(self) {
        self.mock()
            .respond_with(not_found())
            .mount(self.server)
            .await;
    }

    /// Mock an exhausted rate limit for the profile lookup.
    pub async fn get_rate_limited(self) {
        self.mock()
            .respond_with(rate_limited(1_700_000_000))
            .mount(self.server)
            .await;
    }
}
