//! Incoming HTTP request type.

use std::collections::HashMap;

/// An incoming HTTP request with its body fully buffered.
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request from a method token and a request target such as
    /// `/contact/get?id=7`.
    ///
    /// The server constructs requests itself; this constructor exists for
    /// tests and for driving a [`Router`](crate::Router) in-process.
    ///
    /// ```rust
    /// use contacts::Request;
    ///
    /// let req = Request::new("GET", "/contact/get?id=7", Vec::new());
    /// assert_eq!(req.path(), "/contact/get");
    /// assert_eq!(req.query("id"), Some("7"));
    /// ```
    pub fn new(method: &str, target: &str, body: impl Into<Vec<u8>>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };
        Self::from_parts(method.to_owned(), path.to_owned(), query, Vec::new(), body.into())
    }

    pub(crate) fn from_parts(
        method: String,
        path: String,
        raw_query: Option<&str>,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> Self {
        let query: Vec<(String, String)> = raw_query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self { method, path, query, headers, body, params: HashMap::new() }
    }

    /// Adds a header. Chainable, for building requests in tests.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first value of a query-string parameter, percent-decoded.
    ///
    /// `/contact/get?id=4&id=5` yields `Some("4")` for `"id"`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/static/{*path}`, `req.param("path")` on
    /// `/static/css/main.css` returns `Some("css/main.css")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }
}
