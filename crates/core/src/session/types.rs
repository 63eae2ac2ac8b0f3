use std::collections::HashMap;

/// Request information the session gate looks at.
#[derive(Debug, Clone, Default)]
pub struct SessionRequest {
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
}

impl SessionRequest {
    /// Build a request from `(name, value)` pairs, lowercasing names.
    pub fn from_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
                .collect(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}
