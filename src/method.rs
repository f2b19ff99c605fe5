//! HTTP method as a typed enum.
//!
//! Only the methods the registry routes on are represented. Anything else
//! the client sends is answered with `405 Method Not Allowed` (or `404` when
//! the path is unknown) before it reaches a handler.

use std::fmt;

/// A routable HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Delete,
    Get,
    Post,
    Put,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::Get    => "GET",
            Self::Post   => "POST",
            Self::Put    => "PUT",
        }
    }

    /// Maps an incoming `http::Method`. `None` for methods with no route table.
    pub fn from_http(method: &http::Method) -> Option<Self> {
        match *method {
            http::Method::DELETE => Some(Self::Delete),
            http::Method::GET    => Some(Self::Get),
            http::Method::POST   => Some(Self::Post),
            http::Method::PUT    => Some(Self::Put),
            _                    => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_routable_methods() {
        assert_eq!(Method::from_http(&http::Method::GET), Some(Method::Get));
        assert_eq!(Method::from_http(&http::Method::PUT), Some(Method::Put));
        assert_eq!(Method::from_http(&http::Method::PATCH), None);
    }
}
