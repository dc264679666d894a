use log::trace;

pub(crate) mod rakuten;

use crate::{Error, ErrorKind};

/// An outbound HTTP request, produced by a [`RequestFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    uri: String,
}

impl Request {
    /// Creates a request for `method` against `uri`.
    pub fn new<M: Into<String>, U: Into<String>>(method: M, uri: U) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
        }
    }

    /// The HTTP method, such as `GET`.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The full target URI including the query string.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// The status and body of a response received by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    /// Creates a response with the HTTP `status` and textual `body`.
    pub fn new<B: Into<String>>(status: u16, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// The response body as text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Sends a single request and returns the single response for it.
///
/// Any timeout, retry or cancellation policy belongs to the implementation. Failures to complete
/// the exchange are reported with [`ErrorKind::Transport`]; a response with an error status is
/// still an `Ok` response.
pub trait Transport {
    /// # Errors
    ///
    /// An `Err` is returned when the request could not be sent or the response could not be read.
    fn send(&self, request: &Request) -> Result<Response, Error>;
}

/// Builds outbound requests from a method and target URI.
pub trait RequestFactory {
    /// Creates a request for `method` against `uri`.
    fn create(&self, method: &str, uri: &str) -> Request;
}

/// The default [`RequestFactory`], creating plain requests without extra headers.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    fn create(&self, method: &str, uri: &str) -> Request {
        Request::new(method, uri)
    }
}

impl Transport for reqwest::blocking::Client {
    fn send(&self, request: &Request) -> Result<Response, Error> {
        let method = reqwest::Method::from_bytes(request.method().as_bytes())
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))?;

        trace!("{} {}", method, request.uri());

        let resp = self
            .request(method, request.uri())
            .send()
            .map_err(transport_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(transport_error)?;

        Ok(Response::new(status, body))
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    let code = err.status().map(|s| i64::from(s.as_u16()));
    Error::new(ErrorKind::Transport, err.to_string())
        .with_code(code)
        .with_source(err)
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &Request) -> Result<Response, Error> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &Request) -> Result<Response, Error> {
        (**self).send(request)
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_uri, impl_response_producer, MockClient, NetworkErrorProducer, Producer, URI_SINK,
};
