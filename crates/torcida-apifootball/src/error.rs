//! Error type for `torcida-apifootball`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The API key is absent or cannot be sent as a header.
  #[error("api key is missing or malformed")]
  ApiKey,

  /// The request exceeded the bounded timeout.
  #[error("request to the fixture provider timed out")]
  Timeout,

  /// Network-level failure other than a timeout.
  #[error("transport error: {0}")]
  Transport(#[source] reqwest::Error),

  /// The provider answered with a non-success HTTP status.
  #[error("unexpected http status: {0}")]
  Status(reqwest::StatusCode),

  /// The provider answered at the transport level but flagged an
  /// application error in its envelope.
  #[error("provider reported an error: {0}")]
  Remote(String),

  /// The response body did not match the expected envelope.
  #[error("decoding provider response: {0}")]
  Decode(#[source] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
