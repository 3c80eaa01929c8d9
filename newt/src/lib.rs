//! Static catalogue of HTTP status codes & their canonical reason phrases.
//!
//! The most notable item in `newt` is [`Status`];
//! a numeric status code split into its class digit and 2-digit detail.
//!
//! Every code registered by RFC2616 is catalogued here as a `const`, grouped
//! by class ([`info`], [`success`], [`redirect`], [`client`], [`server`]),
//! along with the common extensions from WebDAV, later RFCs and the large
//! HTTP vendors (Nginx, Microsoft, Apache, Twitter).
//!
//! ```
//! use newt::{client, Kind, Status};
//!
//! let status = Status::try_from(404).unwrap();
//! assert_eq!(status, client::NOT_FOUND);
//! assert_eq!(status.reason(), Some("Not Found"));
//! assert_eq!(status.kind(), Ok(Kind::ClientError));
//! assert!(status.is_error());
//!
//! // unknown codes fail the lookup rather than inventing a phrase
//! assert_eq!(Status::try_from(480).unwrap().reason(), None);
//! assert!(Status::try_from(1000).is_err());
//! ```
//!
//! ## Allocation
//! A status code is 2 bytes of plain data and every reason phrase is
//! `&'static str`; nothing in this crate allocates.
//!
//! `no_std` platforms are supported out of the box by disabling the `std`
//! default feature, and the optional `serde` feature (de)serializes statuses
//! to & from their bare numeric codes.

// x-release-please-start-version
#![doc(html_root_url = "https://docs.rs/newt/0.2.0")]
// x-release-please-end
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code, missing_copy_implementations))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

#[doc = newt_macros::rfc_2616_doc!("10.4")]
pub mod client;
#[doc = newt_macros::rfc_2616_doc!("10.1")]
pub mod info;
/// Classification of status codes by their class digit
pub mod kind;
#[doc = newt_macros::rfc_2616_doc!("10.3")]
pub mod redirect;
#[doc = newt_macros::rfc_2616_doc!("10.5")]
pub mod server;
/// The status code primitive & the errors produced when
/// looking one up or classifying it
pub mod status;
#[doc = newt_macros::rfc_2616_doc!("10.2")]
pub mod success;

#[doc(inline)]
pub use kind::Kind;
#[doc(inline)]
pub use status::{InvalidStatus, Status};

macro_rules! code {
  (rfc2616($section:literal) $name:ident = $c:literal*$d:literal) => {
    #[doc = newt_macros::rfc_2616_doc!($section)]
    #[allow(clippy::zero_prefixed_literal)]
    pub const $name: $crate::Status = $crate::Status::new($c, $d);
  };
  ($(#[$doc:meta])+ $name:ident = $c:literal*$d:literal) => {
    $(#[$doc])+
    #[allow(clippy::zero_prefixed_literal)]
    pub const $name: $crate::Status = $crate::Status::new($c, $d);
  };
}

pub(crate) use code;

#[cfg(test)]
mod tests {
  use itertools::Itertools;

  use crate::{client, info, redirect, server, success, Status};

  fn catalogue() -> Vec<(Status, &'static str)> {
    vec![(info::CONTINUE, "Continue"),
         (info::SWITCHING_PROTOCOLS, "Switching Protocols"),
         (info::PROCESSING, "Processing (WebDAV)"),
         (success::OK, "OK"),
         (success::CREATED, "Created"),
         (success::ACCEPTED, "Accepted"),
         (success::NON_AUTHORITATIVE_INFORMATION, "Non-Authoritative Information"),
         (success::NO_CONTENT, "No Content"),
         (success::RESET_CONTENT, "Reset Content"),
         (success::PARTIAL_CONTENT, "Partial Content"),
         (success::MULTI_STATUS, "Multi-Status (WebDAV)"),
         (success::ALREADY_REPORTED, "Already Reported (WebDAV)"),
         (success::IM_USED, "IM Used"),
         (redirect::MULTIPLE_CHOICES, "Multiple Choices"),
         (redirect::MOVED_PERMANENTLY, "Moved Permanently"),
         (redirect::FOUND, "Found"),
         (redirect::SEE_OTHER, "See Other"),
         (redirect::NOT_MODIFIED, "Not Modified"),
         (redirect::USE_PROXY, "Use Proxy"),
         (redirect::UNUSED, "(Unused)"),
         (redirect::TEMPORARY_REDIRECT, "Temporary Redirect"),
         (redirect::PERMANENT_REDIRECT, "Permanent Redirect (experimental)"),
         (client::BAD_REQUEST, "Bad Request"),
         (client::UNAUTHORIZED, "Unauthorized"),
         (client::PAYMENT_REQUIRED, "Payment Required"),
         (client::FORBIDDEN, "Forbidden"),
         (client::NOT_FOUND, "Not Found"),
         (client::METHOD_NOT_ALLOWED, "Method Not Allowed"),
         (client::NOT_ACCEPTABLE, "Not Acceptable"),
         (client::PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required"),
         (client::REQUEST_TIMEOUT, "Request Timeout"),
         (client::CONFLICT, "Conflict"),
         (client::GONE, "Gone"),
         (client::LENGTH_REQUIRED, "Length Required"),
         (client::PRECONDITION_FAILED, "Precondition Failed"),
         (client::REQUEST_ENTITY_TOO_LARGE, "Request Entity Too Large"),
         (client::REQUEST_URI_TOO_LONG, "Request-URI Too Long"),
         (client::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type"),
         (client::REQUESTED_RANGE_NOT_SATISFIABLE, "Requested Range Not Satisfiable"),
         (client::EXPECTATION_FAILED, "Expectation Failed"),
         (client::IM_A_TEAPOT, "I'm a teapot (RFC 2324)"),
         (client::ENHANCE_YOUR_CALM, "Enhance Your Calm (Twitter)"),
         (client::UNPROCESSABLE_ENTITY, "Unprocessable Entity (WebDAV)"),
         (client::LOCKED, "Locked (WebDAV)"),
         (client::FAILED_DEPENDENCY, "Failed Dependency (WebDAV)"),
         (client::RESERVED_FOR_WEBDAV, "Reserved for WebDAV"),
         (client::UPGRADE_REQUIRED, "Upgrade Required"),
         (client::PRECONDITION_REQUIRED, "Precondition Required"),
         (client::TOO_MANY_REQUESTS, "Too Many Requests"),
         (client::REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large"),
         (client::NO_RESPONSE, "No Response (Nginx)"),
         (client::RETRY_WITH, "Retry With (Microsoft)"),
         (client::BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS,
          "Blocked by Windows Parental Controls (Microsoft)"),
         (client::UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons"),
         (client::CLIENT_CLOSED_REQUEST, "Client Closed Request (Nginx)"),
         (server::INTERNAL_SERVER_ERROR, "Internal Server Error"),
         (server::NOT_IMPLEMENTED, "Not Implemented"),
         (server::BAD_GATEWAY, "Bad Gateway"),
         (server::SERVICE_UNAVAILABLE, "Service Unavailable"),
         (server::GATEWAY_TIMEOUT, "Gateway Timeout"),
         (server::HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported"),
         (server::VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates (Experimental)"),
         (server::INSUFFICIENT_STORAGE, "Insufficient Storage (WebDAV)"),
         (server::LOOP_DETECTED, "Loop Detected (WebDAV)"),
         (server::BANDWIDTH_LIMIT_EXCEEDED, "Bandwidth Limit Exceeded (Apache)"),
         (server::NOT_EXTENDED, "Not Extended"),
         (server::NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required"),
         (server::NETWORK_READ_TIMEOUT_ERROR, "Network read timeout error"),
         (server::NETWORK_CONNECT_TIMEOUT_ERROR, "Network connect timeout error")]
  }

  #[test]
  fn catalogue_is_complete() {
    assert_eq!(catalogue().len(), 69);
  }

  #[test]
  fn every_code_keeps_its_reason_phrase() {
    for (status, reason) in catalogue() {
      assert_eq!(status.reason(), Some(reason), "{}", status.code());
    }
  }

  #[test]
  fn catalogued_codes_are_unique() {
    assert!(catalogue().into_iter()
                       .map(|(status, _)| status.code())
                       .all_unique());
  }

  #[test]
  fn error_marking_follows_class() {
    for (status, _) in catalogue() {
      let should_err = status.code() >= 400;
      assert_eq!(status.is_error(), should_err, "{}", status.code());
      assert_eq!(status.kind().map(|kind| kind.is_error()),
                 Ok(should_err),
                 "{}",
                 status.code());
    }
  }

  #[test]
  fn catalogued_codes_survive_numeric_round_trips() {
    for (status, _) in catalogue() {
      assert_eq!(Status::try_from(status.code()), Ok(status), "{}", status.code());
    }
  }
}
