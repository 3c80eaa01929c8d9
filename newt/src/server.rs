use crate::code;

// 5xx
code!(rfc2616("10.5.1") INTERNAL_SERVER_ERROR      = 5*00);
code!(rfc2616("10.5.2") NOT_IMPLEMENTED            = 5*01);
code!(rfc2616("10.5.3") BAD_GATEWAY                = 5*02);
code!(rfc2616("10.5.4") SERVICE_UNAVAILABLE        = 5*03);
code!(rfc2616("10.5.5") GATEWAY_TIMEOUT            = 5*04);
code!(rfc2616("10.5.6") HTTP_VERSION_NOT_SUPPORTED = 5*05);
code!(
      #[doc = concat!(
    "## [506 Variant Also Negotiates](https://www.rfc-editor.org/rfc/rfc2295#section-8.1)\n",
    "The 506 status code indicates that the server has an internal\n",
    "configuration error: the chosen variant resource is configured to engage\n",
    "in transparent content negotiation itself, and is therefore not a proper\n",
    "end point in the negotiation process.",
  )]
      VARIANT_ALSO_NEGOTIATES = 5 * 06
);
code!(
      #[doc = concat!(
    "## [507 Insufficient Storage](https://www.rfc-editor.org/rfc/rfc4918#section-11.5)\n",
    "The 507 (Insufficient Storage) status code means the method could not be\n",
    "performed on the resource because the server is unable to store the\n",
    "representation needed to successfully complete the request. This\n",
    "condition is considered to be temporary.",
  )]
      INSUFFICIENT_STORAGE = 5 * 07
);
code!(
      #[doc = concat!(
    "## [508 Loop Detected](https://www.rfc-editor.org/rfc/rfc5842#section-7.2)\n",
    "The 508 (Loop Detected) status code indicates that the server terminated\n",
    "an operation because it encountered an infinite loop while processing a\n",
    "request with \"Depth: infinity\". This status indicates that the entire\n",
    "operation failed.",
  )]
      LOOP_DETECTED = 5 * 08
);
code!(
      #[doc = concat!(
    "## 509 Bandwidth Limit Exceeded (Apache)\n",
    "This status code, while used by many servers, is not specified in any\n",
    "RFCs.",
  )]
      BANDWIDTH_LIMIT_EXCEEDED = 5 * 09
);
code!(
      #[doc = concat!(
    "## [510 Not Extended](https://www.rfc-editor.org/rfc/rfc2774#section-7)\n",
    "The policy for accessing the resource has not been met in the request.\n",
    "The server should send back all the information necessary for the client\n",
    "to issue an extended request.",
  )]
      NOT_EXTENDED = 5 * 10
);
code!(
      #[doc = concat!(
    "## [511 Network Authentication Required](https://www.rfc-editor.org/rfc/rfc6585#section-6)\n",
    "The 511 status code indicates that the client needs to authenticate to\n",
    "gain network access. The response representation SHOULD contain a link\n",
    "to a resource that allows the user to submit credentials.",
  )]
      NETWORK_AUTHENTICATION_REQUIRED = 5 * 11
);
code!(
      #[doc = concat!(
    "## 598 Network read timeout error\n",
    "This status code is not specified in any RFCs, but is used by some HTTP\n",
    "proxies to signal a network read timeout behind the proxy to a client in\n",
    "front of the proxy.",
  )]
      NETWORK_READ_TIMEOUT_ERROR = 5 * 98
);
code!(
      #[doc = concat!(
    "## 599 Network connect timeout error\n",
    "This status code is not specified in any RFCs, but is used by some HTTP\n",
    "proxies to signal a network connect timeout behind the proxy to a client\n",
    "in front of the proxy.",
  )]
      NETWORK_CONNECT_TIMEOUT_ERROR = 5 * 99
);

#[allow(clippy::zero_prefixed_literal)]
pub(crate) const fn reason(detail: u8) -> Option<&'static str> {
  match detail {
    | 00 => Some("Internal Server Error"),
    | 01 => Some("Not Implemented"),
    | 02 => Some("Bad Gateway"),
    | 03 => Some("Service Unavailable"),
    | 04 => Some("Gateway Timeout"),
    | 05 => Some("HTTP Version Not Supported"),
    | 06 => Some("Variant Also Negotiates (Experimental)"),
    | 07 => Some("Insufficient Storage (WebDAV)"),
    | 08 => Some("Loop Detected (WebDAV)"),
    | 09 => Some("Bandwidth Limit Exceeded (Apache)"),
    | 10 => Some("Not Extended"),
    | 11 => Some("Network Authentication Required"),
    | 98 => Some("Network read timeout error"),
    | 99 => Some("Network connect timeout error"),
    | _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn server_codes_are_server_errors() {
    for status in [INTERNAL_SERVER_ERROR,
                   HTTP_VERSION_NOT_SUPPORTED,
                   NETWORK_CONNECT_TIMEOUT_ERROR] {
      assert_eq!(status.class, 5);
      assert_eq!(status.kind(), Ok(crate::Kind::ServerError));
      assert!(status.is_error());
    }
  }

  #[test]
  fn proxy_conventions_above_511_stay_catalogued() {
    assert_eq!(NETWORK_READ_TIMEOUT_ERROR.code(), 598);
    assert_eq!(NETWORK_CONNECT_TIMEOUT_ERROR.code(), 599);
    assert_eq!(crate::Status::new(5, 50).reason(), None);
  }
}
