use crate::code;

// 4xx
code!(rfc2616("10.4.1")  BAD_REQUEST                     = 4*00);
code!(rfc2616("10.4.2")  UNAUTHORIZED                    = 4*01);
code!(rfc2616("10.4.3")  PAYMENT_REQUIRED                = 4*02);
code!(rfc2616("10.4.4")  FORBIDDEN                       = 4*03);
code!(rfc2616("10.4.5")  NOT_FOUND                       = 4*04);
code!(rfc2616("10.4.6")  METHOD_NOT_ALLOWED              = 4*05);
code!(rfc2616("10.4.7")  NOT_ACCEPTABLE                  = 4*06);
code!(rfc2616("10.4.8")  PROXY_AUTHENTICATION_REQUIRED   = 4*07);
code!(rfc2616("10.4.9")  REQUEST_TIMEOUT                 = 4*08);
code!(rfc2616("10.4.10") CONFLICT                        = 4*09);
code!(rfc2616("10.4.11") GONE                            = 4*10);
code!(rfc2616("10.4.12") LENGTH_REQUIRED                 = 4*11);
code!(rfc2616("10.4.13") PRECONDITION_FAILED             = 4*12);
code!(rfc2616("10.4.14") REQUEST_ENTITY_TOO_LARGE        = 4*13);
code!(rfc2616("10.4.15") REQUEST_URI_TOO_LONG            = 4*14);
code!(rfc2616("10.4.16") UNSUPPORTED_MEDIA_TYPE          = 4*15);
code!(rfc2616("10.4.17") REQUESTED_RANGE_NOT_SATISFIABLE = 4*16);
code!(rfc2616("10.4.18") EXPECTATION_FAILED              = 4*17);
code!(
      #[doc = concat!(
    "## [418 I'm a teapot](https://www.rfc-editor.org/rfc/rfc2324#section-2.3.2)\n",
    "Any attempt to brew coffee with a teapot should result in the error\n",
    "code \"418 I'm a teapot\". The resulting entity body MAY be short and\n",
    "stout.",
  )]
      IM_A_TEAPOT = 4 * 18
);
code!(
      #[doc = concat!(
    "## 420 Enhance Your Calm (Twitter)\n",
    "Returned by the Twitter Search and Trends API when the client is being\n",
    "rate limited. Likely a reference to the 1993 movie Demolition Man.",
  )]
      ENHANCE_YOUR_CALM = 4 * 20
);
code!(
      #[doc = concat!(
    "## [422 Unprocessable Entity](https://www.rfc-editor.org/rfc/rfc4918#section-11.2)\n",
    "The 422 (Unprocessable Entity) status code means the server understands\n",
    "the content type of the request entity (hence a 415 (Unsupported Media\n",
    "Type) status code is inappropriate), and the syntax of the request entity\n",
    "is correct (thus a 400 (Bad Request) status code is inappropriate) but was\n",
    "unable to process the contained instructions.",
  )]
      UNPROCESSABLE_ENTITY = 4 * 22
);
code!(
      #[doc = concat!(
    "## [423 Locked](https://www.rfc-editor.org/rfc/rfc4918#section-11.3)\n",
    "The 423 (Locked) status code means the source or destination resource of\n",
    "a method is locked. This response SHOULD contain an appropriate\n",
    "precondition or postcondition code, such as 'lock-token-submitted' or\n",
    "'no-conflicting-lock'.",
  )]
      LOCKED = 4 * 23
);
code!(
      #[doc = concat!(
    "## [424 Failed Dependency](https://www.rfc-editor.org/rfc/rfc4918#section-11.4)\n",
    "The 424 (Failed Dependency) status code means that the method could not\n",
    "be performed on the resource because the requested action depended on\n",
    "another action and that action failed.",
  )]
      FAILED_DEPENDENCY = 4 * 24
);
code!(
      #[doc = concat!(
    "## 425 Reserved for WebDAV\n",
    "Defined in drafts of \"WebDAV Advanced Collections Protocol\", but not\n",
    "present in \"Web Distributed Authoring and Versioning (WebDAV) Ordered\n",
    "Collections Protocol\".",
  )]
      RESERVED_FOR_WEBDAV = 4 * 25
);
code!(
      #[doc = concat!(
    "## [426 Upgrade Required](https://www.rfc-editor.org/rfc/rfc2817#section-6)\n",
    "Reliable, interoperable negotiation of Upgrade features requires an\n",
    "unambiguous failure signal. The 426 Upgrade Required status code allows\n",
    "a server to definitively state the precise protocol extensions a given\n",
    "resource must be served with.",
  )]
      UPGRADE_REQUIRED = 4 * 26
);
code!(
      #[doc = concat!(
    "## [428 Precondition Required](https://www.rfc-editor.org/rfc/rfc6585#section-3)\n",
    "The 428 status code indicates that the origin server requires the\n",
    "request to be conditional. Its typical use is to avoid the \"lost update\"\n",
    "problem, where a client GETs a resource's state, modifies it, and PUTs\n",
    "it back to the server, when meanwhile a third party has modified the\n",
    "state on the server, leading to a conflict.",
  )]
      PRECONDITION_REQUIRED = 4 * 28
);
code!(
      #[doc = concat!(
    "## [429 Too Many Requests](https://www.rfc-editor.org/rfc/rfc6585#section-4)\n",
    "The 429 status code indicates that the user has sent too many requests\n",
    "in a given amount of time (\"rate limiting\"). The response\n",
    "representations SHOULD include details explaining the condition, and MAY\n",
    "include a Retry-After header indicating how long to wait before making a\n",
    "new request.",
  )]
      TOO_MANY_REQUESTS = 4 * 29
);
code!(
      #[doc = concat!(
    "## [431 Request Header Fields Too Large](https://www.rfc-editor.org/rfc/rfc6585#section-5)\n",
    "The 431 status code indicates that the server is unwilling to process\n",
    "the request because its header fields are too large. The request MAY be\n",
    "resubmitted after reducing the size of the request header fields.",
  )]
      REQUEST_HEADER_FIELDS_TOO_LARGE = 4 * 31
);
code!(
      #[doc = concat!(
    "## 444 No Response (Nginx)\n",
    "Used in Nginx logs to indicate that the server has returned no\n",
    "information to the client and closed the connection (useful as a\n",
    "deterrent for malware).",
  )]
      NO_RESPONSE = 4 * 44
);
code!(
      #[doc = concat!(
    "## 449 Retry With (Microsoft)\n",
    "A Microsoft extension. The request should be retried after performing\n",
    "the appropriate action.",
  )]
      RETRY_WITH = 4 * 49
);
code!(
      #[doc = concat!(
    "## 450 Blocked by Windows Parental Controls (Microsoft)\n",
    "A Microsoft extension. This error is given when Windows Parental\n",
    "Controls are turned on and are blocking access to the given webpage.",
  )]
      BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS = 4 * 50
);
code!(
      #[doc = concat!(
    "## [451 Unavailable For Legal Reasons](https://www.rfc-editor.org/rfc/rfc7725#section-3)\n",
    "Intended to be used when resource access is denied for legal reasons,\n",
    "e.g. censorship or government-mandated blocked access. A reference to\n",
    "the 1953 dystopian novel Fahrenheit 451, where books are outlawed.",
  )]
      UNAVAILABLE_FOR_LEGAL_REASONS = 4 * 51
);
code!(
      #[doc = concat!(
    "## 499 Client Closed Request (Nginx)\n",
    "Used in Nginx logs to indicate when the connection has been closed by\n",
    "the client while the server is still processing its request, making the\n",
    "server unable to send a status code back.",
  )]
      CLIENT_CLOSED_REQUEST = 4 * 99
);

#[allow(clippy::zero_prefixed_literal)]
pub(crate) const fn reason(detail: u8) -> Option<&'static str> {
  match detail {
    | 00 => Some("Bad Request"),
    | 01 => Some("Unauthorized"),
    | 02 => Some("Payment Required"),
    | 03 => Some("Forbidden"),
    | 04 => Some("Not Found"),
    | 05 => Some("Method Not Allowed"),
    | 06 => Some("Not Acceptable"),
    | 07 => Some("Proxy Authentication Required"),
    | 08 => Some("Request Timeout"),
    | 09 => Some("Conflict"),
    | 10 => Some("Gone"),
    | 11 => Some("Length Required"),
    | 12 => Some("Precondition Failed"),
    | 13 => Some("Request Entity Too Large"),
    | 14 => Some("Request-URI Too Long"),
    | 15 => Some("Unsupported Media Type"),
    | 16 => Some("Requested Range Not Satisfiable"),
    | 17 => Some("Expectation Failed"),
    | 18 => Some("I'm a teapot (RFC 2324)"),
    | 20 => Some("Enhance Your Calm (Twitter)"),
    | 22 => Some("Unprocessable Entity (WebDAV)"),
    | 23 => Some("Locked (WebDAV)"),
    | 24 => Some("Failed Dependency (WebDAV)"),
    | 25 => Some("Reserved for WebDAV"),
    | 26 => Some("Upgrade Required"),
    | 28 => Some("Precondition Required"),
    | 29 => Some("Too Many Requests"),
    | 31 => Some("Request Header Fields Too Large"),
    | 44 => Some("No Response (Nginx)"),
    | 49 => Some("Retry With (Microsoft)"),
    | 50 => Some("Blocked by Windows Parental Controls (Microsoft)"),
    | 51 => Some("Unavailable For Legal Reasons"),
    | 99 => Some("Client Closed Request (Nginx)"),
    | _ => None,
  }
}
