use crate::code;

// 2xx
code!(rfc2616("10.2.1") OK                            = 2*00);
code!(rfc2616("10.2.2") CREATED                       = 2*01);
code!(rfc2616("10.2.3") ACCEPTED                      = 2*02);
code!(rfc2616("10.2.4") NON_AUTHORITATIVE_INFORMATION = 2*03);
code!(rfc2616("10.2.5") NO_CONTENT                    = 2*04);
code!(rfc2616("10.2.6") RESET_CONTENT                 = 2*05);
code!(rfc2616("10.2.7") PARTIAL_CONTENT               = 2*06);
code!(
      #[doc = concat!(
    "## [207 Multi-Status](https://www.rfc-editor.org/rfc/rfc4918#section-11.1)\n",
    "A Multi-Status response conveys information about multiple resources in\n",
    "situations where multiple status codes might be appropriate. The default\n",
    "Multi-Status response body is a text/xml or application/xml HTTP entity\n",
    "with a 'multistatus' root element.",
  )]
      MULTI_STATUS = 2 * 07
);
code!(
      #[doc = concat!(
    "## [208 Already Reported](https://www.rfc-editor.org/rfc/rfc5842#section-7.1)\n",
    "The 208 (Already Reported) status code can be used inside a DAV: propstat\n",
    "response element to avoid repeatedly enumerating the internal members of\n",
    "multiple bindings to the same collection.",
  )]
      ALREADY_REPORTED = 2 * 08
);
code!(
      #[doc = concat!(
    "## [226 IM Used](https://www.rfc-editor.org/rfc/rfc3229#section-10.4.1)\n",
    "The server has fulfilled a GET request for the resource, and the response\n",
    "is a representation of the result of one or more instance-manipulations\n",
    "applied to the current instance.",
  )]
      IM_USED = 2 * 26
);

#[allow(clippy::zero_prefixed_literal)]
pub(crate) const fn reason(detail: u8) -> Option<&'static str> {
  match detail {
    | 00 => Some("OK"),
    | 01 => Some("Created"),
    | 02 => Some("Accepted"),
    | 03 => Some("Non-Authoritative Information"),
    | 04 => Some("No Content"),
    | 05 => Some("Reset Content"),
    | 06 => Some("Partial Content"),
    | 07 => Some("Multi-Status (WebDAV)"),
    | 08 => Some("Already Reported (WebDAV)"),
    | 26 => Some("IM Used"),
    | _ => None,
  }
}
