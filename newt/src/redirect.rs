use crate::code;

// 3xx
code!(rfc2616("10.3.1") MULTIPLE_CHOICES   = 3*00);
code!(rfc2616("10.3.2") MOVED_PERMANENTLY  = 3*01);
code!(rfc2616("10.3.3") FOUND              = 3*02);
code!(rfc2616("10.3.4") SEE_OTHER          = 3*03);
code!(rfc2616("10.3.5") NOT_MODIFIED       = 3*04);
code!(rfc2616("10.3.6") USE_PROXY          = 3*05);
code!(rfc2616("10.3.7") UNUSED             = 3*06);
code!(rfc2616("10.3.8") TEMPORARY_REDIRECT = 3*07);
code!(
      #[doc = concat!(
    "## [308 Permanent Redirect](https://www.rfc-editor.org/rfc/rfc7538#section-3)\n",
    "The request, and all future requests should be repeated using another\n",
    "URI. 307 and 308 (as proposed) parallel the behaviours of 302 and 301,\n",
    "but do not require the HTTP method to change.",
  )]
      PERMANENT_REDIRECT = 3 * 08
);

#[allow(clippy::zero_prefixed_literal)]
pub(crate) const fn reason(detail: u8) -> Option<&'static str> {
  match detail {
    | 00 => Some("Multiple Choices"),
    | 01 => Some("Moved Permanently"),
    | 02 => Some("Found"),
    | 03 => Some("See Other"),
    | 04 => Some("Not Modified"),
    | 05 => Some("Use Proxy"),
    | 06 => Some("(Unused)"),
    | 07 => Some("Temporary Redirect"),
    | 08 => Some("Permanent Redirect (experimental)"),
    | _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn the_306_placeholder_stays_catalogued() {
    assert_eq!(UNUSED.code(), 306);
    assert_eq!(UNUSED.reason(), Some("(Unused)"));
    assert!(!UNUSED.is_error());
  }
}
