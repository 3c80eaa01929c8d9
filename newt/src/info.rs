use crate::code;

// 1xx
code!(rfc2616("10.1.1") CONTINUE            = 1*00);
code!(rfc2616("10.1.2") SWITCHING_PROTOCOLS = 1*01);
code!(
      #[doc = concat!(
    "## [102 Processing](https://www.rfc-editor.org/rfc/rfc2518#section-10.1)\n",
    "A WebDAV request may contain many sub-requests involving file operations,\n",
    "requiring a long time to complete the request. This code indicates that\n",
    "the server has received and is processing the request, but no response is\n",
    "available yet. This prevents the client from timing out and assuming the\n",
    "request was lost.",
  )]
      PROCESSING = 1 * 02
);

#[allow(clippy::zero_prefixed_literal)]
pub(crate) const fn reason(detail: u8) -> Option<&'static str> {
  match detail {
    | 00 => Some("Continue"),
    | 01 => Some("Switching Protocols"),
    | 02 => Some("Processing (WebDAV)"),
    | _ => None,
  }
}
