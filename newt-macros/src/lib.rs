//! Macros used by `newt` for boilerplate reduction

#![doc(html_root_url = "https://docs.rs/newt-macros/0.1.2")]
#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code, missing_copy_implementations))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

use proc_macro::TokenStream;
use quote::ToTokens;
use regex::Regex;
use syn::{parse::Parse, parse_macro_input, LitStr};

struct DocSection(LitStr);

impl Parse for DocSection {
  fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
    Ok(Self(input.parse::<LitStr>()?))
  }
}

const RFC2616: &str = include_str!("./rfc2616.txt");

/// Give me a section of RFC2616 (e.g. `10.4.5` no trailing dot)
/// and I will scrape the rfc for that section then yield an inline `#[doc]` attribute containing that section.
///
/// ```
/// use newt_macros::rfc_2616_doc;
///
/// #[doc = rfc_2616_doc!("10.4.5")]
/// // Expands to:
/// /// # 404 Not Found
/// /// [_generated from RFC2616 section 10.4.5_](<link to section at ietf.org>)
/// ///
/// /// The server has not found anything matching the Request-URI. No
/// /// indication is given of whether the condition is temporary or
/// /// permanent. The 410 (Gone) status code SHOULD be used if the server
/// /// knows, through some internally configurable mechanism, that an old
/// /// resource is permanently unavailable and has no forwarding address.
/// struct Foo;
/// ```
#[proc_macro]
pub fn rfc_2616_doc(input: TokenStream) -> TokenStream {
  let DocSection(section_literal) = parse_macro_input!(input as DocSection);

  let sec = section_literal.value();
  let docstring = gen_docstring(sec, RFC2616);

  LitStr::new(&docstring, section_literal.span()).to_token_stream().into()
}

fn gen_docstring(sec: String, rfc: &'static str) -> String {
  // Match {beginning of line}{section number} then capture everything until beginning of next section.
  // RFC2616 headings carry no trailing dot ("10.4.5 404 Not Found"), so the number
  // must be followed by whitespace; this also keeps "10.4.1" from matching "10.4.18".
  let section_rx =
    Regex::new(format!(r"(?s)\n{}\s+(.*?)(\n\d|$)", sec.replace('.', "\\.")).as_str()).unwrap_or_else(|e| {
                                                                                        panic!("Section {} invalid: {:?}", sec, e)
                                                                                      });
  let rfc_section = section_rx.captures_iter(rfc)
                              .next()
                              .unwrap_or_else(|| panic!("Section {} not found", sec))
                              .get(1)
                              .unwrap_or_else(|| panic!("Section {} is empty", sec))
                              .as_str();

  let mut lines = trim_leading_ws(rfc_section);
  let line1 = lines.drain(0..1)
                   .next()
                   .unwrap_or_else(|| panic!("Section {} is empty", sec));
  let rest = lines.join("\n");

  format!(
          r"# {title}
[_generated from RFC2616 section {section}_](https://datatracker.ietf.org/doc/html/rfc2616#section-{section})

{body}",
          title = line1,
          section = sec,
          body = rest
  )
}

/// the RFC is formatted with 3-space indents in section bodies, with some addl
/// indentation on wrapped list items.
///
/// This strips all leading whitespace so the body renders as flush markdown.
///
/// Returns the input string split by newlines
fn trim_leading_ws(text: &str) -> Vec<String> {
  let trim_start = Regex::new(r"^ +").unwrap();

  text.split('\n')
      .map(|s| trim_start.replace(s, "").to_string())
      .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rfcdoc_works() {
    let rfc = r"
Table of Contents

   6.1   Status-Line . . . . . . . . . . . . . . . . . . . . . . . . 1
   10.4  Client Error 4xx  . . . . . . . . . . . . . . . . . . . . . 2

6.1 Status-Line
   The first line of a Response message is the Status-Line, consisting
   of the protocol version followed by a numeric status code and its
   associated textual phrase.
10.4 Client Error 4xx
   The 4xx class of status code is intended for cases in which the
   client seems to have erred.
10.4.1 400 Bad Request
   The request could not be understood by the server due to malformed
   syntax.
10.4.18 417 Expectation Failed
   The expectation given in an Expect request-header field could not
   be met by this server.";

    // finds end of section that is not last, skipping the table of contents
    assert_eq!(
               gen_docstring("6.1".into(), rfc),
               r"# Status-Line
[_generated from RFC2616 section 6.1_](https://datatracker.ietf.org/doc/html/rfc2616#section-6.1)

The first line of a Response message is the Status-Line, consisting
of the protocol version followed by a numeric status code and its
associated textual phrase."
    );

    // subsection headings terminate their parent section
    assert_eq!(
               gen_docstring("10.4".into(), rfc),
               r"# Client Error 4xx
[_generated from RFC2616 section 10.4_](https://datatracker.ietf.org/doc/html/rfc2616#section-10.4)

The 4xx class of status code is intended for cases in which the
client seems to have erred."
    );

    // section numbers that extend the requested one do not match it
    assert_eq!(
               gen_docstring("10.4.1".into(), rfc),
               r"# 400 Bad Request
[_generated from RFC2616 section 10.4.1_](https://datatracker.ietf.org/doc/html/rfc2616#section-10.4.1)

The request could not be understood by the server due to malformed
syntax."
    );

    // finds end of section that is last
    assert_eq!(
               gen_docstring("10.4.18".into(), rfc),
               r"# 417 Expectation Failed
[_generated from RFC2616 section 10.4.18_](https://datatracker.ietf.org/doc/html/rfc2616#section-10.4.18)

The expectation given in an Expect request-header field could not
be met by this server."
    );
  }
}
