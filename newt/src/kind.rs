use crate::status::InvalidStatus;

/// The class of response a status code belongs to,
/// given by the first digit of its numeric form.
///
/// See [RFC2616 Section 6.1.1](https://datatracker.ietf.org/doc/html/rfc2616#section-6.1.1) for context
#[derive(Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug)]
pub enum Kind {
  /// Informational - Request received, continuing process
  Informational,
  /// Success - The action was successfully received,
  /// understood, and accepted
  Success,
  /// Redirection - Further action must be taken in order to
  /// complete the request
  Redirection,
  /// Client Error - The request contains bad syntax or cannot
  /// be fulfilled
  ClientError,
  /// Server Error - The server failed to fulfill an apparently
  /// valid request
  ServerError,
}

impl Kind {
  /// Whether statuses of this kind report an error
  /// ([`Kind::ClientError`] or [`Kind::ServerError`])
  ///
  /// ```
  /// use newt::Kind;
  ///
  /// assert!(Kind::ServerError.is_error());
  /// assert!(!Kind::Redirection.is_error());
  /// ```
  pub const fn is_error(&self) -> bool {
    matches!(self, Kind::ClientError | Kind::ServerError)
  }
}

impl TryFrom<u8> for Kind {
  type Error = InvalidStatus;

  fn try_from(class: u8) -> Result<Self, Self::Error> {
    match class {
      | 1 => Ok(Kind::Informational),
      | 2 => Ok(Kind::Success),
      | 3 => Ok(Kind::Redirection),
      | 4 => Ok(Kind::ClientError),
      | 5 => Ok(Kind::ServerError),
      | _ => Err(InvalidStatus::ClassOutOfRange(class)),
    }
  }
}
