use newt_macros::rfc_2616_doc;

use crate::kind::Kind;

#[doc = rfc_2616_doc!("6.1.1")]
/// # Examples
/// ```
/// use newt::{client, Kind, Status};
///
/// let status = Status::try_from(404).unwrap();
/// assert_eq!(status, client::NOT_FOUND);
/// assert_eq!(status.reason(), Some("Not Found"));
/// assert_eq!(status.kind(), Ok(Kind::ClientError));
/// assert!(status.is_error());
/// ```
#[derive(Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug)]
pub struct Status {
  /// The first digit of the status code, identifying the class of response:
  ///
  /// |class|meaning|
  /// |---|---|
  /// |`1`|Informational - request received, continuing process|
  /// |`2`|Success - the action was successfully received, understood, and accepted|
  /// |`3`|Redirection - further action must be taken in order to complete the request|
  /// |`4`|Client Error - the request contains bad syntax or cannot be fulfilled|
  /// |`5`|Server Error - the server failed to fulfill an apparently valid request|
  pub class: u8,

  /// The last two digits of the status code (range `[0, 100)`).
  ///
  /// These have no categorization role; `404` and `410` are both class-4
  /// codes that differ only in detail.
  pub detail: u8,
}

impl Status {
  /// Create a new Status
  ///
  /// ```
  /// use newt::Status;
  ///
  /// let not_found = Status::new(4, 04);
  /// ```
  pub const fn new(class: u8, detail: u8) -> Self {
    Self { class, detail }
  }

  /// Get the numeric form of a status code
  ///
  /// ```
  /// use newt::Status;
  ///
  /// assert_eq!(Status::new(4, 04).code(), 404);
  /// ```
  pub const fn code(&self) -> u16 {
    self.class as u16 * 100 + self.detail as u16
  }

  /// Get the canonical reason phrase paired with this status code,
  /// or `None` if the code is not in the catalogue.
  ///
  /// ```
  /// use newt::Status;
  ///
  /// assert_eq!(Status::new(4, 04).reason(), Some("Not Found"));
  /// assert_eq!(Status::new(4, 64).reason(), None);
  /// ```
  pub const fn reason(&self) -> Option<&'static str> {
    match self.class {
      | 1 => crate::info::reason(self.detail),
      | 2 => crate::success::reason(self.detail),
      | 3 => crate::redirect::reason(self.detail),
      | 4 => crate::client::reason(self.detail),
      | 5 => crate::server::reason(self.detail),
      | _ => None,
    }
  }

  /// Classify this status code by its class digit
  ///
  /// ```
  /// use newt::{server, InvalidStatus, Kind, Status};
  ///
  /// assert_eq!(server::BAD_GATEWAY.kind(), Ok(Kind::ServerError));
  /// assert_eq!(Status::new(7, 10).kind(), Err(InvalidStatus::ClassOutOfRange(7)));
  /// ```
  pub fn kind(&self) -> Result<Kind, InvalidStatus> {
    Kind::try_from(self.class)
  }

  /// Whether this status code reports an error (class `4` or `5`)
  ///
  /// ```
  /// use newt::{client, redirect, server};
  ///
  /// assert!(client::NOT_FOUND.is_error());
  /// assert!(server::BAD_GATEWAY.is_error());
  /// assert!(!redirect::SEE_OTHER.is_error());
  /// ```
  pub const fn is_error(&self) -> bool {
    matches!(self.class, 4 | 5)
  }

  /// Get the human string representation of a status code
  ///
  /// # Returns
  /// A `char` array
  ///
  /// This is to avoid unnecessary heap allocation;
  /// you can create a `String` with `FromIterator::<String>::from_iter`,
  /// or use the `Display` implementation provided for Status.
  /// ```
  /// use newt::Status;
  ///
  /// let status = Status { class: 4, detail: 4 };
  /// let chars = status.to_human();
  /// let string = String::from_iter(chars);
  /// assert_eq!(string, "404".to_string());
  /// ```
  pub fn to_human(&self) -> [char; 3] {
    let to_char = |d: u8| char::from_digit(d.into(), 10).unwrap();
    [to_char(self.class),
     to_char(self.detail / 10),
     to_char(self.detail % 10)]
  }
}

impl core::fmt::Display for Status {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let [class, tens, ones] = self.to_human();
    write!(f, "{}{}{}", class, tens, ones)
  }
}

impl TryFrom<u16> for Status {
  type Error = InvalidStatus;

  fn try_from(code: u16) -> Result<Self, Self::Error> {
    match code {
      | 100..=599 => Ok(Status::new((code / 100) as u8, (code % 100) as u8)),
      | _ => Err(InvalidStatus::CodeOutOfRange(code)),
    }
  }
}

impl From<Status> for u16 {
  fn from(status: Status) -> u16 {
    status.code()
  }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for Status {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer
  {
    serializer.serialize_u16(self.code())
  }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for Status {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de>
  {
    let code = <u16 as serde::Deserialize>::deserialize(deserializer)?;
    Status::try_from(code).map_err(serde::de::Error::custom)
  }
}

/// Errors encounterable while looking up or classifying a status code
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub enum InvalidStatus {
  /// The numeric code is outside the status code range (`100..=599`)
  CodeOutOfRange(u16),

  /// The class digit is not one of the 5 defined by HTTP (`1..=5`)
  ClassOutOfRange(u8),
}

impl core::fmt::Display for InvalidStatus {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      | InvalidStatus::CodeOutOfRange(code) => {
        write!(f, "{} is not a status code (expected 100..=599)", code)
      },
      | InvalidStatus::ClassOutOfRange(class) => {
        write!(f, "{} is not a status class (expected 1..=5)", class)
      },
    }
  }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for InvalidStatus {}
