//! Range endpoints.

/// One endpoint of a range.
///
/// The endpoint kind decides how a range is rendered: integer and text
/// endpoints are wrapped in `[...]` or `{...}`, while a character endpoint
/// falls back to bare concatenation so it can sit inside an open class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Bound {
    /// An integer endpoint.
    Int(i64),
    /// A single character endpoint.
    Char(char),
    /// A text endpoint.
    Text(String),
}

impl Bound {
    /// Returns true for the kinds that take a wrapped `[a-b]` / `{a,b}` form.
    pub fn is_wrappable(&self) -> bool {
        matches!(self, Bound::Int(_) | Bound::Text(_))
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Int(n) => write!(f, "{}", n),
            Bound::Char(c) => write!(f, "{}", c),
            Bound::Text(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Bound {
                fn from(n: $ty) -> Self {
                    Bound::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values outside i64 saturate; counts that large mean nothing to the host
// compiler anyway.
macro_rules! impl_from_wide_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Bound {
                fn from(n: $ty) -> Self {
                    Bound::Int(i64::try_from(n).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

macro_rules! impl_from_wide_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Bound {
                fn from(n: $ty) -> Self {
                    let saturated = if n < 0 { i64::MIN } else { i64::MAX };
                    Bound::Int(i64::try_from(n).unwrap_or(saturated))
                }
            }
        )*
    };
}

impl_from_wide_unsigned!(u64, u128, usize);
impl_from_wide_signed!(i128, isize);

impl From<char> for Bound {
    fn from(c: char) -> Self {
        Bound::Char(c)
    }
}

impl From<&str> for Bound {
    fn from(s: &str) -> Self {
        Bound::Text(s.to_string())
    }
}

impl From<String> for Bound {
    fn from(s: String) -> Self {
        Bound::Text(s)
    }
}
