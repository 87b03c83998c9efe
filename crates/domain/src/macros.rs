//! Macro for implementing Display and FromStr for wire-level enums
//!
//! Ghost echoes statuses back as lowercase strings; this macro keeps the
//! string mapping for such enums in one place.
//!
//! # Example
//!
//! ```rust
//! use ghostpress_domain::impl_wire_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Public,
//!     Members,
//! }
//!
//! impl_wire_str_conversions!(Visibility {
//!     Public => "public",
//!     Members => "members",
//! });
//! ```

/// Implements Display and FromStr traits for wire-level enums
///
/// Display writes the mapped string; FromStr is case-insensitive and reports
/// the enum name on failure.
#[macro_export]
macro_rules! impl_wire_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
