//! Enum-string registry.
//!
//! Every enum that appears on the wire declares its canonical strings in a
//! compile-time table through the [`wire_enum!`] macro. Parsing is
//! case-insensitive and emitting always uses the canonical spelling.
//!
//! Unknown strings never map to a default variant here. Whether an unknown
//! string is fatal or falls back to a default is decided by each field that
//! reads it.

use thiserror::Error;

/// A wire string that does not belong to an enum's table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {type_name} value")]
pub struct UnknownWireValue {
    type_name: &'static str,
    value: String,
}

impl UnknownWireValue {
    /// Create an error for `value` not being part of `type_name`'s table.
    pub fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
        }
    }

    /// Name of the enum the value was parsed as.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The rejected wire string.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Bidirectional mapping between enum variants and wire strings.
///
/// Implementations are generated by [`wire_enum!`]; the table and the
/// `to_wire` match are derived from the same variant list so they cannot
/// drift apart.
pub trait WireEnum: Sized + Copy + PartialEq + 'static {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Every variant paired with its canonical wire string.
    const TABLE: &'static [(Self, &'static str)];

    /// Canonical wire string of this variant.
    fn to_wire(self) -> &'static str;

    /// Look up a variant by wire string, ignoring ASCII case.
    fn from_wire(text: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, wire)| wire.eq_ignore_ascii_case(text))
            .map(|(variant, _)| *variant)
    }

    /// Like [`from_wire`](Self::from_wire) but reports the rejected text.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownWireValue`] if `text` is not in the table.
    fn parse_wire(text: &str) -> Result<Self, UnknownWireValue> {
        Self::from_wire(text).ok_or_else(|| UnknownWireValue::new(Self::NAME, text))
    }
}

/// Declare an enum together with its wire strings.
///
/// Generates the enum, an `ALL` slice in declaration order, the
/// [`WireEnum`] implementation, `Display` (canonical wire string) and
/// `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::wire::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const TABLE: &'static [($name, &'static str)] = &[$(($name::$variant, $wire)),+];

            fn to_wire(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::wire::WireEnum::to_wire(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::wire::UnknownWireValue;

            fn from_str(text: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::wire::WireEnum>::parse_wire(text)
            }
        }
    };
}

pub(crate) use wire_enum;
