/// Standalone unit newtype for quantities that do not fit into [`crate::Quantity`] dimensions.
macro_rules! quantity {
    ($(#[$attr:meta])* $name:ident, suffix: $suffix:literal, precision: $precision:literal) => {
        $(#[$attr])*
        #[repr(transparent)]
        #[derive(
            ::derive_more::Add,
            ::derive_more::AddAssign,
            ::derive_more::FromStr,
            ::derive_more::Neg,
            ::derive_more::Sub,
            ::derive_more::SubAssign,
            ::derive_more::Sum,
            ::serde::Deserialize,
            ::serde::Serialize,
            ::std::clone::Clone,
            ::std::cmp::Eq,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
            ::std::marker::Copy,
        )]
        #[must_use]
        pub struct $name(pub ::ordered_float::OrderedFloat<f64>);

        impl $name {
            pub const ZERO: Self = Self(::ordered_float::OrderedFloat(0.0));

            pub const fn new(value: f64) -> Self {
                Self(::ordered_float::OrderedFloat(value))
            }

            #[must_use]
            pub const fn get(self) -> f64 {
                self.0.0
            }
        }

        impl ::std::convert::From<f64> for $name {
            fn from(value: f64) -> Self {
                Self::new(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:.*} {}", $precision, self.0.0, $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:?}{}", self.0.0, $suffix)
            }
        }
    };
}
