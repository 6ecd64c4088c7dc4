//! The `clamp` module holds the range validator: a plain [`clamp`] function and the `clamp!` macro
//! which builds newtypes that can never hold an out-of-range value.

/// Saturates `value` into `lower..=upper`. Values below `lower` become `lower`, values above
/// `upper` become `upper`, everything else passes through unchanged. Never fails.
///
/// ```
/// use midi_messages::clamp;
/// assert_eq!(clamp(200, 0, 127), 127);
/// assert_eq!(clamp(-3, 1, 16), 1);
/// assert_eq!(clamp(9, 1, 16), 9);
/// ```
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Example: clamp!(Channel, u8, 1, 16, 1, pub);
/// Where:
/// - Channel is the name of the struct that will be created.
/// - u8 is the underlying data type
/// - 1 is the minimum allowed value
/// - 16 is the maximum allowed value
/// - 1 is the default value
/// - pub is the visibility of the struct
macro_rules! clamp {
    (
        $(#[$meta:meta])*
        $symbol:ident, $inner_type:ty, $min:expr, $max:expr, $default:expr, $visibility:vis
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
        $visibility struct $symbol($inner_type);

        impl Default for $symbol {
            fn default() -> Self {
                Self::new($default)
            }
        }

        impl $symbol {
            /// The smallest value this type can hold.
            #[allow(dead_code)]
            $visibility const MIN: $inner_type = $min;

            /// The largest value this type can hold.
            #[allow(dead_code)]
            $visibility const MAX: $inner_type = $max;

            /// Silently clamps the value if it is out of range. See [`Self::set`].
            #[allow(dead_code)]
            $visibility const fn new(value: $inner_type) -> Self {
                let (clamped, _) = Self::clamp(value);
                Self(clamped)
            }

            /// Silently clamps a wide integer, e.g. a negative number or a number that would not
            /// fit in the inner type, into the valid range.
            #[allow(dead_code)]
            $visibility const fn saturating(value: i32) -> Self {
                if value < Self::MIN as i32 {
                    Self(Self::MIN)
                } else if value > Self::MAX as i32 {
                    Self(Self::MAX)
                } else {
                    Self(value as $inner_type)
                }
            }

            /// Returns the inner value.
            #[allow(dead_code)]
            $visibility fn get(&self) -> $inner_type {
                self.0
            }

            /// Clamps and sets. Returns `true` if `value` was in range. Returns `false` if `value`
            /// was out-of-range. That is, given a valid range of `1..=5`, then `set(0)` will set
            /// the value to `1` and return `false`. `set(4)` will set the value to `4` and return
            /// `true`.
            #[allow(dead_code)]
            $visibility fn set(&mut self, value: $inner_type) -> bool {
                let (clamped, result) = Self::clamp(value);
                self.0 = clamped;
                result
            }

            /// A private const function that does the clamping.
            #[allow(unused_comparisons)]
            const fn clamp(value: $inner_type) -> ($inner_type, bool) {
                if value < $min {
                    ($min, false)
                } else if value > $max {
                    ($max, false)
                } else {
                    (value, true)
                }
            }
        }

        impl From<$inner_type> for $symbol {
            fn from(value: $inner_type) -> Self {
                Self::new(value)
            }
        }

        impl From<$symbol> for $inner_type {
            fn from(value: $symbol) -> $inner_type {
                value.0
            }
        }

        impl std::fmt::Display for $symbol {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

#[test]
#[allow(clippy::disallowed_names)]
fn clamp_macro_test() {
    clamp!(Foo, u8, 1, 16, 1, pub);
    let foo: Foo = 0u8.into();
    let foo_val: u8 = foo.into();
    assert_eq!(1, foo_val);
    let fmted = format!("{}", Foo::new(6));
    assert_eq!("6", fmted.as_str());
    assert_eq!(16, Foo::saturating(1000).get());
    assert_eq!(1, Foo::saturating(-1000).get());
    let mut foo = Foo::default();
    assert!(foo.set(16));
    assert!(!foo.set(17));
    assert_eq!(16, foo.get());
}

#[test]
fn clamp_fn_in_range_is_identity() {
    for n in 0..=127 {
        assert_eq!(n, clamp(n, 0, 127));
    }
}

#[test]
fn clamp_fn_saturates() {
    for n in -300..=300 {
        let c = clamp(n, 1, 16);
        assert!((1..=16).contains(&c), "{} clamped to {}", n, c);
    }
    assert_eq!(16383, clamp(70000, 0, 16383));
    assert_eq!(0, clamp(i32::MIN, 0, 16383));
}
