use std::borrow::Cow;
use std::fmt::Debug;

/// Capabilities required from a sequence element to take part in an alignment.
pub trait Symbol: PartialEq + Debug {
    /// Integer index of the symbol, if it has a natural one. Substitution matrices without an
    /// explicit alphabet are addressed by this value.
    fn ordinal(&self) -> Option<i64> {
        None
    }

    /// True for the "unknown residue" symbol (`N`).
    fn is_unknown(&self) -> bool {
        false
    }

    /// Printable representation of the symbol.
    fn label(&self) -> Cow<'_, str>;
}

impl Symbol for u8 {
    fn ordinal(&self) -> Option<i64> {
        Some(*self as i64)
    }

    fn is_unknown(&self) -> bool {
        *self == b'N'
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned((*self as char).to_string())
    }
}

impl Symbol for char {
    fn ordinal(&self) -> Option<i64> {
        Some(*self as i64)
    }

    fn is_unknown(&self) -> bool {
        *self == 'N'
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

macro_rules! impl_integer_symbol {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                fn ordinal(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }

                fn label(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_integer_symbol!(i8, i16, i32, i64, u16, u32, u64, usize);

impl Symbol for &str {
    fn is_unknown(&self) -> bool {
        *self == "N"
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

impl Symbol for String {
    fn is_unknown(&self) -> bool {
        self == "N"
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}
