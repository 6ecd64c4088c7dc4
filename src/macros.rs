//! The `macros` module provides macros for internal use.

/// A macro for conveniently writing bytes to a `Write` object and converting the error.
macro_rules! write_u8 {
    ($w:expr, $val:expr) => {
        $w.write_all(&[$val]).context(wr!())
    };
}
