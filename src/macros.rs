//! Macros de conveniencia: aceptan cualquier expresión convertible en
//! `Value`.

/// `identify!(a, b, ...)` ≡ `identify(&[Value::from(a), Value::from(b), ...])`.
#[macro_export]
macro_rules! identify {
    () => {
        $crate::identify(&[])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::identify(&[$($crate::Value::from($arg)),+])
    };
}

/// Variante ordenada de [`identify!`].
#[macro_export]
macro_rules! identify_sorted {
    () => {
        $crate::identify_sorted(&[])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::identify_sorted(&[$($crate::Value::from($arg)),+])
    };
}
