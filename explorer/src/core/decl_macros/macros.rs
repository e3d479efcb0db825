// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

/// Equivalent to [`pretty_assertions::assert_eq!`], so diffs of large snapshots are
/// readable when a test fails.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::CommonResult;

    fn returns_unit() -> CommonResult<()> { ok!() }

    fn returns_value() -> CommonResult<u8> { ok!(42) }

    #[test]
    fn test_ok() {
        assert!(returns_unit().is_ok());
        assert_eq2!(returns_value().ok(), Some(42));
    }
}
