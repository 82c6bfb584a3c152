/// A result type for computations that cannot fail but may raise warnings.
///
/// The value is always present; the `Warned` variant attaches the warnings
/// that were raised while producing it.
pub enum WarningResult<T, W> {
    Ok(T),
    Warned(T, Vec<W>),
}

impl<T, W> WarningResult<T, W> {
    fn into_parts(self) -> (T, Vec<W>) {
        match self {
            WarningResult::Ok(t) => (t, Vec::new()),
            WarningResult::Warned(t, warnings) => (t, warnings),
        }
    }

    /// Returns the underlying value, handing the warnings (if any) to the provided callback.
    ///
    /// The callback is not invoked for `Ok` values.
    pub fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<W>),
    {
        let (value, warnings) = self.into_parts();
        if !warnings.is_empty() {
            f(warnings);
        }
        value
    }

    /// Combines two results into a single one holding the couple of values.
    ///
    /// The warnings of both results are concatenated; if none was warned, the
    /// combined result is an `Ok` value.
    pub fn zip<U>(self, other: WarningResult<U, W>) -> WarningResult<(T, U), W> {
        let (value, mut warnings) = self.into_parts();
        let (other_value, other_warnings) = other.into_parts();
        warnings.extend(other_warnings);
        if warnings.is_empty() {
            WarningResult::Ok((value, other_value))
        } else {
            WarningResult::Warned((value, other_value), warnings)
        }
    }
}
