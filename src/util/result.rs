use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, otherwise panics with the [`Display`](std::fmt::Display) message
    /// of the contained error. Used where the API is infallible by contract (indexing, growth).
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
