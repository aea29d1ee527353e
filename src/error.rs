/// Error type for container operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The absent-value sentinel reached a hashing path. Absent values have
    /// no canonical encoding, so they can never become a stored entry or a
    /// lookup key.
    #[error("absent value cannot be canonically encoded")]
    AbsentValue,
    /// The canonical CBOR encoder rejected the value.
    #[error("value cannot be canonically encoded: {0}")]
    Encoding(#[from] ciborium::ser::Error<std::io::Error>),
    /// Positional access outside `[0, len)`.
    #[error("index {index} out of range of container of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A bulk constructor was given keys and values that do not pair up.
    #[error("cannot pair {keys} keys with {values} values")]
    ArityMismatch { keys: usize, values: usize },
    /// Positional pop on an empty ordered container. The unordered
    /// containers instead report an empty pop as `None`.
    #[error("cannot pop from an empty container")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 out of range of container of length 3"
        );

        let err = Error::ArityMismatch { keys: 3, values: 2 };
        assert_eq!(err.to_string(), "cannot pair 3 keys with 2 values");
    }
}
