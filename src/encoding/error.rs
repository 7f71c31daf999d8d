use thiserror::Error;

/// An enumeration of potential errors that appear while encoding a value.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A framing field ran out of digits: either a block body whose byte
    /// length needs more than ten decimal digits, or a number whose
    /// rendering is wider than its twenty-character payload.
    #[error("field {text:?} does not fit in {width} characters")]
    FieldOverflow {
        /// The rendered field content that did not fit
        text: String,
        /// The fixed field width it had to fit in
        width: usize,
    },

    /// NaN and infinities have no decimal rendering that would survive a
    /// round trip.
    #[error("non-finite float cannot be represented")]
    NonFiniteFloat,

    /// Containers were nested past the encoder's depth limit.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}

#[test]
fn encoding_errors_are_sync_send() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}
    is_send::<Error>();
    is_sync::<Error>();
}
