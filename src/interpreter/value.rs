/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, its conversions and its
/// Python-compatible display form.
pub mod core;

/// Storage form of values.
///
/// Maps values to and from the JSON shape used by saved sessions,
/// including the encodings of non-finite reals, tuples and builtins.
pub mod stored;
