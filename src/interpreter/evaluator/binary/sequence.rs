use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// Maximum number of elements a concatenation or repetition may produce.
pub const MAX_SEQUENCE_LEN: usize = 1_000_000;

impl Environment {
    /// Concatenates two sequences of the same kind.
    ///
    /// # Errors
    /// `SequenceTooLong` if the result would exceed [`MAX_SEQUENCE_LEN`].
    pub fn concat(left: &[Value], right: &[Value], column: usize) -> EvalResult<Rc<Vec<Value>>> {
        let len = left.len() + right.len();
        if len > MAX_SEQUENCE_LEN {
            return Err(RuntimeError::SequenceTooLong { limit: MAX_SEQUENCE_LEN,
                                                       column });
        }

        let mut items = Vec::with_capacity(len);
        items.extend_from_slice(left);
        items.extend_from_slice(right);
        Ok(Rc::new(items))
    }

    /// Repeats a sequence `count` times.
    ///
    /// A count of zero or less produces an empty sequence.
    ///
    /// # Errors
    /// `SequenceTooLong` if the result would exceed [`MAX_SEQUENCE_LEN`].
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let items = [Value::Integer(1), Value::Integer(2)];
    /// let repeated = Environment::repeat(&items, 2, 1).unwrap();
    /// assert_eq!(repeated.len(), 4);
    /// assert!(Environment::repeat(&items, -3, 1).unwrap().is_empty());
    /// ```
    pub fn repeat(items: &[Value], count: i64, column: usize) -> EvalResult<Rc<Vec<Value>>> {
        let count = usize::try_from(count).unwrap_or(0);
        if items.is_empty() || count == 0 {
            return Ok(Rc::new(Vec::new()));
        }

        let len = items.len()
                       .checked_mul(count)
                       .filter(|len| *len <= MAX_SEQUENCE_LEN)
                       .ok_or(RuntimeError::SequenceTooLong { limit: MAX_SEQUENCE_LEN,
                                                              column })?;
        let mut repeated = Vec::with_capacity(len);
        for _ in 0..count {
            repeated.extend_from_slice(items);
        }
        Ok(Rc::new(repeated))
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_SEQUENCE_LEN;
    use crate::{
        error::RuntimeError,
        interpreter::{environment::Environment, value::core::Value},
    };

    #[test]
    fn huge_repetition_is_refused_before_allocating() {
        let items = [Value::Integer(0)];
        assert_eq!(Environment::repeat(&items, i64::MAX, 4),
                   Err(RuntimeError::SequenceTooLong { limit:  MAX_SEQUENCE_LEN,
                                                       column: 4, }));
    }

    #[test]
    fn empty_sequences_repeat_to_empty() {
        assert!(Environment::repeat(&[], i64::MAX, 1).unwrap().is_empty());
    }

    #[test]
    fn concat_keeps_order() {
        let joined = Environment::concat(&[Value::Integer(1)], &[Value::Integer(2)], 1).unwrap();
        assert_eq!(*joined, vec![Value::Integer(1), Value::Integer(2)]);
    }
}
