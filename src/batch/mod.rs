//! Bulk conversion over slices of text.
//!
//! Each element resolves independently through the policy's `on_fail`
//! axis, so one malformed element never poisons the rest. Large batches
//! can run on the rayon thread pool; the engine itself is stateless, so
//! no coordination is needed.

use rayon::prelude::*;
use thiserror::Error;

use crate::convert::{convert, Target};
use crate::errors::NumericError;
use crate::input::Input;
use crate::policy::{OnFail, Policy};
use crate::shape::Number;

/// Below this element count the parallel entry point stays sequential;
/// spawning outweighs the scan cost for short batches.
const PAR_THRESHOLD: usize = 1024;

/// A strict batch failure, carrying the offending element's position.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("element {index} failed to convert: {source}")]
pub struct BatchError {
    pub index: usize,
    #[source]
    pub source: NumericError,
}

/// Convert every element, resolving failures through the policy.
///
/// `Substitute` yields the configured default, `Raise` and `Sentinel`
/// both yield `None` — a batch has no error channel per element. Use
/// [`convert_all_strict`] when the first failure should stop the batch.
pub fn convert_all(texts: &[&str], target: Target, policy: &Policy) -> Vec<Option<Number>> {
    texts
        .iter()
        .map(|s| resolve_element(s, target, policy))
        .collect()
}

/// [`convert_all`] on the rayon pool for batches worth parallelizing.
pub fn convert_all_par(texts: &[&str], target: Target, policy: &Policy) -> Vec<Option<Number>> {
    if texts.len() < PAR_THRESHOLD {
        return convert_all(texts, target, policy);
    }
    texts
        .par_iter()
        .map(|s| resolve_element(s, target, policy))
        .collect()
}

/// Convert every element strictly, stopping at the first failure.
pub fn convert_all_strict(
    texts: &[&str],
    target: Target,
    policy: &Policy,
) -> Result<Vec<Number>, BatchError> {
    texts
        .iter()
        .enumerate()
        .map(|(index, s)| {
            convert(Input::Text(s), target, policy).map_err(|source| BatchError { index, source })
        })
        .collect()
}

fn resolve_element(s: &str, target: Target, policy: &Policy) -> Option<Number> {
    match convert(Input::Text(s), target, policy) {
        Ok(value) => Some(value),
        Err(_) => match policy.on_fail {
            OnFail::Substitute(default) => Some(default),
            OnFail::Raise | OnFail::Sentinel => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentinel_batch_keeps_positions() {
        let policy = Policy::permissive();
        let out = convert_all(&["1", "x", "3"], Target::Int, &policy);
        assert_eq!(
            out,
            vec![Some(Number::Int(1)), None, Some(Number::Int(3))]
        );
    }

    #[test]
    fn substitute_batch_fills_defaults() {
        let policy = Policy::default().with_on_fail(OnFail::Substitute(Number::Int(0)));
        let out = convert_all(&["4", "bad", "6.0"], Target::Real, &policy);
        assert_eq!(
            out,
            vec![
                Some(Number::Int(4)),
                Some(Number::Int(0)),
                Some(Number::Int(6))
            ]
        );
    }

    #[test]
    fn strict_batch_reports_first_failure() {
        let policy = Policy::default();
        let err = convert_all_strict(&["1", "2", "oops", "4"], Target::Int, &policy).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.source, NumericError::malformed("oops"));

        let ok = convert_all_strict(&["1", "2"], Target::Int, &policy).unwrap();
        assert_eq!(ok, vec![Number::Int(1), Number::Int(2)]);
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let policy = Policy::permissive();
        let texts: Vec<String> = (0..3000)
            .map(|i| if i % 7 == 0 { "x".to_string() } else { i.to_string() })
            .collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        assert_eq!(
            convert_all_par(&refs, Target::Int, &policy),
            convert_all(&refs, Target::Int, &policy)
        );
    }
}
