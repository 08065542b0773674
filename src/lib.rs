// Export modules for library usage
pub mod batch;
pub mod classify;
pub mod convert;
pub mod errors;
pub mod input;
pub mod policy;
pub mod shape;

// Re-export commonly used types
pub use crate::shape::{NonNumericKind, Number, NumericShape, ValueKind};

pub use crate::input::Input;

pub use crate::policy::{
    loader::{load_policy, load_policy_or_default, parse_policy, try_load_policy_from_path},
    ExpBoundsMode, InputKinds, OnFail, Policy, DEFAULT_MAX_EXP, DEFAULT_MAX_INT_LEN,
    DEFAULT_MIN_EXP,
};

pub use crate::classify::{
    classify, is_float, is_int_like, is_integer, is_real_number, query_type,
};

pub use crate::convert::{
    convert, convert_to_float, convert_to_int, convert_to_real, force_convert_to_int, resolve,
    try_float, try_force_int, try_int, try_real, Target,
};

pub use crate::batch::{convert_all, convert_all_par, convert_all_strict, BatchError};

pub use crate::errors::NumericError;
