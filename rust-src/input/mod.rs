//! Interactive input for the daily entry.

mod amount;

#[allow(unused_imports)]
pub use amount::{parse_litres, prompt_for_litres, InputError, PROMPT};
