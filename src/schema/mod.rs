// ABOUTME: Schema extraction module - parameter and return-type descriptions
// ABOUTME: plus docstring section parsing for registered tools.

mod docstring;
mod params;

pub use docstring::*;
pub use params::*;

#[cfg(test)]
mod docstring_test;
