//! NVC cards library exports for testing

pub mod cards;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
