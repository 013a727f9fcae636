//! Use cases - User story orchestration.

pub mod calculator;
pub mod lookup;

pub use calculator::CalculatorUseCases;
pub use lookup::LookupUseCases;
