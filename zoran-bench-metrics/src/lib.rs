pub mod calculators;

pub use calculators::*;
