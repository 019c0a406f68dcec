//! Ring configurator vocabulary: the discrete choices a customer makes, the
//! boundary that validates them, and the price estimate derived from them.

pub mod error;
pub mod model;
pub mod pricing;
pub mod selection;

pub use error::{PricingError, SelectionError};
pub use model::*;
pub use pricing::{DISPLAY_CURRENCY, PriceTables, PricingCalculator, Quote};
pub use selection::Selection;
