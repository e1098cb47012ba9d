pub mod amount;
pub mod receipt;

pub use amount::{Amount, AmountError};
pub use receipt::{Item, Receipt, DATE_FORMAT, TIME_FORMAT};
