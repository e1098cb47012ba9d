pub mod clock;
pub mod receipt_service;
pub mod scorer;
pub mod validator;

pub use clock::{Clock, DateReference, FixedClock, SystemClock};
pub use receipt_service::ReceiptService;
pub use scorer::{breakdown, score, RuleContribution};
pub use validator::Validator;
