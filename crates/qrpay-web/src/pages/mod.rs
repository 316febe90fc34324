//! Page Components

mod create;
mod pay;
mod success;

pub use create::CreatePage;
pub use pay::PayPage;
pub use success::SuccessPage;
