mod company;
mod shared;

pub use company::{CompanyStatus, InvalidStatusError};
pub use shared::id::{CompanyId, InvalidIDError};
pub use shared::payload::{Query, Record};
