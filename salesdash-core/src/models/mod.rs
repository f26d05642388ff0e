mod question;
mod sales_rep;

pub use question::{AskRequest, AskResponse};
pub use sales_rep::{Deal, RecordId, SalesRep};
