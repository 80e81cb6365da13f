pub mod demographic;
pub mod listing;
pub mod reconciled;
