pub mod debug_json;
pub mod export_xlsx;

pub use debug_json::save_reconciled_debug;
pub use export_xlsx::export_reconciled_xlsx;
