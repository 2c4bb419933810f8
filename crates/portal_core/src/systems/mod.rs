pub mod dispatch_cancel;
pub mod dispatch_resolve;
pub mod patient_lookup;
