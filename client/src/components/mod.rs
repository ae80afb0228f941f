//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome and the generic table/form
//! building blocks every record page is assembled from.

pub mod alert;
pub mod confirm_dialog;
pub mod data_table;
pub mod form_field;
pub mod nav;
pub mod resource_page;
