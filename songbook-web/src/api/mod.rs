//! HTTP page handlers for songbook-web

pub mod health;
pub mod records;
pub mod search;
pub mod ui;

pub use health::health_routes;
pub use records::{
    create_record, delete_record, delete_record_page, edit_record_page, new_record_page,
    record_page, update_record,
};
pub use search::search_page;
pub use ui::home_page;
