/// UI module exports
pub mod components;
pub mod search_box;
