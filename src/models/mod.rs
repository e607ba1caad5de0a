pub mod collection;
pub mod item_status;
pub mod multistatus;
pub mod request;
