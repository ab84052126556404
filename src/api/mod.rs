//! Lambda handlers and response formatting

pub mod increment_handler;
pub mod read_handler;
pub mod response;
