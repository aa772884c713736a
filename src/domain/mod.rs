//! Records and screen definitions shared by the query engine and the API.

pub mod record;
pub mod screen;
