/*
[INPUT]:  Values crossing the binding boundary
[OUTPUT]: Typed Rust records/enums exported to foreign callers
[POS]:    Data layer - value objects for requests and responses
[UPDATE]: When a façade operation gains or changes a value object
*/

pub mod models;
pub mod requests;
pub mod responses;

pub use models::*;
pub use requests::*;
pub use responses::*;
