/*
[INPUT]:  Network selector, private key, binding request types
[OUTPUT]: Blocking client handles for foreign callers
[POS]:    Façade layer - info (read-only) and exchange (read/write) clients
[UPDATE]: When adding façade operations
*/

pub mod exchange;
pub mod info;

pub use exchange::ExchangeClient;
pub use info::InfoClient;
