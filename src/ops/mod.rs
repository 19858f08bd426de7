//! Client for the EPO Open Patent Services (OPS) API:
//! - `token` - OAuth2 client-credentials exchange
//! - `query` - search-field mapping and query/range composition
//! - `client` - authenticated biblio search calls
//! - `normalize` - flattening the nested search payload into view records

pub mod client;
pub mod normalize;
pub mod query;
pub mod token;

pub use normalize::PatentRecord;
