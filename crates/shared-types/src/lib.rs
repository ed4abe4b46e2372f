pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod requests;

pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use models::*;
pub use requests::*;
