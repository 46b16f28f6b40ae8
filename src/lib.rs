mod cereal;
mod error;
mod storage;

pub use cereal::Cereal;
pub use error::Error;
pub use storage::CerealStorage;
