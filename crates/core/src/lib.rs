pub mod config;
pub mod error;
pub mod lookup;
pub mod mapping;
pub mod record;
pub mod sync;
pub mod workspace;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::record::*;
}
