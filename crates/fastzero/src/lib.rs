//! Top-level facade crate for fastzero.
//!
//! Re-exports the domain core and the HTTP api so users can depend on a single crate.

pub mod core {
    pub use fastzero_core::*;
}

pub mod api {
    pub use fastzero_api::*;
}
