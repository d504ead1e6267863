//! Firebase client config handler.
//!
//! A single synchronous request handler shared by the local dev server and
//! the serverless function. It never starts a server on its own.
//!
//! - api/: HTTP request/response shapes, DTOs and error mapping
//! - setup/: Dependency wiring from a configuration source

pub mod api {
    pub mod client_config {
        pub mod dto;
        pub mod error_mapper;
        pub mod handler;
    }
    pub mod error;
    pub mod message;
}

pub mod setup {
    pub mod dependency_injection;
}
