pub mod application {
    pub mod client_config {
        pub mod get;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod client_config {
        pub mod errors;
        pub mod model;
        pub mod source;
        pub mod use_cases {
            pub mod get;
        }
    }
}
