pub mod config;

pub mod modules {
    pub mod coffees {
        pub mod core {
            pub mod coffee;
            pub mod ports;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
            }
        }
        pub mod seed;
        pub mod use_cases {
            pub mod list_coffees {
                pub mod http;
            }
            pub mod get_coffee {
                pub mod http;
            }
            pub mod create_coffee {
                pub mod http;
            }
            pub mod replace_coffee {
                pub mod http;
            }
            pub mod delete_coffee {
                pub mod http;
            }
        }
    }
    pub mod droid {
        pub mod http;
    }
    pub mod greeting {
        pub mod http;
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support;
