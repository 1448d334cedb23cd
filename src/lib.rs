pub mod modules {
    pub mod journals {
        pub mod core {
            pub mod journal;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod add_journal {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod service_port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_journals {
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod journal_store_in_memory;
            }
        }
    }
}

pub mod shell;
