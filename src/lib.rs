pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod ownership;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod employee_locks;
        pub mod user_directory;
    }
}

pub mod modules {
    pub mod timesheets {
        pub mod core {
            pub mod chronology;
            pub mod punch;
            pub mod sequencer;
            pub mod stats;
        }
        pub mod use_cases {
            pub mod access;
            pub mod errors;
            pub mod register_punch {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_punch {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod correct_punch_pair {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_punch {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_punches {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod punch_stats {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod punch_store;
                pub mod punch_store_in_memory;
            }
        }
    }
}

pub mod shell;
