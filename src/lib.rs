pub mod modules {
    pub mod reports {
        pub mod core {
            pub mod appointment;
            pub mod date_filter;
            pub mod weekday;
        }
        pub mod application {
            pub mod errors;
            pub mod queries_port;
        }
        pub mod use_cases {
            pub mod appointments_per_therapist {
                pub mod aggregate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod patients_by_therapist {
                pub mod aggregate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod daily_cash {
                pub mod aggregate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod appointments_between_dates {
                pub mod aggregate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod statistics {
                pub mod aggregate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
            }
            pub mod outbound {
                pub mod appointments_in_memory;
            }
        }
    }
}

pub mod shell;
