pub mod shared {
    pub mod core {
        pub mod pagination;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod http {
            pub mod api_error;
            pub mod extract;
        }
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod creation_request;
            pub mod event;
            pub mod update_request;
        }
        pub mod application {
            pub mod errors;
            pub mod event_service;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store;
                pub mod event_store_in_memory;
                pub mod event_store_postgres;
            }
        }
    }
}

pub mod shell;
