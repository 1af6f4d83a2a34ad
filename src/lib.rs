pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_bus;
        pub mod unit_of_work;
    }
}

pub mod modules {
    pub mod posts {
        pub mod core {
            pub mod events;
            pub mod post;
            pub mod projections;
            pub mod read_model;
            pub mod user;
        }
        pub mod use_cases {
            pub mod create_post {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod project_post_read_model {
                pub mod projector;
            }
            pub mod query_posts {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
                pub mod read_store;
                pub mod write_store;
            }
        }
    }
}

pub mod shell;
