pub mod config;

pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod navigation;
        pub mod submission;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod draft;
            pub mod event;
            pub mod facet;
            pub mod filter;
        }
        pub mod use_cases {
            pub mod browse_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_repository;
                pub mod event_repository_in_memory;
                pub mod seed;
            }
        }
    }
    pub mod registrations {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod register_for_event {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_registration {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod mark_organizing {
                pub mod decide;
            }
            pub mod delete_owned_event {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_registration {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod membership_repository;
                pub mod membership_repository_in_memory;
            }
        }
        pub mod tracker;
    }
    pub mod accounts {
        pub mod core {
            pub mod session;
        }
        pub mod use_cases {
            pub mod authenticate {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
