// Crate entry point. Declares the module tree so the binary and the tests can reach it.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod primitives;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod document_store;
    }
}

pub mod modules {
    pub mod meal_log {
        pub mod core {
            pub mod buckets;
            pub mod calendar;
            pub mod completion;
            pub mod due;
            pub mod permissions;
            pub mod record;
            pub mod settings;
            pub mod streaks;
        }
        pub mod use_cases {
            pub mod update_day {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reset_period {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod month_board {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod seven_day_buckets {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_settings {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod transfer_snapshot {
                pub mod handler;
                pub mod snapshot;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod record_repository;
                pub mod settings_repository;
            }
        }
    }

    pub mod rooms {
        pub mod core {
            pub mod member;
            pub mod room;
        }
        pub mod use_cases {
            pub mod create_room {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod join_room {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod room_repository;
            }
        }
    }
}

pub mod shell;
