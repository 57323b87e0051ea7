pub mod shared {
    pub mod infrastructure {
        pub mod document_store;
        pub mod snapshot_store;
    }
}

pub mod modules {
    pub mod judging {
        pub mod core {
            pub mod aggregate;
            pub mod dashboard;
            pub mod project;
            pub mod ranking;
            pub mod rating;
            pub mod record;
            pub mod team_score;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod submit_rating {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod submit_project {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_leaderboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod judging_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod judging_records;
                pub mod leaderboard_snapshot;
            }
        }
    }
}

pub mod shell;
