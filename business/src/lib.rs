pub mod application {
    pub mod auth {
        pub mod get_current_user;
        pub mod login;
        pub mod logout;
        pub mod register;
        pub mod restore_session;
    }
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_items;
        pub mod remove_item;
        pub mod summary;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
        pub mod recommend;
    }
    pub mod favorite {
        pub mod get_all;
        pub mod get_coffees;
        pub mod toggle;
    }
    pub mod order {
        pub mod checkout;
        pub mod get_history;
        pub mod reorder;
    }
}

pub mod domain {
    pub mod errors;
    pub mod events;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod registration;
        pub mod repository;
        pub mod services;
        pub mod state;
        pub mod use_cases {
            pub mod get_current_user;
            pub mod login;
            pub mod logout;
            pub mod register;
            pub mod restore_session;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_items;
            pub mod remove_item;
            pub mod summary;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod mood;
        pub mod services;
        pub mod zodiac;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod recommend;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_coffees;
            pub mod toggle;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod checkout;
            pub mod get_history;
            pub mod reorder;
        }
    }
}
