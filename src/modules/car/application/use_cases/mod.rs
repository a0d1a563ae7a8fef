pub mod approve_car;
pub mod create_car;
pub mod delete_car;
pub mod fetch_car;
pub mod fetch_my_cars;
pub mod list_cars;
pub mod update_car;
