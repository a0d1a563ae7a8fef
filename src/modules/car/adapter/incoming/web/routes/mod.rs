pub mod create_car;
pub mod delete_car;
pub mod get_car;
pub mod list_cars;
pub mod my_cars;
pub mod update_car;

pub use create_car::create_car_handler;
pub use delete_car::delete_car_handler;
pub use get_car::get_car_handler;
pub use list_cars::list_cars_handler;
pub use my_cars::my_cars_handler;
pub use update_car::update_car_handler;
