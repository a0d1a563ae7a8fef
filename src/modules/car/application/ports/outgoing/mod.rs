pub mod car_query;
pub mod car_repository;

pub use car_query::{
    CarDetailView, CarGalleryItem, CarListFilter, CarOwnerView, CarQuery, CarQueryError,
    CarSummaryView,
};
pub use car_repository::{CarRecord, CarRepository, CarRepositoryError, CarUpdate, NewCar};
