pub mod cars;

pub use cars::{car_detail, get_cars, Car, CarDetail, Category, Features, Fleet, Fuel};
