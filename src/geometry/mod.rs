pub mod ray;

pub use ray::Ray;
