pub mod booking;
pub mod image_catalog;

pub use booking::{booking_url, BookingRequest};
pub use image_catalog::{catalog, ImageCatalog};
