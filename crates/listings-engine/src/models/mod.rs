pub mod enquiry;
pub mod filter;
pub mod property;

pub use enquiry::{Enquiry, EnquiryError};
pub use filter::PropertyFilter;
pub use property::{Coordinates, ListingType, Property, PropertyId, PropertyType};
