#[macro_use]
extern crate serde;
extern crate serde_json;

#[macro_use]
pub mod convert;
pub mod models;

pub use convert::{
    Coercion, ConstructFromObject, ConvertError, ConvertOptions, ConvertToType, RawObject,
};
pub use models::*;
