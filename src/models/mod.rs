// src/models/mod.rs

//! Data structures representing catalog rows and their public projections.

pub mod category;
pub mod product;

pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product, ProductList, ProductView};
