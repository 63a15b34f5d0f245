mod client;
mod service;

pub use client::ApiClient;
pub use service::{Crud, ProductService, ResourceService, UserService};
pub use types::{
    Error, ErrorKind, NewProduct, NewUser, Product, RecordId, Resource, Result, StockStatus, User,
};
