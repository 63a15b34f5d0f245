mod screen;
mod select;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;

mod products;
pub use products::Products;
