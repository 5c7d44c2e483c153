pub mod components;
pub mod layouts;
pub mod pages;
pub mod registry;

pub use pages::App;
