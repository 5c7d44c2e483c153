pub mod content;
pub mod navbar;
pub mod shell;

pub use content::ContentRegion;
pub use navbar::Navbar;
pub use shell::Shell;
