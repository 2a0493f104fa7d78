//! Data models for the Biblioteca server

pub mod audit;
pub mod author;
pub mod book;
pub mod category;
pub mod enums;
pub mod fine;
pub mod item;
pub mod loan;
pub mod magazine;
pub mod material;
pub mod newspaper;
pub mod publisher;
pub mod user;

// Re-export commonly used types
pub use audit::ActorId;
pub use author::Author;
pub use book::Book;
pub use category::Category;
pub use enums::{FineState, ItemCondition, LoanState, MaterialKind};
pub use fine::Fine;
pub use item::{Item, ItemResponse, ItemRow};
pub use loan::Loan;
pub use magazine::Magazine;
pub use material::{MaterialRef, MaterialSummary};
pub use newspaper::Newspaper;
pub use publisher::Publisher;
pub use user::User;
