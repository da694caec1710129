pub mod bet_slip;
pub mod fixture;
pub mod history;
pub mod layout;
pub mod outcome;
pub mod token;

pub use bet_slip::*;
pub use fixture::*;
pub use history::*;
pub use layout::*;
pub use outcome::*;
pub use token::*;
