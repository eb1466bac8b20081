mod deck;
mod enums;
mod observer;
mod result;
mod session;

pub use deck::*;
pub use enums::*;
pub use observer::*;
pub use result::*;
pub use session::*;
