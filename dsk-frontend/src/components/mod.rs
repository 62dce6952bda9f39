mod navbar;
mod search;
mod statistics;

pub use self::{navbar::*, search::*, statistics::*};
