//! Navigation state that does not depend on the DOM.
//!
//! The `Navbar` component renders these; everything here can be driven
//! from plain tests.

pub mod account;
pub mod links;
pub mod menus;
pub mod presses;

pub use account::AccountItem;
pub use links::{NavLink, is_active};
pub use menus::{Menu, Menus, Region};
pub use presses::{PressHub, Subscription};
