//! Menu operation handlers.
//!
//! One module per operation family, each a thin pass-through to the
//! daemon client:
//!
//! - Container operations (ps, stop, start, rm)
//! - Image operations (images, rmi)
//!
//! Handlers print the outcome themselves and never propagate daemon
//! errors, so a failed operation always returns control to the menu.

pub mod images;
pub mod ps;
pub mod rm;
pub mod start;
pub mod stop;
