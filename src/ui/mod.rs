//! UI abstraction layer
//!
//! The browse session talks to the screen only through the [`CatalogUi`]
//! trait, so the same logic drives the colored terminal frontend and the
//! recording mock used in tests.

pub mod mock;
pub mod terminal;
pub mod traits;

pub use mock::MockUi;
pub use terminal::TerminalUi;
pub use traits::CatalogUi;
