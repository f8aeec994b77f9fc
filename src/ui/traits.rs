//! Core trait for the UI abstraction layer

use crate::view::GameCard;

/// Trait for catalog UI frontends
///
/// This is the surface the browse session renders into. Methods are
/// infallible: a frontend that cannot display something simply displays
/// nothing, mirroring how the session swallows load failures into an empty
/// result set.
pub trait CatalogUi {
    /// Toggle the loading indicator
    ///
    /// Called with `true` before a load starts and `false` once it has
    /// completed, regardless of outcome.
    fn set_loading(&mut self, visible: bool);

    /// Replace the selectable facet options
    ///
    /// The previous option set is discarded; `facets` always starts with the
    /// synthetic "all" marker.
    fn set_facets(&mut self, facets: &[String]);

    /// Replace the rendered result set
    ///
    /// An empty `cards` slice means the frontend should show its
    /// no-results placeholder. `counter` is the preformatted count line
    /// (`"7 games"`).
    fn show_results(&mut self, cards: &[GameCard], counter: &str);

    /// Report a swallowed error on the diagnostic channel
    fn diagnostic(&mut self, message: &str);
}
