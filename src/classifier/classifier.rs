//! Classifier trait definition.

use crate::error::Result;

/// Text classifier trait.
///
/// Lets hosts hold different classifiers behind one type, e.g. a
/// `Box<dyn Classifier>` chosen at start-up.
pub trait Classifier: Send + Sync {
    /// Pick the best category for `text`, or `None` when nothing is trained.
    fn classify(&self, text: &str) -> Result<Option<String>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
