/*!
 * Form state management.
 *
 * This module owns everything the presentation layer reads and drives:
 * - `models`: Field identifiers, the draft, the error map, the submitted
 *   record and the view mode
 * - `controller`: The form controller orchestrating validation and the
 *   edit/review state machine
 */

pub mod models;
pub mod controller;

// Re-export main types
pub use controller::{FormController, SubmitOutcome};
pub use models::{Draft, ErrorMap, FieldName, SubmittedRecord, ViewMode};
