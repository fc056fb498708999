/*!
 * # regcore - Registration Form Core
 *
 * A Rust library implementing the validation and state-transition engine
 * behind a client-side registration form.
 *
 * ## Features
 *
 * - Per-field validation with ordered rules (first failing rule wins)
 * - Derived age computation from the birth date
 * - Edit/review state machine over a single draft record
 * - Injectable clock for deterministic date handling
 * - Configurable rule thresholds
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Rule threshold configuration
 * - `validation`: Per-field validators and the orchestrating service:
 *   - `validation::names`: First and last name rules
 *   - `validation::mobile`: Mobile number rules
 *   - `validation::email`: Email pattern rules
 *   - `validation::birth_date`: Birth date rules and age derivation
 *   - `validation::password`: Password strength and confirmation rules
 *   - `validation::profile_link`: Profile link pattern rules
 *   - `validation::service`: Orchestrates all validators
 * - `form`: Draft, error map, submitted record and the form controller
 * - `clock`: Injectable source of today's date
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod clock;
pub mod validation;
pub mod form;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::RulesConfig;
pub use clock::{Clock, FixedClock, SystemClock};
pub use form::{Draft, ErrorMap, FieldName, FormController, SubmitOutcome, SubmittedRecord, ViewMode};
pub use validation::{FieldOutcome, ValidationService};
pub use errors::{ConfigError, FormError};
