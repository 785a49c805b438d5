//! TimeTraveler engine library.
//!
//! Turns a photo of a landmark into a conversation with someone from its past.
//!
//! ## Structure
//!
//! - `use_cases/` - Identification, persona resolution, conversation and the journey that ties them together
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `prompt_templates` - Every prompt sent to the completion service
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
