//! Project scaffolding for Etapa.
//!
//! [`Scaffolder`] materializes a fixed tree of template documents for a new
//! project described by a [`ProjectOptions`].

mod error;
mod license;
mod options;
mod scaffolder;
mod templates;

pub use error::{ScaffoldError, ScaffoldResult};
pub use license::license_template;
pub use options::{LicenseKind, ProjectOptions, Visibility};
pub use scaffolder::{DIRECTORIES, ScaffoldReport, Scaffolder};
pub use templates::TemplateVars;
