//! Overview Section Renderer
//!
//! Builds the overview tab from `overview_sections`, in order. Each
//! descriptor is resolved into a `Section` variant and rendered by its
//! sub-renderer:
//! - `certifications`: badge grid from the root `certifications` collection
//! - `trusted_by`: initial-letter logo tiles from the root `trusted_by` collection
//! - `documentation_preview`: document rows with view / request-access actions
//! - `controls_preview`: control cards with feature grids
//! - `subprocessors_preview`: subprocessor rows with name, service, location
//!
//! Unknown section types are skipped. The first section that cannot be
//! resolved stops the remaining ones; sections already built are kept.

pub mod section;
pub mod sections;
pub mod renderer;

pub use renderer::{build_overview, render_overview, render_section, OverviewContent, OVERVIEW_CONTAINER_ID};
pub use section::{Section, SectionKind};
