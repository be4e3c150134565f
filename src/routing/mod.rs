//! Console routes, the authentication/role guard, and navigation state.

mod navigator;
mod route;

pub use navigator::Navigator;
pub use route::{NavSection, Route, admin_sections, guard};
