//! Compiled-in content for the portfolio pages.

pub mod blog;
pub mod projects;

pub use blog::{blog_catalog, blog_facets, blog_posts};
pub use projects::{project_catalog, project_facets, projects};
