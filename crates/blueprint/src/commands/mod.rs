pub mod build;
pub mod config;
pub mod llms;
pub mod prerender;
pub mod render;
pub mod routes;
pub mod serve;
pub mod sitemap;
