pub mod profile;
pub mod roadmap;
pub mod skills;
