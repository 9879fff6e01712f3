pub mod certification;
pub mod education;
pub mod experience;
pub mod language;
pub mod project;
pub mod resume;
pub mod skill;
pub mod user;
