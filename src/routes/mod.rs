pub mod assignments;

pub mod auth;

pub mod files;

pub mod frontend;

pub mod modules;

pub mod quarters;

pub mod quizzes;

pub mod sections;

pub mod submissions;

pub mod users;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use modules::configure_modules_routes;
pub use quarters::configure_quarters_routes;
pub use quizzes::configure_quizzes_routes;
pub use sections::configure_sections_routes;
pub use submissions::configure_submissions_routes;
pub use users::configure_user_routes;
