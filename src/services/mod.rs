pub mod access;

pub mod assignments;
pub mod auth;
pub mod files;
pub mod modules;
pub mod progress;
pub mod quarters;
pub mod quizzes;
pub mod roster;
pub mod sections;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use files::FileService;
pub use modules::ModuleService;
pub use progress::ProgressService;
pub use quarters::QuarterService;
pub use quizzes::QuizService;
pub use roster::RosterService;
pub use sections::SectionService;
pub use submissions::SubmissionService;
pub use users::UserService;
