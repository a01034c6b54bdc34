pub use super::assignments::Entity as Assignments;
pub use super::files::Entity as Files;
pub use super::module_files::Entity as ModuleFiles;
pub use super::modules::Entity as Modules;
pub use super::quarters::Entity as Quarters;
pub use super::quizzes::Entity as Quizzes;
pub use super::sections::Entity as Sections;
pub use super::students::Entity as Students;
pub use super::submissions::Entity as Submissions;
pub use super::users::Entity as Users;
