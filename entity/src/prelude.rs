pub use super::blog::Entity as Blog;
pub use super::member::Entity as Member;
pub use super::project::Entity as Project;
