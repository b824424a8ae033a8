//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod baseline_repo;
pub mod document_repo;
pub mod follow_up_repo;
pub mod goal_repo;
pub mod insats_repo;
pub mod login_attempt_repo;
pub mod message_repo;
pub mod note_repo;
pub mod participant_repo;
pub mod rating_repo;
pub mod selected_insats_repo;
pub mod statistics_repo;
pub mod step_repo;
pub mod summary_repo;
pub mod task_repo;
pub mod tip_repo;
pub mod user_repo;

pub use baseline_repo::BaselineRepo;
pub use document_repo::DocumentRepo;
pub use follow_up_repo::FollowUpRepo;
pub use goal_repo::GoalRepo;
pub use insats_repo::InsatsRepo;
pub use login_attempt_repo::LoginAttemptRepo;
pub use message_repo::MessageRepo;
pub use note_repo::NoteRepo;
pub use participant_repo::ParticipantRepo;
pub use rating_repo::RatingRepo;
pub use selected_insats_repo::SelectedInsatsRepo;
pub use statistics_repo::StatisticsRepo;
pub use step_repo::StepRepo;
pub use summary_repo::SummaryRepo;
pub use task_repo::TaskRepo;
pub use tip_repo::TipRepo;
pub use user_repo::UserRepo;
