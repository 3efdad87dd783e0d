mod add_routine;
mod dashboard;
mod error;
mod exercises;
mod home;
mod log_workout;
mod login;
mod profile;
mod register;
mod routine_detail;
mod routines;
mod settings;
mod start_workout;
mod workouts;

pub use add_routine::AddRoutinePage;
pub use dashboard::{DashboardPage, DashboardView};
pub use error::ErrorPage;
pub use exercises::{ExerciseTable, ExercisesPage};
pub use home::HomePage;
pub use log_workout::LogWorkoutPage;
pub use login::LoginPage;
pub use profile::{ProfilePage, ProfileView};
pub use register::RegisterPage;
pub use routine_detail::RoutineDetailPage;
pub use routines::RoutinesPage;
pub use settings::SettingsPage;
pub use start_workout::StartWorkoutPage;
pub use workouts::WorkoutsPage;
