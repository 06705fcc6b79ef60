mod choose_quiz;
mod info;
mod page;
mod quiz;
mod result;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use choose_quiz::ChooseQuizView;
pub use info::{DashboardView, FeaturesView};
pub use page::{NoticeBanner, Page, Panel, RouteButton};
pub use quiz::QuizView;
pub use result::ResultView;
pub use welcome::WelcomeView;
