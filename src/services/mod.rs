pub mod actions;
pub mod calendar;
pub mod recorder;
pub mod renderer;
pub mod transition;
pub mod window;

pub use actions::{ActionClassifier, ClassifiedActions};
pub use calendar::{Accounting, BusinessDayAccountant, HolidayCalendar};
pub use recorder::{compile_comment, CardRecorder, RunSummary, CURRENT_STAGE_MARKER};
pub use renderer::CommentRenderer;
pub use transition::{StageTransitionResolver, Transition};
pub use window::LastMoveDateResolver;
