pub mod app;
pub mod event;
pub mod input;
pub mod scene;
pub mod scheduler;
pub mod widgets;

pub use app::App;
pub use scheduler::FrameScheduler;
