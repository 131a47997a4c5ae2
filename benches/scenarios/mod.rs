mod click_engine;
mod scheduler;

pub use click_engine::bench_click_engine;
pub use scheduler::bench_scheduler;
