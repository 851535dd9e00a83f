mod bootstrap;
mod diagnostics;
mod radio;
mod wand_task;

pub use bootstrap::run;
