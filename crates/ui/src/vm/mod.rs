mod flag_vm;
mod quiz_vm;
mod time_fmt;

pub use flag_vm::{FlagOverlayVm, FlagVm, map_flag};
pub use quiz_vm::{
    AlertVm, FlagButtonVm, FlagEmphasis, GameScreenVm, QuizIntent, QuizVm, intent_for_key,
};
