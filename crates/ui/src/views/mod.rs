mod alerts;
mod flag;
mod game;

pub use alerts::{GameOverAlert, RoundAlert};
pub use flag::FlagImage;
pub use game::{GameBoard, GameView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
