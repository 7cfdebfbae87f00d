//! Built-in behavior units

mod adventure;
mod anim;
mod speak;
mod wait;
mod walk;

pub use adventure::Adventure;
pub use anim::Anim;
pub use speak::Speak;
pub use wait::Wait;
pub use walk::Walk;

/// Sprite sheet column used while facing left.
pub const FACING_LEFT: i32 = 1;
/// Sprite sheet column used while facing right.
pub const FACING_RIGHT: i32 = 2;
