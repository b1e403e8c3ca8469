pub mod hit;
pub mod result;
pub mod variant;
pub mod window;

// re-export for cleaner imports
pub use self::hit::{HitList, MotifHit};
pub use self::result::{Effect, Strand, StrandedResult};
pub use self::variant::Variant;
pub use self::window::SequenceWindow;
