/// Collision monitor aborting paths the hostile touches
pub mod collision;
/// Random-walk motion of the hostile entity
pub mod hostile;
/// Player state machine and drawn path tracking
pub mod path;
/// Cut, seed selection and flood-fill claim resolution
pub mod resolver;
/// Tick loop tying the components together in order
pub mod session;
