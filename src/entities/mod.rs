// Entity Models
//
// Each entity is built once from a validated record:
// - input fields are copied in declared order and never change
// - derived state (user balance, company groups) is filled in afterwards

pub mod amount;
pub mod company;
pub mod fields;
pub mod id;
pub mod user;

pub use amount::Amount;
pub use company::Company;
pub use id::EntityId;
pub use user::User;
