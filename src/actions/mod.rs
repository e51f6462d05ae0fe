pub mod create_joke;
pub mod delete_joke;
pub mod login;
pub mod register;

pub use create_joke::CreateJokeAction;
pub use delete_joke::DeleteJokeAction;
pub use login::LoginAction;
pub use register::RegisterAction;
