pub mod create;
pub use create as Create;

pub mod list;
pub use list as List;

pub mod messages;
pub use messages as Messages;

pub mod add_message;
pub use add_message as AddMessage;

pub mod delete_message;
pub use delete_message as DeleteMessage;
