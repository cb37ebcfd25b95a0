pub mod create;
pub use create as Create;

pub mod list;
pub use list as List;

pub mod get;
pub use get as Get;

pub mod delete;
pub use delete as Delete;

pub mod add_participant;
pub use add_participant as AddParticipant;

pub mod remove_participant;
pub use remove_participant as RemoveParticipant;
