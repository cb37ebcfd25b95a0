pub mod create;
pub use create as Create;

pub mod list;
pub use list as List;

pub mod get;
pub use get as Get;

pub mod add_member;
pub use add_member as AddMember;

pub mod remove_member;
pub use remove_member as RemoveMember;

pub mod delete;
pub use delete as Delete;
